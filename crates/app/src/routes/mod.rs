pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod tickets;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::auth::use_auth;

use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;
use tickets::detail::TicketDetailPage;
use tickets::list::TicketListPage;
use tickets::new::TicketNewPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/tickets")]
    TicketListPage {},
    #[route("/new-ticket")]
    TicketNewPage {},
    #[route("/ticket/:id")]
    TicketDetailPage { id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// During hydration the embedded data is available immediately.
/// A `SuspenseBoundary` in `App` catches the suspension and shows a fallback.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let user_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let handle_logout = move |_: MouseEvent| {
        spawn(async move {
            let _ = server::api::logout().await;
            auth.clear_auth();
            navigator().push(Route::Login {});
        });
    };

    rsx! {
        header { class: "navbar",
            Link { to: Route::Home {}, class: "navbar-brand", "Support Desk" }
            nav { class: "navbar-links",
                Link {
                    to: Route::TicketListPage {},
                    class: if matches!(route, Route::TicketListPage {} | Route::TicketDetailPage { .. }) {
                        "navbar-link active"
                    } else {
                        "navbar-link"
                    },
                    "Tickets"
                }
                Link {
                    to: Route::TicketNewPage {},
                    class: if matches!(route, Route::TicketNewPage {}) {
                        "navbar-link active"
                    } else {
                        "navbar-link"
                    },
                    "New Ticket"
                }
            }
            div { class: "navbar-user",
                span { class: "navbar-user-name", "{user_name}" }
                button {
                    class: "navbar-logout",
                    r#type: "button",
                    onclick: handle_logout,
                    Icon::<FaRightFromBracket> { icon: FaRightFromBracket, width: 14, height: 14 }
                    "Logout"
                }
            }
        }
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}
