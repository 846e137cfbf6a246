use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleQuestion, FaTicket};
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            h1 { class: "home-title", "What do you need help with?" }
            p { class: "home-subtitle", "Please choose an option below" }

            div { class: "home-actions",
                Link { to: Route::TicketNewPage {}, class: "home-action",
                    Icon::<FaCircleQuestion> { icon: FaCircleQuestion, width: 20, height: 20 }
                    "Create New Ticket"
                }
                Link { to: Route::TicketListPage {}, class: "home-action secondary",
                    Icon::<FaTicket> { icon: FaTicket, width: 20, height: 20 }
                    "View My Tickets"
                }
            }
        }
    }
}
