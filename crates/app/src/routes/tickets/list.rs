use dioxus::prelude::*;
use shared_ui::{
    Badge, Button, ButtonVariant, PageActions, PageHeader, PageTitle, Skeleton, Spinner,
};

use crate::format_helpers::format_date_human;
use crate::routes::Route;
use crate::routes::tickets::detail::status_variant;

/// All of the current user's tickets, newest first.
#[component]
pub fn TicketListPage() -> Element {
    let tickets = use_resource(move || async move { server::api::list_tickets().await });

    rsx! {
        PageHeader {
            PageTitle { "Tickets" }
            PageActions {
                Link { to: Route::TicketNewPage {},
                    Button { "New Ticket" }
                }
            }
        }

        match &*tickets.read() {
            None => rsx! {
                Spinner {}
                div { class: "ticket-list-loading",
                    Skeleton { class: "ticket-row-skeleton" }
                    Skeleton { class: "ticket-row-skeleton" }
                    Skeleton { class: "ticket-row-skeleton" }
                }
            },
            Some(Err(_)) => rsx! {
                div { class: "empty-state",
                    h2 { "Something Went Wrong" }
                    p { "Your tickets could not be loaded. Please try again." }
                }
            },
            Some(Ok(tickets)) if tickets.is_empty() => rsx! {
                div { class: "empty-state",
                    h2 { "No tickets yet" }
                    p { "When you open a support ticket it will show up here." }
                    Link { to: Route::TicketNewPage {},
                        Button { "Create New Ticket" }
                    }
                }
            },
            Some(Ok(tickets)) => rsx! {
                div { class: "ticket-table",
                    div { class: "ticket-table-header",
                        span { "Date" }
                        span { "Product" }
                        span { "Status" }
                        span {}
                    }
                    for ticket in tickets.iter() {
                        div { key: "{ticket.id}", class: "ticket-row",
                            span { "{format_date_human(&ticket.created_at)}" }
                            span { "{ticket.product}" }
                            span {
                                Badge { variant: status_variant(ticket.status), "{ticket.status}" }
                            }
                            span {
                                Link { to: Route::TicketDetailPage { id: ticket.id.clone() },
                                    Button { variant: ButtonVariant::Outline, "View" }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
