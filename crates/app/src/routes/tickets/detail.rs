use dioxus::prelude::*;
use shared_types::{AppError, CreateNoteRequest, NoteResponse, TicketResponse, TicketStatus};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, DialogContent, DialogRoot,
    DialogTitle, PageActions, PageHeader, PageTitle, Spinner, Textarea,
};

use crate::auth::use_auth;
use crate::format_helpers::format_datetime_human;
use crate::routes::Route;

/// Badge styling for each ticket status.
pub(crate) fn status_variant(status: TicketStatus) -> BadgeVariant {
    match status {
        TicketStatus::New => BadgeVariant::Primary,
        TicketStatus::Open => BadgeVariant::Secondary,
        TicketStatus::Closed => BadgeVariant::Destructive,
    }
}

/// Single-ticket page: resolves the ticket and notes resources into one of
/// three mutually exclusive render modes (loading, error, ready).
///
/// Close and delete are fire-and-forget: the success toast and navigation
/// happen immediately, and a failure surfaces later as an error toast.
#[component]
pub fn TicketDetailPage(id: ReadOnlySignal<String>) -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut show_note_modal = use_signal(|| false);
    let note_text = use_signal(String::new);
    let mut show_delete_confirm = use_signal(|| false);

    // Reading `id` inside the resource closures subscribes them to the route
    // parameter, so an identifier change restarts both fetches.
    let ticket = use_resource(move || {
        let tid = id();
        async move {
            match server::api::get_ticket(tid).await {
                Ok(t) => Ok(t),
                Err(e) => {
                    // One toast per failed fetch attempt
                    toast.error(AppError::friendly_message(&e.to_string()));
                    Err(e)
                }
            }
        }
    });

    let mut notes = use_resource(move || {
        let tid = id();
        async move { server::api::list_notes(tid).await }
    });

    let handle_note_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let tid = id();
        spawn(async move {
            let req = CreateNoteRequest {
                note_text: note_text.peek().clone(),
                ticket_id: tid,
            };
            match server::api::create_note(req).await {
                Ok(_) => {
                    let mut note_text = note_text;
                    show_note_modal.set(false);
                    note_text.set(String::new());
                    notes.restart();
                }
                Err(e) => toast.error(AppError::friendly_message(&e.to_string())),
            }
        });
    };

    let handle_close = move |_: MouseEvent| {
        let tid = id();
        toast.success("Ticket closed");
        navigator().push(Route::TicketListPage {});
        spawn(async move {
            if let Err(e) = server::api::close_ticket(tid).await {
                tracing::warn!(error = %e, "Close ticket failed after navigation");
                toast.error(AppError::friendly_message(&e.to_string()));
            }
        });
    };

    let handle_delete = move |_: MouseEvent| {
        let tid = id();
        toast.success("Ticket deleted");
        navigator().push(Route::TicketListPage {});
        spawn(async move {
            if let Err(e) = server::api::delete_ticket(tid).await {
                tracing::warn!(error = %e, "Delete ticket failed after navigation");
                toast.error(AppError::friendly_message(&e.to_string()));
            }
        });
    };

    let user_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "You".to_string());

    let ticket_result = ticket.read().clone();
    let notes_result = notes.read().clone();

    match (ticket_result, notes_result) {
        // Loading until both fetches settle
        (None, _) | (_, None) => rsx! {
            Spinner {}
        },
        (Some(Err(_)), _) => rsx! {
            TicketLoadError {}
        },
        (Some(Ok(ticket)), Some(notes_fetch)) => {
            let (notes_list, notes_failed) = match notes_fetch {
                Ok(list) => (list, false),
                Err(_) => (Vec::new(), true),
            };

            rsx! {
                TicketView {
                    ticket,
                    notes: notes_list,
                    notes_failed,
                    user_name,
                    back: rsx! {
                        Link { to: Route::TicketListPage {},
                            Button { variant: ButtonVariant::Secondary, "Back" }
                        }
                    },
                    note_text,
                    show_note_modal,
                    show_delete_confirm,
                    on_close: handle_close,
                    on_delete: handle_delete,
                    on_note_submit: handle_note_submit,
                }
            }
        }
    }
}

/// Error render mode: the generic failure message replaces the entire view.
#[component]
fn TicketLoadError() -> Element {
    rsx! {
        div { class: "empty-state",
            h2 { "Something Went Wrong" }
            p { "This ticket could not be loaded." }
        }
    }
}

/// Ready render mode. Purely presentational: all data and handlers arrive as
/// props so the closed-ticket gating can be exercised in render tests.
#[component]
fn TicketView(
    ticket: TicketResponse,
    notes: Vec<NoteResponse>,
    notes_failed: bool,
    user_name: String,
    back: Element,
    mut note_text: Signal<String>,
    mut show_note_modal: Signal<bool>,
    mut show_delete_confirm: Signal<bool>,
    #[props(default)] on_close: EventHandler<MouseEvent>,
    #[props(default)] on_delete: EventHandler<MouseEvent>,
    #[props(default)] on_note_submit: EventHandler<FormEvent>,
) -> Element {
    let closed = ticket.status.is_closed();

    rsx! {
        PageHeader {
            PageTitle { "Ticket {ticket.id}" }
            PageActions {
                {back}
                if !closed {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |evt| on_close.call(evt),
                        "Close Ticket"
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| show_delete_confirm.set(true),
                    "Delete"
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "{ticket.product}" }
                Badge { variant: status_variant(ticket.status), "{ticket.status}" }
            }
            CardContent {
                p { class: "ticket-date",
                    "Date submitted: {format_datetime_human(&ticket.created_at)}"
                }
                div { class: "ticket-description",
                    h3 { "Description of issue" }
                    p { "{ticket.description}" }
                }
            }
        }

        section { class: "notes-section",
            div { class: "notes-header",
                h2 { "Notes" }
                if !closed {
                    Button {
                        onclick: move |_| show_note_modal.set(true),
                        "Add Note"
                    }
                }
            }

            if notes_failed {
                p { class: "notes-error", "Unable to load notes." }
            } else if notes.is_empty() {
                p { class: "notes-empty", "No notes yet." }
            }
            for note in notes {
                Card { key: "{note.id}", class: "note-card",
                    CardHeader {
                        span { class: "note-author",
                            if note.is_staff { "Note from Staff" } else { "Note from {user_name}" }
                        }
                        span { class: "note-date",
                            "{format_datetime_human(&note.created_at)}"
                        }
                    }
                    CardContent {
                        p { "{note.text}" }
                    }
                }
            }
        }

        DialogRoot {
            open: show_note_modal(),
            on_open_change: move |v| show_note_modal.set(v),
            DialogContent {
                DialogTitle { "Add Note" }
                form { class: "note-form", onsubmit: move |evt| on_note_submit.call(evt),
                    Textarea {
                        placeholder: "Note text",
                        value: note_text(),
                        on_input: move |e: FormEvent| note_text.set(e.value()),
                    }
                    button { r#type: "submit", class: "button", "Submit" }
                }
            }
        }

        AlertDialogRoot {
            open: show_delete_confirm(),
            on_open_change: move |v| show_delete_confirm.set(v),
            AlertDialogContent {
                AlertDialogTitle { "Delete Ticket" }
                AlertDialogDescription {
                    "Are you sure you want to delete this ticket? This action cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { onclick: move |evt| on_delete.call(evt), "Delete" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn sample_ticket(status: TicketStatus) -> TicketResponse {
        TicketResponse {
            id: "6f1d2c80-6d6f-4b8e-9f64-0a8c1a2b3c4d".to_string(),
            product: "iPhone".to_string(),
            status,
            description: "Screen stays black after charging".to_string(),
            created_at: "2026-01-20T21:35:00Z".to_string(),
        }
    }

    fn sample_notes() -> Vec<NoteResponse> {
        let make = |id: &str, text: &str, is_staff: bool| NoteResponse {
            id: id.to_string(),
            ticket_id: "t".to_string(),
            text: text.to_string(),
            is_staff,
            created_at: "2026-01-21T09:00:00Z".to_string(),
        };
        vec![
            make("n1", "We are looking into it", true),
            make("n2", "Any update?", false),
        ]
    }

    fn view(status: TicketStatus, notes: Vec<NoteResponse>) -> Element {
        let note_text = use_signal(String::new);
        let show_note_modal = use_signal(|| false);
        let show_delete_confirm = use_signal(|| false);
        rsx! {
            TicketView {
                ticket: sample_ticket(status),
                notes,
                notes_failed: false,
                user_name: "Riley",
                back: rsx! {},
                note_text,
                show_note_modal,
                show_delete_confirm,
            }
        }
    }

    #[component]
    fn OpenTicketHarness() -> Element {
        view(TicketStatus::New, Vec::new())
    }

    #[component]
    fn ClosedTicketHarness() -> Element {
        view(TicketStatus::Closed, Vec::new())
    }

    #[component]
    fn NotesHarness() -> Element {
        view(TicketStatus::Open, sample_notes())
    }

    #[test]
    fn badge_variant_tracks_status() {
        assert_eq!(status_variant(TicketStatus::New), BadgeVariant::Primary);
        assert_eq!(status_variant(TicketStatus::Open), BadgeVariant::Secondary);
        assert_eq!(
            status_variant(TicketStatus::Closed),
            BadgeVariant::Destructive
        );
    }

    #[test]
    fn header_shows_ticket_identifier() {
        fn app() -> Element {
            rsx! { OpenTicketHarness {} }
        }
        let html = render(app);
        assert!(
            html.contains("Ticket 6f1d2c80-6d6f-4b8e-9f64-0a8c1a2b3c4d"),
            "got: {html}"
        );
    }

    #[test]
    fn open_ticket_shows_all_actions() {
        fn app() -> Element {
            rsx! { OpenTicketHarness {} }
        }
        let html = render(app);
        assert!(html.contains("Close Ticket"), "got: {html}");
        assert!(html.contains("Add Note"), "got: {html}");
        assert!(html.contains("Delete"), "got: {html}");
    }

    #[test]
    fn closed_ticket_hides_add_note_and_close_but_keeps_delete() {
        fn app() -> Element {
            rsx! { ClosedTicketHarness {} }
        }
        let html = render(app);
        assert!(!html.contains("Close Ticket"), "got: {html}");
        assert!(!html.contains("Add Note"), "got: {html}");
        assert!(html.contains("Delete"), "got: {html}");
    }

    #[test]
    fn notes_render_in_given_order_with_author_labels() {
        fn app() -> Element {
            rsx! { NotesHarness {} }
        }
        let html = render(app);
        assert!(html.contains("Note from Staff"), "got: {html}");
        assert!(html.contains("Note from Riley"), "got: {html}");
        let first = html.find("We are looking into it").expect("staff note");
        let second = html.find("Any update?").expect("user note");
        assert!(first < second, "notes reordered: {html}");
    }

    #[test]
    fn error_mode_is_only_the_generic_message() {
        fn app() -> Element {
            rsx! { TicketLoadError {} }
        }
        let html = render(app);
        assert!(html.contains("Something Went Wrong"), "got: {html}");
        assert!(!html.contains("<a"), "error mode has no links: {html}");
        assert!(!html.contains("button"), "error mode has no actions: {html}");
    }
}
