use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn badge_renders_variant_class() {
    fn app() -> Element {
        rsx! {
            Badge { variant: BadgeVariant::Destructive, "closed" }
        }
    }
    let html = render(app);
    assert!(html.contains("class=\"badge\""), "got: {html}");
    assert!(html.contains("data-style=\"destructive\""), "got: {html}");
    assert!(html.contains("closed"), "got: {html}");
}

#[test]
fn button_defaults_to_non_submitting_type() {
    fn app() -> Element {
        rsx! {
            Button { "Save" }
        }
    }
    let html = render(app);
    assert!(html.contains("type=\"button\""), "got: {html}");
}

#[test]
fn closed_dialog_renders_nothing() {
    fn app() -> Element {
        rsx! {
            DialogRoot { open: false,
                DialogContent {
                    DialogTitle { "Add Note" }
                }
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("dialog-overlay"), "got: {html}");
    assert!(!html.contains("Add Note"), "got: {html}");
}

#[test]
fn open_dialog_renders_title_and_close_button() {
    fn app() -> Element {
        rsx! {
            DialogRoot { open: true,
                DialogContent {
                    DialogTitle { "Add Note" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("dialog-overlay"), "got: {html}");
    assert!(html.contains("Add Note"), "got: {html}");
    assert!(html.contains("aria-label=\"Close\""), "got: {html}");
}

#[test]
fn closed_alert_dialog_renders_nothing() {
    fn app() -> Element {
        rsx! {
            AlertDialogRoot { open: false,
                AlertDialogContent {
                    AlertDialogTitle { "Are you sure?" }
                }
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("alertdialog"), "got: {html}");
    assert!(!html.contains("Are you sure?"), "got: {html}");
}

#[test]
fn open_alert_dialog_renders_both_actions() {
    fn app() -> Element {
        rsx! {
            AlertDialogRoot { open: true,
                AlertDialogContent {
                    AlertDialogTitle { "Delete ticket" }
                    AlertDialogDescription { "This cannot be undone." }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction { "Delete" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("role=\"alertdialog\""), "got: {html}");
    assert!(html.contains("Cancel"), "got: {html}");
    assert!(html.contains("Delete"), "got: {html}");
}

#[test]
fn toast_provider_starts_with_empty_viewport() {
    fn app() -> Element {
        rsx! {
            ToastProvider {
                div { "content" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("content"), "got: {html}");
    assert!(html.contains("toast-viewport"), "got: {html}");
    assert!(!html.contains("toast-message"), "got: {html}");
}

#[test]
fn input_renders_label_only_when_present() {
    fn app() -> Element {
        rsx! {
            Input { label: "Email".to_string(), placeholder: "you@example.com".to_string() }
            Input { placeholder: "no label".to_string() }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("input-label").count(), 1, "got: {html}");
}

#[test]
fn spinner_is_a_status_region() {
    fn app() -> Element {
        rsx! {
            Spinner {}
        }
    }
    let html = render(app);
    assert!(html.contains("role=\"status\""), "got: {html}");
    assert!(html.contains("spinner"), "got: {html}");
}
