use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

#[derive(Clone, Copy)]
struct DialogCtx {
    on_open_change: EventHandler<bool>,
}

/// Controlled modal dialog. Renders nothing while closed; clicking the
/// overlay requests close via `on_open_change(false)`.
#[component]
pub fn DialogRoot(
    open: bool,
    #[props(default)] on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    use_context_provider(|| DialogCtx { on_open_change });

    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_open_change.call(false),
            {children}
        }
    }
}

/// Dialog panel. Swallows clicks so only the overlay closes the dialog,
/// and carries its own close button.
#[component]
pub fn DialogContent(children: Element) -> Element {
    let ctx = use_context::<DialogCtx>();

    rsx! {
        div {
            class: "dialog-content",
            role: "dialog",
            aria_modal: "true",
            onclick: move |evt| evt.stop_propagation(),
            button {
                class: "dialog-close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| ctx.on_open_change.call(false),
                Icon::<FaXmark> { icon: FaXmark, width: 16, height: 16 }
            }
            {children}
        }
    }
}

/// Dialog heading.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "dialog-title", {children} }
    }
}
