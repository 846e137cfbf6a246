use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct AlertDialogCtx {
    on_open_change: EventHandler<bool>,
}

/// Controlled confirmation dialog. Unlike `DialogRoot` the overlay does not
/// close it; the user must pick an action.
#[component]
pub fn AlertDialogRoot(
    open: bool,
    #[props(default)] on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    use_context_provider(|| AlertDialogCtx { on_open_change });

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "alert-dialog-overlay",
            {children}
        }
    }
}

#[component]
pub fn AlertDialogContent(children: Element) -> Element {
    rsx! {
        div {
            class: "alert-dialog-content",
            role: "alertdialog",
            aria_modal: "true",
            {children}
        }
    }
}

#[component]
pub fn AlertDialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "alert-dialog-title", {children} }
    }
}

#[component]
pub fn AlertDialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "alert-dialog-description", {children} }
    }
}

#[component]
pub fn AlertDialogActions(children: Element) -> Element {
    rsx! {
        div { class: "alert-dialog-actions", {children} }
    }
}

/// Dismisses the dialog without confirming.
#[component]
pub fn AlertDialogCancel(children: Element) -> Element {
    let ctx = use_context::<AlertDialogCtx>();

    rsx! {
        button {
            class: "alert-dialog-cancel",
            r#type: "button",
            onclick: move |_| ctx.on_open_change.call(false),
            {children}
        }
    }
}

/// Confirms the dialog: runs the handler, then closes.
#[component]
pub fn AlertDialogAction(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let ctx = use_context::<AlertDialogCtx>();

    rsx! {
        button {
            class: "alert-dialog-action",
            r#type: "button",
            onclick: move |evt| {
                onclick.call(evt);
                ctx.on_open_change.call(false);
            },
            {children}
        }
    }
}
