use dioxus::prelude::*;

/// Oldest toasts are dropped past this point.
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for enqueueing toasts from anywhere under a `ToastProvider`.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id += 1;

        let mut items = self.items;
        let mut list = items.write();
        list.push(ToastItem { id, kind, message });
        if list.len() > MAX_TOASTS {
            let overflow = list.len() - MAX_TOASTS;
            list.drain(0..overflow);
        }
    }
}

/// Access the toast handle provided by the nearest `ToastProvider`.
pub fn use_toast() -> Toasts {
    use_context()
}

/// Provides the toast context and renders the notification viewport.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    let current: Vec<ToastItem> = toasts.items.read().clone();

    rsx! {
        {children}
        div { class: "toast-viewport",
            for item in current {
                div {
                    key: "{item.id}",
                    class: "toast",
                    "data-kind": item.kind.class(),
                    role: "status",
                    span { class: "toast-message", "{item.message}" }
                    button {
                        class: "toast-dismiss",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: move |_| toasts.dismiss(item.id),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
