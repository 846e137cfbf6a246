use dioxus::prelude::*;

/// A full-area busy indicator shown while a page's data is loading.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrapper", role: "status", aria_label: "Loading",
            div { class: "spinner" }
        }
    }
}
