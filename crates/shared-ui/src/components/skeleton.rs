use dioxus::prelude::*;

use crate::merge_attributes;

/// A loading placeholder with animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
        }
    }
}
