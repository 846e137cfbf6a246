use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Merge attribute groups into a single list, combining `class` values.
///
/// Components pass their base attributes first and caller-supplied spread
/// attributes last. All `class` values are joined with a space so callers
/// can extend component styling instead of clobbering it.
pub fn merge_attributes(groups: Vec<Vec<Attribute>>) -> Vec<Attribute> {
    let mut classes: Vec<String> = Vec::new();
    let mut rest: Vec<Attribute> = Vec::new();

    for attr in groups.into_iter().flatten() {
        if attr.name == "class" {
            if let AttributeValue::Text(value) = &attr.value {
                if !value.is_empty() {
                    classes.push(value.clone());
                }
            }
        } else {
            rest.push(attr);
        }
    }

    let mut merged = Vec::with_capacity(rest.len() + 1);
    if !classes.is_empty() {
        merged.push(Attribute::new("class", classes.join(" "), None, false));
    }
    merged.extend(rest);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn class_of(attrs: &[Attribute]) -> Option<String> {
        attrs.iter().find(|a| a.name == "class").and_then(|a| {
            if let AttributeValue::Text(v) = &a.value {
                Some(v.clone())
            } else {
                None
            }
        })
    }

    #[test]
    fn classes_are_joined_in_group_order() {
        let base = vec![Attribute::new("class", "badge", None, false)];
        let extra = vec![Attribute::new("class", "ml-2", None, false)];
        let merged = merge_attributes(vec![base, extra]);
        assert_eq!(class_of(&merged), Some("badge ml-2".to_string()));
    }

    #[test]
    fn non_class_attributes_pass_through() {
        let base = vec![
            Attribute::new("class", "button", None, false),
            Attribute::new("data-style", "primary", None, false),
        ];
        let merged = merge_attributes(vec![base, vec![]]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().any(|a| a.name == "data-style"));
    }

    #[test]
    fn empty_class_values_are_dropped() {
        let base = vec![Attribute::new("class", "", None, false)];
        let merged = merge_attributes(vec![base]);
        assert_eq!(class_of(&merged), None);
    }
}
