pub mod attributes;
pub mod components;

pub use attributes::merge_attributes;
pub use components::*;
