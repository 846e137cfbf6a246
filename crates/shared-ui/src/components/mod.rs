// Standalone components (no external primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod spinner;
pub mod textarea;

// Overlay components
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

// Re-exports for convenience
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use spinner::*;
pub use textarea::*;
pub use toast::*;
