#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod note;
pub use note::*;

mod ticket;
pub use ticket::*;
