pub mod error;
pub mod note;
pub mod ticket;
pub mod user;

pub use error::*;
pub use note::*;
pub use ticket::*;
pub use user::*;
