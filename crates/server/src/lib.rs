pub mod api;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod db;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod repo;
