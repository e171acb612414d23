//! Data models built by this crate.

pub mod user;

pub use user::User;
