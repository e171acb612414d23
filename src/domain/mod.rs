//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the pieces a user record is
//! assembled from. These value objects validate at construction time and
//! prevent invalid data from being represented in the system.

pub mod address;
pub mod errors;
pub mod phone;

pub use address::Address;
pub use errors::{ValidationError, ValidationResult};
pub use phone::PhoneNumber;
