//! Builders that assemble a [`User`](crate::models::User).
//!
//! [`UserBuilder`] owns one [`PhoneCollectionBuilder`] and one
//! [`AddressCollectionBuilder`] and hands them out for chained insertion.
//! All validation happens when a value is added, not when `build` runs.

pub mod addresses;
pub mod phones;
pub mod user;

pub use addresses::AddressCollectionBuilder;
pub use phones::PhoneCollectionBuilder;
pub use user::UserBuilder;
