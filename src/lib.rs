//! User Builder - a nested fluent builder for user records.
//!
//! A [`UserBuilder`] collects a user's names and birth date through chained
//! setters and hands out two nested builders, one for phone numbers and one
//! for postal addresses. Every input is validated the moment it is added;
//! `build` then assembles an immutable [`User`].
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `Address`) and `ValidationError`
//! - **models**: The built `User` aggregate
//! - **builders**: `UserBuilder` and its nested collection builders
//! - **clock**: Source of "today" for birth date validation
//! - **config**: Configuration management from environment variables
//! - **error**: Application error types

pub mod builders;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use builders::{AddressCollectionBuilder, PhoneCollectionBuilder, UserBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Address, PhoneNumber, ValidationError, ValidationResult};
pub use error::{ConfigError, ConfigResult};
pub use models::User;
