//! Address value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address identified by its `(street, number)` pair.
///
/// Two addresses are equal exactly when both parts are equal; the street
/// comparison is case-sensitive.
///
/// # Example
///
/// ```
/// use user_builder::domain::Address;
///
/// let addr = Address::new("nowhere", 123).unwrap();
/// assert_eq!(addr.to_string(), "nowhere, 123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAddress")]
pub struct Address {
    street: String,
    number: u32,
}

#[derive(Deserialize)]
struct RawAddress {
    street: String,
    number: u32,
}

impl TryFrom<RawAddress> for Address {
    type Error = ValidationError;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        Address::new(raw.street, raw.number)
    }
}

impl Address {
    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyStreet` if the street is blank.
    pub fn new(street: impl Into<String>, number: u32) -> Result<Self, ValidationError> {
        let street = street.into();
        if street.trim().is_empty() {
            return Err(ValidationError::EmptyStreet);
        }
        Ok(Self { street, number })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.number)
    }
}
