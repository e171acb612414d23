//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number made only of decimal digits.
///
/// Formatting characters such as spaces, hyphens or a leading `+` are not
/// accepted; callers must strip them before handing the number over.
///
/// # Example
///
/// ```
/// use user_builder::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("55555555").unwrap();
/// assert_eq!(phone.as_str(), "55555555");
/// assert!(PhoneNumber::new("85-555555").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating that it is digits only.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the token is empty or
    /// contains any non-digit character.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.is_empty() {
            return Err(ValidationError::InvalidPhoneFormat {
                phone,
                reason: "is empty",
            });
        }

        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneFormat {
                phone,
                reason: "contains non-numeric characters",
            });
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
