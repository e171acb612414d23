//! Domain validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when a builder or value object rejects its input.
///
/// Every variant is produced synchronously by the call that received the
/// offending value. Nothing is batched or deferred to `build`, except the
/// required-field check in [`MissingField`](ValidationError::MissingField).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone token is empty or contains something other than digits.
    #[error("The phone {phone:?} {reason}. Make sure it has only numbers")]
    InvalidPhoneFormat { phone: String, reason: &'static str },

    /// The address pair is already staged in the builder.
    #[error("The address {street}, {number} is already registered for this user")]
    DuplicateAddress { street: String, number: u32 },

    /// The birth date lies after the current date.
    #[error("Invalid birth date {date}: it is after today ({today})")]
    FutureBirthDate { date: NaiveDate, today: NaiveDate },

    /// The street part of an address is blank.
    #[error("Street cannot be empty")]
    EmptyStreet,

    /// A name field was set to blank text.
    #[error("{field} cannot be empty")]
    EmptyName { field: &'static str },

    /// `build` was called before a required field was set.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidPhoneFormat {
            phone: "85-555555".to_string(),
            reason: "contains non-numeric characters",
        };
        assert_eq!(
            err.to_string(),
            "The phone \"85-555555\" contains non-numeric characters. Make sure it has only numbers"
        );

        let err = ValidationError::DuplicateAddress {
            street: "vaga lumes".to_string(),
            number: 456,
        };
        assert_eq!(
            err.to_string(),
            "The address vaga lumes, 456 is already registered for this user"
        );

        let err = ValidationError::MissingField { field: "birth_date" };
        assert_eq!(err.to_string(), "Missing required field: birth_date");
    }

    #[test]
    fn test_future_birth_date_mentions_both_dates() {
        let err = ValidationError::FutureBirthDate {
            date: NaiveDate::from_ymd_opt(2031, 1, 2).unwrap(),
            today: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2031-01-02"));
        assert!(msg.contains("2030-06-01"));
    }
}
