//! Staging area for a user's phone numbers.

use crate::domain::{PhoneNumber, ValidationResult};

/// Accumulates validated phone numbers in insertion order.
///
/// Duplicate numbers are accepted: a user may list the same number twice.
#[derive(Debug, Clone, Default)]
pub struct PhoneCollectionBuilder {
    phones: Vec<PhoneNumber>,
}

impl PhoneCollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of existing phone numbers.
    pub fn seeded(phones: &[PhoneNumber]) -> Self {
        Self {
            phones: phones.to_vec(),
        }
    }

    /// Validate `phone` and append it.
    ///
    /// On error the staged numbers are left untouched.
    pub fn add(&mut self, phone: impl Into<String>) -> ValidationResult<&mut Self> {
        match PhoneNumber::new(phone) {
            Ok(phone) => {
                tracing::debug!(phone = %phone, staged = self.phones.len() + 1, "Phone accepted");
                self.phones.push(phone);
                Ok(self)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Phone rejected");
                Err(e)
            }
        }
    }

    /// The staged numbers, in insertion order. Does not clear the buffer.
    pub fn build(&self) -> Vec<PhoneNumber> {
        self.phones.clone()
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
