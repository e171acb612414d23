//! Fluent builder for [`User`].

use super::{AddressCollectionBuilder, PhoneCollectionBuilder};
use crate::clock::{Clock, SystemClock};
use crate::domain::{ValidationError, ValidationResult};
use crate::models::User;
use chrono::NaiveDate;
use std::sync::Arc;

/// Assembles a [`User`] from scalar setters and two nested collection builders.
///
/// Every setter validates its argument immediately and either returns the
/// builder for further chaining or fails without changing anything. Values
/// accepted before a failure stay staged.
///
/// The builder is reusable: [`build`](Self::build) leaves all staged state in
/// place, so it can be called again, or after more changes, any number of times.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use user_builder::{User, ValidationError};
///
/// # fn main() -> Result<(), ValidationError> {
/// let mut builder = User::builder();
/// builder
///     .first_name("Saruman")?
///     .last_name("The White")?
///     .birth_date(NaiveDate::from_ymd_opt(1954, 7, 29).unwrap())?;
/// builder.phones().add("55555555")?.add("66666666")?;
/// builder.addresses().add("nowhere", 123)?;
///
/// let user = builder.build()?;
/// assert_eq!(user.phones().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    clock: Arc<dyn Clock>,
    first_name: Option<String>,
    last_name: Option<String>,
    birth_date: Option<NaiveDate>,
    phones: PhoneCollectionBuilder,
    addresses: AddressCollectionBuilder,
}

impl UserBuilder {
    /// Create an empty builder that checks birth dates against the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty builder that checks birth dates against `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            first_name: None,
            last_name: None,
            birth_date: None,
            phones: PhoneCollectionBuilder::new(),
            addresses: AddressCollectionBuilder::new(),
        }
    }

    /// Create a builder pre-filled with a copy of every field of `user`,
    /// checking birth dates against the system clock.
    pub fn from_user(user: &User) -> Self {
        Self::from_user_with_clock(user, Arc::new(SystemClock))
    }

    /// Create a builder pre-filled with a copy of every field of `user`,
    /// checking birth dates against `clock`.
    pub fn from_user_with_clock(user: &User, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            first_name: Some(user.first_name().to_string()),
            last_name: Some(user.last_name().to_string()),
            birth_date: Some(user.birth_date()),
            phones: PhoneCollectionBuilder::seeded(user.phones()),
            addresses: AddressCollectionBuilder::seeded(user.addresses()),
        }
    }

    /// Replace the clock used by later [`birth_date`](Self::birth_date) calls.
    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
        self.clock = clock;
        self
    }

    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `value` is blank.
    pub fn first_name(&mut self, value: impl Into<String>) -> ValidationResult<&mut Self> {
        self.first_name = Some(non_blank("first_name", value.into())?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `value` is blank.
    pub fn last_name(&mut self, value: impl Into<String>) -> ValidationResult<&mut Self> {
        self.last_name = Some(non_blank("last_name", value.into())?);
        Ok(self)
    }

    /// Set the birth date. Today is accepted, tomorrow is not.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FutureBirthDate` if `date` is after the
    /// clock's current date.
    pub fn birth_date(&mut self, date: NaiveDate) -> ValidationResult<&mut Self> {
        let today = self.clock.today();
        if date > today {
            let err = ValidationError::FutureBirthDate { date, today };
            tracing::warn!(error = %err, "Birth date rejected");
            return Err(err);
        }
        self.birth_date = Some(date);
        Ok(self)
    }

    /// The nested builder for phone numbers.
    pub fn phones(&mut self) -> &mut PhoneCollectionBuilder {
        &mut self.phones
    }

    /// The nested builder for addresses.
    pub fn addresses(&mut self) -> &mut AddressCollectionBuilder {
        &mut self.addresses
    }

    /// The first name set so far, if any.
    pub fn staged_first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// The last name set so far, if any.
    pub fn staged_last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// The birth date set so far, if any.
    pub fn staged_birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Materialize the staged fields and collections into a [`User`].
    ///
    /// Nothing is consumed; building twice without changes in between yields
    /// equal users.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if the first name, last name
    /// or birth date has not been set.
    pub fn build(&self) -> ValidationResult<User> {
        let first_name = self
            .first_name
            .clone()
            .ok_or(ValidationError::MissingField { field: "first_name" })?;
        let last_name = self
            .last_name
            .clone()
            .ok_or(ValidationError::MissingField { field: "last_name" })?;
        let birth_date = self
            .birth_date
            .ok_or(ValidationError::MissingField { field: "birth_date" })?;

        let user = User::new(
            first_name,
            last_name,
            birth_date,
            self.addresses.build(),
            self.phones.build(),
        );

        tracing::info!(
            name = %user.full_name(),
            phones = user.phones().len(),
            addresses = user.addresses().len(),
            "User built"
        );

        Ok(user)
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(field: &'static str, value: String) -> ValidationResult<String> {
    if value.trim().is_empty() {
        let err = ValidationError::EmptyName { field };
        tracing::warn!(error = %err, "Name rejected");
        return Err(err);
    }
    Ok(value)
}
