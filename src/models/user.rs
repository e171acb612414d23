//! User model, the aggregate produced by [`UserBuilder`].

use crate::builders::UserBuilder;
use crate::domain::{Address, PhoneNumber};
use chrono::NaiveDate;
use serde::Serialize;

/// A fully assembled user.
///
/// Users are created only through [`UserBuilder::build`] and expose no way to
/// change their fields afterwards. To derive a modified copy, seed a new
/// builder with [`UserBuilder::from_user`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    addresses: Vec<Address>,
    phones: Vec<PhoneNumber>,
}

impl User {
    /// Start building a new user, validating birth dates against the system clock.
    pub fn builder() -> UserBuilder {
        UserBuilder::new()
    }

    pub(crate) fn new(
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        addresses: Vec<Address>,
        phones: Vec<PhoneNumber>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            birth_date,
            addresses,
            phones,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Addresses in the order they were added.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The first address added, if any.
    pub fn main_address(&self) -> Option<&Address> {
        self.addresses.first()
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }
}
