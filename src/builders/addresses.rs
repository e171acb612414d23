//! Staging area for a user's addresses.

use crate::domain::{Address, ValidationError, ValidationResult};
use std::collections::{HashMap, HashSet};

/// Accumulates addresses in insertion order, rejecting repeated
/// `(street, number)` pairs at insertion time.
#[derive(Debug, Clone, Default)]
pub struct AddressCollectionBuilder {
    addresses: Vec<Address>,
    // Identity keys of `addresses`, grouped by number then street.
    seen: HashMap<u32, HashSet<String>>,
}

impl AddressCollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of existing addresses.
    ///
    /// The seed is taken as-is, even if it repeats a pair; only later calls
    /// to [`add`](Self::add) are checked, against everything staged so far.
    pub fn seeded(addresses: &[Address]) -> Self {
        let mut builder = Self {
            addresses: addresses.to_vec(),
            seen: HashMap::new(),
        };
        for address in addresses {
            builder.index(address);
        }
        builder
    }

    /// Stage the address `(street, number)`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::DuplicateAddress` if the pair is already staged
    /// - `ValidationError::EmptyStreet` if `street` is blank
    ///
    /// On error the staged addresses are left untouched.
    pub fn add(&mut self, street: impl Into<String>, number: u32) -> ValidationResult<&mut Self> {
        let result = Address::new(street, number).and_then(|address| {
            if self.contains(address.street(), address.number()) {
                return Err(ValidationError::DuplicateAddress {
                    street: address.street().to_string(),
                    number: address.number(),
                });
            }
            Ok(address)
        });

        match result {
            Ok(address) => {
                tracing::debug!(address = %address, staged = self.addresses.len() + 1, "Address accepted");
                self.index(&address);
                self.addresses.push(address);
                Ok(self)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Address rejected");
                Err(e)
            }
        }
    }

    /// Whether `(street, number)` is already staged.
    pub fn contains(&self, street: &str, number: u32) -> bool {
        self.seen
            .get(&number)
            .is_some_and(|streets| streets.contains(street))
    }

    /// The staged addresses, in insertion order. Does not clear the buffer.
    pub fn build(&self) -> Vec<Address> {
        self.addresses.clone()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    fn index(&mut self, address: &Address) {
        self.seen
            .entry(address.number())
            .or_default()
            .insert(address.street().to_string());
    }
}
