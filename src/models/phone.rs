//! Phone number value object

use std::fmt;

use crate::error::{ContactError, ContactResult};

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number: exactly ten ASCII decimal digits
///
/// Phones are validated at construction, so an invalid number is never
/// stored on a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` unless the input is exactly ten
    /// decimal digits.
    pub fn new(phone: impl Into<String>) -> ContactResult<Self> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ContactError::invalid_phone());
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
