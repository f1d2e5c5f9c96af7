//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Display texts are the bare diagnostic; the
//! command dispatcher adds the `Input error:` prefix when reporting them.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Validation errors for field values (phone, birthday)
    #[error("{0}")]
    Validation(String),

    /// A command was given fewer arguments than it needs
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// `change` on a contact with no stored phone
    #[error("contact '{0}' has no phone number to change")]
    NoPhoneToChange(String),

    /// A blank input line
    #[error("no command entered")]
    EmptyInput,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ContactError {
    /// Create the validation error for a malformed phone number
    pub fn invalid_phone() -> Self {
        Self::Validation("Phone number must be 10 digits".into())
    }

    /// Create the validation error for a malformed birthday
    pub fn invalid_birthday() -> Self {
        Self::Validation("Invalid date format. Use DD.MM.YYYY".into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
