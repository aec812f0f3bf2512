//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed syntax validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Another contact already uses this phone number
    #[error("Phone number already in use: {0}")]
    DuplicatePhone(String),

    /// Another contact already uses this email address
    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    /// The store is at capacity
    #[error("Contact list is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// No contact has the requested name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The store holds no contacts
    #[error("No contacts available")]
    Empty,
}

/// Errors produced while reading a menu choice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Input was not an integer
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// Input was an integer outside the menu range
    #[error("Choice {0} is out of range")]
    OutOfRange(i64),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with MenuError
pub type MenuResult<T> = Result<T, MenuError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
