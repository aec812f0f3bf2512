//! Contact model representing one entry in the contact book.

use crate::domain::{ContactName, EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator printed under every contact block.
pub const CONTACT_SEPARATOR: &str = "-----------------------";

/// A contact: name, phone and email.
///
/// Every field is a validated value object, so a `Contact` can only exist
/// in a valid state. Contacts are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Validate raw field values and build a contact.
    ///
    /// Fields are checked in order (name, phone, email) and the first
    /// failure is returned.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    /// Build a contact from already validated parts.
    pub fn from_parts(name: ContactName, phone: PhoneNumber, email: EmailAddress) -> Self {
        Self { name, phone, email }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Renders the multi-line block shown by search and display.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "{}", CONTACT_SEPARATOR)
    }
}
