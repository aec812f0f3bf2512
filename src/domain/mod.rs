//! Domain value objects and validators.
//!
//! This module contains the field validators for contact names, phone
//! numbers and email addresses, together with type-safe wrappers that run
//! them at construction time so invalid data cannot be represented.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use name::{is_valid_name, ContactName};
pub use phone::{is_valid_phone_number, PhoneNumber, PHONE_DIGITS};
