use crate::error::{ContactError, ContactResult};
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so the shell can be driven
/// against any implementation. Lookups are by exact, case-sensitive match;
/// when several contacts share a name the earliest inserted one wins.
pub trait ContactRepository {
    /// Append a contact, enforcing capacity and phone/email uniqueness.
    fn add(&mut self, contact: Contact) -> ContactResult<()>;

    /// Position of the first contact with this phone number.
    fn find_index_by_phone(&self, phone: &str) -> Option<usize>;

    /// Position of the first contact with this email address.
    fn find_index_by_email(&self, email: &str) -> Option<usize>;

    /// Remove the first contact with this name and return it.
    fn delete_by_name(&mut self, name: &str) -> ContactResult<Contact>;

    /// First contact with this name.
    fn search_by_name(&self, name: &str) -> ContactResult<&Contact>;

    /// All contacts in insertion order, or `ContactError::Empty`.
    fn list_all(&self) -> ContactResult<&[Contact]>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Maximum number of contacts accepted.
    fn capacity(&self) -> usize;

    /// Fail with `DuplicatePhone` if a stored contact already uses `phone`.
    fn ensure_phone_available(&self, phone: &str) -> ContactResult<()> {
        match self.find_index_by_phone(phone) {
            Some(_) => Err(ContactError::DuplicatePhone(phone.to_string())),
            None => Ok(()),
        }
    }

    /// Fail with `DuplicateEmail` if a stored contact already uses `email`.
    fn ensure_email_available(&self, email: &str) -> ContactResult<()> {
        match self.find_index_by_email(email) {
            Some(_) => Err(ContactError::DuplicateEmail(email.to_string())),
            None => Ok(()),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
