use crate::config::DEFAULT_MAX_CONTACTS;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use tracing::{debug, info};

/// In-memory, insertion-ordered contact store.
///
/// All lookups are linear scans; the store is small and bounded.
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    capacity: usize,
}

impl ContactStore {
    /// Create an empty store with the default capacity of 50.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONTACTS)
    }

    /// Create an empty store that accepts at most `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::new(),
            capacity,
        }
    }

    fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for ContactStore {
    fn add(&mut self, contact: Contact) -> ContactResult<()> {
        if self.is_full() {
            return Err(ContactError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.ensure_phone_available(contact.phone())?;
        self.ensure_email_available(contact.email())?;

        debug!(name = contact.name(), "Storing contact");
        self.contacts.push(contact);
        info!(count = self.contacts.len(), "Contact added");
        Ok(())
    }

    fn find_index_by_phone(&self, phone: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.phone() == phone)
    }

    fn find_index_by_email(&self, email: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.email() == email)
    }

    fn delete_by_name(&mut self, name: &str) -> ContactResult<Contact> {
        let index = self
            .find_index_by_name(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;

        // Vec::remove shifts the tail, keeping insertion order
        let removed = self.contacts.remove(index);
        info!(index, count = self.contacts.len(), "Contact deleted");
        Ok(removed)
    }

    fn search_by_name(&self, name: &str) -> ContactResult<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    fn list_all(&self) -> ContactResult<&[Contact]> {
        if self.contacts.is_empty() {
            return Err(ContactError::Empty);
        }
        Ok(&self.contacts)
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
