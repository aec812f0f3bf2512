//! Handlers for each menu action.
//!
//! Every handler converts store and validation errors into a message for
//! the user; only I/O errors propagate.

use super::{Shell, Step};
use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::error::ContactError;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

const INVALID_NAME: &str = "Invalid name. Only alphabetic characters and spaces are allowed.";
const INVALID_PHONE: &str = "Invalid phone number. It should contain exactly 10 digits.";
const DUPLICATE_PHONE: &str = "Phone number already in use. Please enter a different number.";
const INVALID_EMAIL: &str = "Invalid email. It should contain '@' and a domain.";
const DUPLICATE_EMAIL: &str = "Email already in use. Please enter a different email.";
const NOT_FOUND: &str = "Contact not found.";

/// User-facing text for a store that refused a fully validated contact.
fn add_failure_message(err: &ContactError) -> String {
    match err {
        ContactError::CapacityExceeded { capacity } => format!(
            "Contact list is full. Cannot add more than {} contacts.",
            capacity
        ),
        ContactError::DuplicatePhone(_) => DUPLICATE_PHONE.to_string(),
        ContactError::DuplicateEmail(_) => DUPLICATE_EMAIL.to_string(),
        _ => "Contact could not be added.".to_string(),
    }
}

impl<R, I, O> Shell<R, I, O>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    /// Collect name, phone and email, re-prompting per field until each is
    /// valid (and, for phone and email, not already taken).
    pub(crate) fn handle_add(&mut self) -> Step {
        if self.repo.is_full() {
            warn!(capacity = self.repo.capacity(), "Add refused, store is full");
            writeln!(
                self.output,
                "Contact list is full. Cannot add more than {} contacts.",
                self.repo.capacity()
            )?;
            return Ok(ControlFlow::Continue(()));
        }

        let name = loop {
            let Some(line) = self.prompt("Enter name: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            match ContactName::new(line) {
                Ok(name) => break name,
                Err(err) => self.reject(&err, INVALID_NAME)?,
            }
        };

        let phone = loop {
            let Some(line) = self.prompt("Enter phone number: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            match PhoneNumber::new(line) {
                Ok(phone) => match self.repo.ensure_phone_available(phone.as_str()) {
                    Ok(()) => break phone,
                    Err(err) => self.reject(&err, DUPLICATE_PHONE)?,
                },
                Err(err) => self.reject(&err, INVALID_PHONE)?,
            }
        };

        let email = loop {
            let Some(line) = self.prompt("Enter email: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            match EmailAddress::new(line) {
                Ok(email) => match self.repo.ensure_email_available(email.as_str()) {
                    Ok(()) => break email,
                    Err(err) => self.reject(&err, DUPLICATE_EMAIL)?,
                },
                Err(err) => self.reject(&err, INVALID_EMAIL)?,
            }
        };

        match self.repo.add(Contact::from_parts(name, phone, email)) {
            Ok(()) => {
                self.metrics.record_contact_added();
                writeln!(self.output, "Contact added successfully!")?;
            }
            Err(err) => {
                warn!(%err, "Validated contact was not stored");
                writeln!(self.output, "{}", add_failure_message(&err))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    pub(crate) fn handle_delete(&mut self) -> Step {
        let Some(name) = self.prompt("Enter the name of the contact to delete: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.repo.delete_by_name(&name) {
            Ok(_) => {
                self.metrics.record_contact_deleted();
                writeln!(self.output, "Contact deleted successfully!")?;
            }
            Err(err) => self.report_miss(&err)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    pub(crate) fn handle_search(&mut self) -> Step {
        let Some(name) = self.prompt("Enter the name of the contact to search: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.metrics.record_search();
        match self.repo.search_by_name(&name) {
            Ok(contact) => {
                writeln!(self.output, "Contact found:")?;
                write!(self.output, "{}", contact)?;
            }
            Err(err) => self.report_miss(&err)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    pub(crate) fn handle_display(&mut self) -> Step {
        match self.repo.list_all() {
            Ok(contacts) => {
                info!(count = contacts.len(), "Displaying contacts");
                writeln!(self.output, "All Contacts:")?;
                for contact in contacts {
                    write!(self.output, "{}", contact)?;
                }
            }
            Err(ContactError::Empty) => {
                writeln!(self.output, "No contacts available.")?;
            }
            Err(err) => {
                warn!(%err, "Listing contacts failed");
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Tell the user why a field was refused so they can try again.
    fn reject(&mut self, err: &dyn std::error::Error, message: &str) -> std::io::Result<()> {
        debug!(%err, "Rejected field input");
        self.metrics.record_input_rejected();
        writeln!(self.output, "{}", message)
    }

    fn report_miss(&mut self, err: &ContactError) -> std::io::Result<()> {
        debug!(%err, "Lookup by name missed");
        self.metrics.record_lookup_missed();
        writeln!(self.output, "{}", NOT_FOUND)
    }
}
