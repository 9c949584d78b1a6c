//! # Storage Layer
//!
//! The [`ContactStore`] trait abstracts persistence of the record set so the
//! command layer never sees a file path.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. The whole record set lives in one
//!   pretty-printed JSON file; every mutation rewrites it.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No persistence.
//!
//! ## Storage Format
//!
//! The data file is a JSON array of contact objects with the legacy keys
//! (`name`, `last_name`, `surname`, `name_company`, `work_number`,
//! `member_phone`, `pk`). There is no partial or append-only writing: a load
//! always observes either the previous or the new complete record set.

use crate::error::{Result, RolodexError};
use crate::model::{Contact, ContactDraft};

pub mod fs;
pub mod memory;

/// Abstract interface for record-set storage.
///
/// The record set is loaded fresh at the start of every operation and never
/// cached across operations.
pub trait ContactStore {
    /// Load the full record set. Errors when the backing file is absent
    /// ([`RolodexError::FileNotFound`]) or malformed.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Overwrite the full record set.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Like `load`, but treats an absent backing file as an empty set.
    fn load_or_empty(&self) -> Result<Vec<Contact>> {
        match self.load() {
            Err(RolodexError::FileNotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Append a new contact, assigning the next free identifier.
    fn append(&mut self, draft: ContactDraft) -> Result<Contact> {
        let mut contacts = self.load_or_empty()?;
        let contact = draft.into_contact(next_pk(&contacts));
        contacts.push(contact.clone());
        self.save(&contacts)?;
        Ok(contact)
    }
}

/// Identifiers are assigned max+1 rather than len+1, so they never repeat
/// and stay monotonic even when a hand-edited file has gaps.
pub fn next_pk(contacts: &[Contact]) -> u64 {
    contacts.iter().map(|c| c.pk).max().unwrap_or(0) + 1
}
