//! # API Facade
//!
//! The single entry point for all directory operations, regardless of the UI
//! in front of it. It dispatches to the command layer, normalizes inputs
//! (field keys → [`Field`] variants), and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O formatting.
//!
//! `DirectoryApi<S: ContactStore>` is generic over the storage backend:
//! production uses `DirectoryApi<FileStore>`, tests use
//! `DirectoryApi<InMemoryStore>`.

use crate::commands;
use crate::error::{Result, RolodexError};
use crate::model::{ContactDraft, Field};
use crate::store::ContactStore;
use std::str::FromStr;

/// The main API facade for directory operations.
pub struct DirectoryApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn page(&self, number: usize) -> Result<commands::CmdResult> {
        commands::page::run(&self.store, number)
    }

    pub fn search(&self, field: Field, target: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, target)
    }

    pub fn edit(&mut self, position: usize, field: Field, value: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, position, field, value)
    }
}

/// Parses a user-supplied field key (name, on-disk key, or menu number).
pub fn parse_field(input: &str) -> Result<Field> {
    Field::from_str(input).map_err(RolodexError::Api)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PageInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::draft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_dispatches_through_the_facade() {
        let mut api = DirectoryApi::new(InMemoryStore::new());

        let added = api.add_contact(draft(1)).unwrap();
        assert_eq!(added.affected.len(), 1);

        let page = api.page(1).unwrap();
        assert_eq!(page.listed.len(), 1);

        let found = api.search(Field::Name, &draft(1).name).unwrap();
        assert_eq!(found.listed.len(), 1);

        let edited = api.edit(1, Field::Company, "Initech").unwrap();
        assert_eq!(edited.affected[0].company, "Initech");
    }

    #[test]
    fn test_parse_field_errors_are_api_errors() {
        assert!(parse_field("name").is_ok());
        assert!(parse_field("5").is_ok());
        assert!(matches!(
            parse_field("nonsense"),
            Err(RolodexError::Api(_))
        ));
    }
}
