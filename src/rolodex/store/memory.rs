use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data; an empty store behaves like a present, empty file.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactDraft;

    pub fn draft(n: u64) -> ContactDraft {
        ContactDraft {
            name: format!("Name{}", n),
            last_name: format!("Last{}", n),
            patronymic: format!("Pat{}", n),
            company: format!("Company{}", n),
            work_phone: format!("8{:010}", n),
            personal_phone: format!("8{:010}", 5000 + n),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` contacts with distinct names and phones.
        pub fn with_contacts(mut self, count: u64) -> Self {
            for n in 1..=count {
                self.store.append(draft(n)).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, draft: ContactDraft) -> Self {
            self.store.append(draft).unwrap();
            self
        }
    }
}
