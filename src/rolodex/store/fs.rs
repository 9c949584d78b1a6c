use super::ContactStore;
use crate::error::{Result, RolodexError};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: the whole record set in one pretty-printed JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Err(RolodexError::FileNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content =
            serde_json::to_string_pretty(contacts).map_err(RolodexError::Serialization)?;

        // Write-then-rename so a concurrent load never sees a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(RolodexError::Io)?;
        fs::rename(&tmp, &self.path).map_err(RolodexError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactDraft;

    fn contact(pk: u64) -> Contact {
        ContactDraft {
            name: format!("Name{}", pk),
            last_name: "Smith".into(),
            patronymic: "Ivanovna".into(),
            company: "Acme".into(),
            work_phone: format!("8{:010}", pk),
            personal_phone: format!("8{:010}", 1000 + pk),
        }
        .into_contact(pk)
    }

    #[test]
    fn test_load_missing_file_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("contacts.json"));

        match store.load() {
            Err(RolodexError::FileNotFound(path)) => {
                assert_eq!(path, dir.path().join("contacts.json"))
            }
            other => panic!("expected FileNotFound, got {:?}", other.map(|c| c.len())),
        }
        assert_eq!(store.load_or_empty().unwrap(), Vec::new());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(RolodexError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));

        let contacts = vec![contact(1), contact(2)];
        store.save(&contacts).unwrap();
        assert_eq!(store.load().unwrap(), contacts);

        // save(load()) leaves the file content untouched
        let before = fs::read_to_string(store.path()).unwrap();
        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));

        store.save(&[contact(1), contact(2), contact(3)]).unwrap();
        store.save(&[contact(9)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].pk, 9);
    }

    #[test]
    fn test_save_is_pretty_printed_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));
        store.save(&[contact(1)]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n  "));
        assert!(content.contains("\"work_number\""));

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("contacts.json")]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/dir/contacts.json"));
        store.save(&[contact(1)]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
