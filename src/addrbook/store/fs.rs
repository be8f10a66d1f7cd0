use super::{decode, encode, DataStore};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Address book persisted as a single JSON file.
///
/// Saves go through a sibling `.tmp` file that is renamed over the target,
/// so an interrupted write leaves the previous snapshot intact.
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

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "event=store_load status=missing path={}",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(BookError::Io(e)),
        };

        let book = decode(&content)?;
        log::info!(
            "event=store_load status=ok path={} contacts={}",
            self.path.display(),
            book.len()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = encode(book)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(BookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(BookError::Io)?;

        log::info!(
            "event=store_save status=ok path={} contacts={}",
            self.path.display(),
            book.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_phone("0987654321").unwrap();
        alice.add_birthday("29.02.2024").unwrap();
        AddressBook::from_records([alice, Record::new("Bob").unwrap()])
    }

    #[test]
    fn missing_file_loads_empty_book() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_restores_book() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("book.json"));

        let book = sample_book();
        store.save(&book).unwrap();

        let loaded = FileStore::new(store.path()).load().unwrap();
        assert_eq!(loaded, book);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("book.json"));

        store.save(&sample_book()).unwrap();
        store.save(&AddressBook::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested/dir/book.json"));
        store.save(&sample_book()).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(BookError::Serialization(_))));
    }
}
