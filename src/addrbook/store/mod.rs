//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the address book lives between
//! runs. The book is small and loaded whole: a store hands back a complete
//! [`AddressBook`] on start and takes a full snapshot on shutdown.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one JSON document on disk
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1234567890"], "birthday": "15.06.1990" }
//!   ]
//! }
//! ```
//!
//! Contacts are an array rather than an object so that listing order is
//! preserved across restarts.

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const FORMAT_VERSION: u32 = 1;

pub trait DataStore {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<Record>,
}

pub(crate) fn encode(book: &AddressBook) -> Result<String> {
    let file = BookFile {
        version: FORMAT_VERSION,
        contacts: book.records().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub(crate) fn decode(content: &str) -> Result<AddressBook> {
    let file: BookFile = serde_json::from_str(content)?;
    if file.version != FORMAT_VERSION {
        return Err(BookError::UnsupportedVersion(file.version));
    }
    Ok(AddressBook::from_records(file.contacts))
}
