//! # API Facade
//!
//! [`AddressBookApi`] is the single entry point a UI talks to. It owns the
//! storage backend and the in-memory book for the lifetime of a session:
//!
//! - [`AddressBookApi::open`] loads the book (empty if nothing was saved)
//! - [`AddressBookApi::execute`] dispatches one parsed command
//! - [`AddressBookApi::save`] writes the full snapshot back
//!
//! The facade does no formatting and no I/O beyond the store. Every command
//! outcome, including failures, comes back as a [`CmdMessage`].
//!
//! `Exit` is not handled here: ending the session is the caller's decision.

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, Command};
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct AddressBookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    today: Option<NaiveDate>,
}

impl<S: DataStore> AddressBookApi<S> {
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            today: None,
        })
    }

    /// Pins the reference date used for upcoming birthdays.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn execute<A: AsRef<str>>(&mut self, command: Command, args: &[A]) -> CmdMessage {
        let today = self.today();
        let book = &mut self.book;
        match command {
            Command::Hello => commands::greet::hello(),
            Command::Help => commands::greet::help(),
            Command::Add => commands::reply(commands::add::run(book, args)),
            Command::Change => commands::reply(commands::change::run(book, args)),
            Command::Phone => commands::reply(commands::phone::run(book, args)),
            Command::All => commands::reply(commands::all::run(book)),
            Command::AddBirthday => commands::reply(commands::birthdays::add(book, args)),
            Command::ShowBirthday => commands::reply(commands::birthdays::show(book, args)),
            Command::Birthdays => commands::reply(commands::birthdays::upcoming(book, today)),
            Command::Exit | Command::Unknown => commands::greet::invalid(),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_loads_persisted_book() {
        let store = StoreFixture::new()
            .with_contact("Alice", &["1234567890"])
            .store();
        let api = AddressBookApi::open(store).unwrap();
        assert!(api.book().find("Alice").is_some());
    }

    #[test]
    fn open_empty_store() {
        let api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        assert!(api.book().is_empty());
    }

    #[test]
    fn dispatches_to_commands() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();

        let msg = api.execute(Command::Add, &["Alice", "1234567890"]);
        assert_eq!(msg.content, "Contact added.");
        let msg = api.execute(Command::Phone, &["Alice"]);
        assert_eq!(msg.content, "1234567890");
        let msg = api.execute(Command::Hello, &[] as &[&str]);
        assert_eq!(msg.content, "How can I help you?");
        let msg = api.execute(Command::Unknown, &["whatever"]);
        assert_eq!(msg.content, "Invalid command.");
    }

    #[test]
    fn errors_become_messages() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        let msg = api.execute(Command::Phone, &["Ghost"]);
        assert_eq!(msg.level, commands::MessageLevel::Error);
        assert_eq!(msg.content, "Contact not found.");
    }

    #[test]
    fn birthdays_use_pinned_date() {
        let store = StoreFixture::new()
            .with_birthday("Alice", "12.06.1990")
            .store();
        let mut api = AddressBookApi::open(store)
            .unwrap()
            .with_today(ymd(2025, 6, 9));

        let msg = api.execute(Command::Birthdays, &[] as &[&str]);
        assert_eq!(msg.content, "Alice: 12.06.1990");
    }

    #[test]
    fn save_writes_snapshot() {
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        api.execute(Command::Add, &["Alice", "1234567890"]);
        api.save().unwrap();

        assert_eq!(api.store().saves(), 1);
        let snapshot = api.store().snapshot().unwrap();
        assert_eq!(snapshot.find("Alice").unwrap().phones().len(), 1);
    }
}
