//! # Addrbook Architecture
//!
//! Addrbook is a small contact manager: names, phone numbers and birthdays,
//! kept in memory while the interactive session runs and persisted to a
//! single file between runs.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                      │
//! │  - Reads lines, prints messages, owns stdin/stdout       │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                      │
//! │  - Owns the store and the in-memory book                 │
//! │  - Dispatches parsed commands, returns messages          │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                           │
//! │  - Argument checks and business rules                    │
//! │  - Errors become user-facing text in one place (`reply`) │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model.rs) and Storage (store/)         │
//! │  - Validated value types, Record, AddressBook            │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr (diagnostic
//! logging aside) and never exits the process. The date used for birthday
//! reminders is passed in explicitly, so the whole core is testable with
//! `InMemoryStore` and fixed dates.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per command
//! - [`book`]: `AddressBook` and the upcoming-birthday query
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `.addrbook/config.json`
//! - [`logging`]: stderr diagnostics
//! - [`error`]: Error types
//! - [`cli`]: Input parsing, the interactive loop and printing

pub mod api;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
