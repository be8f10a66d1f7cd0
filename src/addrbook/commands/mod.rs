//! # Command Layer
//!
//! Business logic for every command the assistant understands. Each command
//! module exposes a `run`-style function that takes the [`AddressBook`], the
//! positional arguments, and returns `Result<CmdMessage>`.
//!
//! Commands never print. Failures come back as [`BookError`]s and are turned
//! into user-facing messages by [`reply`], the one place where that
//! translation happens.
//!
//! [`AddressBook`]: crate::book::AddressBook
//! [`BookError`]: crate::error::BookError

use crate::error::Result;
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod all;
pub mod birthdays;
pub mod change;
pub mod greet;
pub mod helpers;
pub mod phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl fmt::Display for CmdMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Collapses a command outcome into the message shown to the user.
pub fn reply(result: Result<CmdMessage>) -> CmdMessage {
    match result {
        Ok(message) => message,
        Err(e) => {
            log::debug!("event=command_error error={:?}", e);
            CmdMessage::error(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let command = match s.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        };
        Ok(command)
    }
}
