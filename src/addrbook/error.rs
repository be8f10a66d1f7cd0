use thiserror::Error;

/// Rejection of a field value at construction time.
///
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Phone number must consist of exactly 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Insufficient arguments provided.")]
    InsufficientArguments { expected: usize, got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, BookError>;
