use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;

/// Returns the first `N` arguments, failing if fewer were given.
pub fn leading_args<const N: usize, S: AsRef<str>>(args: &[S]) -> Result<[&str; N]> {
    if args.len() < N {
        return Err(BookError::InsufficientArguments {
            expected: N,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_ref()))
}

pub fn record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}
