use crate::book::AddressBook;
use crate::commands::helpers::{leading_args, record};
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Phone;

/// `phone <name>`: all numbers of one contact, `; `-separated.
pub fn run<S: AsRef<str>>(book: &AddressBook, args: &[S]) -> Result<CmdMessage> {
    let [name] = leading_args::<1, _>(args)?;
    let record = record(book, name)?;

    if record.phones().is_empty() {
        return Ok(CmdMessage::info("No phone numbers found."));
    }
    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    Ok(CmdMessage::info(phones))
}
