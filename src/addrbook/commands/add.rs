use crate::book::AddressBook;
use crate::commands::{helpers::leading_args, CmdMessage};
use crate::error::Result;
use crate::model::{Phone, Record};

/// `add <name> <phone>`: creates the contact if needed and appends the phone.
///
/// The phone is validated before anything is inserted, so a rejected number
/// never leaves behind an empty contact.
pub fn run<S: AsRef<str>>(book: &mut AddressBook, args: &[S]) -> Result<CmdMessage> {
    let [name, phone] = leading_args::<2, _>(args)?;
    if !phone.is_empty() {
        Phone::parse(phone)?;
    }

    let (mut record, message) = match book.find(name) {
        Some(existing) => (existing.clone(), "Contact updated."),
        None => (Record::new(name)?, "Contact added."),
    };
    if !phone.is_empty() {
        record.add_phone(phone)?;
    }
    book.add_record(record);

    Ok(CmdMessage::success(message))
}
