use crate::book::AddressBook;
use crate::commands::helpers::{leading_args, record_mut};
use crate::commands::CmdMessage;
use crate::error::Result;

/// `change <name> <old_phone> <new_phone>`
pub fn run<S: AsRef<str>>(book: &mut AddressBook, args: &[S]) -> Result<CmdMessage> {
    let [name, old_phone, new_phone] = leading_args::<3, _>(args)?;
    let record = record_mut(book, name)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(CmdMessage::success("Contact updated."))
}
