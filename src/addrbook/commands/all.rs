use crate::book::AddressBook;
use crate::commands::CmdMessage;
use crate::error::Result;

/// `all`: every contact, one per line, in insertion order.
pub fn run(book: &AddressBook) -> Result<CmdMessage> {
    if book.is_empty() {
        return Ok(CmdMessage::info("No contacts available."));
    }
    let lines: Vec<String> = book.records().iter().map(ToString::to_string).collect();
    Ok(CmdMessage::info(lines.join("\n")))
}
