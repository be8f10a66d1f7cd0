use crate::commands::CmdMessage;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID: &str = "Invalid command.";

const USAGE: &str = "\
Commands:
  hello                              greet the assistant
  add <name> <phone>                 add a contact or another phone
  change <name> <old> <new>          replace a phone number
  phone <name>                       show a contact's phones
  all                                list every contact
  add-birthday <name> <DD.MM.YYYY>   set a contact's birthday
  show-birthday <name>               show a contact's birthday
  birthdays                          birthdays in the next 7 days
  help                               this summary
  close | exit                       save and quit";

pub fn hello() -> CmdMessage {
    CmdMessage::info("How can I help you?")
}

pub fn help() -> CmdMessage {
    CmdMessage::info(USAGE)
}

pub fn invalid() -> CmdMessage {
    CmdMessage::error(INVALID)
}
