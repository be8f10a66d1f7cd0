use crate::commands::{CmdMessage, MessageLevel};
use colored::*;
use std::io::{self, Write};

pub fn print_message<W: Write>(out: &mut W, message: &CmdMessage) -> io::Result<()> {
    let text = match message.level {
        MessageLevel::Info => message.content.normal(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Error => message.content.red(),
    };
    writeln!(out, "{}", text)
}
