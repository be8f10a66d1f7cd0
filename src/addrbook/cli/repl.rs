use super::parse_input;
use super::print::print_message;
use crate::api::AddressBookApi;
use crate::commands::greet::{FAREWELL, WELCOME};
use crate::commands::{CmdMessage, Command};
use crate::error::Result;
use crate::store::DataStore;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a command: ";

/// Runs the interactive session until `close`/`exit` or end of input, then
/// saves the book.
///
/// Command failures are printed and the loop continues. Lines are decoded
/// lossily, so stray bytes on stdin are just an unknown command. A failed read
/// ends the session but the book is still saved.
pub fn run<S, R, W>(api: &mut AddressBookApi<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).unwrap_or_else(|e| {
            log::warn!("event=input_error error={}", e);
            0
        });
        if read == 0 {
            // End of input closes the session like `exit`.
            writeln!(out)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);

        let (command, args) = parse_input(&line);
        if command == Command::Exit {
            break;
        }
        if command == Command::Unknown {
            log::debug!("event=unknown_command input={:?}", line.trim());
        }

        let message = api.execute(command, &args);
        print_message(out, &message)?;
    }

    api.save()?;
    print_message(out, &CmdMessage::info(FAREWELL))?;
    Ok(())
}
