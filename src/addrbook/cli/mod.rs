//! Terminal front end: input parsing, the interactive loop and message
//! printing. Everything that touches stdin/stdout lives here.

pub mod print;
pub mod repl;

use crate::commands::Command;

/// Splits a line on whitespace into a command and its positional arguments.
///
/// No quoting is supported: `add "Mary Ann" ...` yields the name `"Mary`.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts
        .next()
        .and_then(|word| word.parse().ok())
        .unwrap_or(Command::Unknown);
    let args = parts.map(str::to_string).collect();
    (command, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_and_args() {
        let (command, args) = parse_input("  ADD  Alice   1234567890 \n");
        assert_eq!(command, Command::Add);
        assert_eq!(args, ["Alice", "1234567890"]);
    }

    #[test]
    fn blank_line_is_unknown() {
        let (command, args) = parse_input("   ");
        assert_eq!(command, Command::Unknown);
        assert!(args.is_empty());
    }
}
