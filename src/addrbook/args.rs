use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Address book file (default: addressbook.json, or data_file from .addrbook/config.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log diagnostics to stderr at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
