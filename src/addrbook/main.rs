use addrbook::api::AddressBookApi;
use addrbook::cli::repl;
use addrbook::config::{BookConfig, CONFIG_DIRNAME};
use addrbook::error::Result;
use addrbook::logging::init_logging;
use addrbook::store::fs::FileStore;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = BookConfig::load(cwd.join(CONFIG_DIRNAME))?.with_overrides(cli.file, cli.verbose);

    let _logger = match init_logging(&config.log_level) {
        Ok(handle) => Some(handle),
        Err(msg) => {
            eprintln!("Warning: logging disabled: {}", msg);
            None
        }
    };

    let store = FileStore::new(&config.data_file);
    let mut api = AddressBookApi::open(store)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut api, stdin.lock(), &mut stdout)
}
