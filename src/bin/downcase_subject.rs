use clap::Parser;
use rebase_hooks::error::Result;
use rebase_hooks::subject;
use std::path::PathBuf;

/// Lowercase the first word after the "<prefix>: " separator in a commit
/// message's summary line.
#[derive(Parser, Debug)]
#[command(name = "downcase-subject", version)]
struct Cli {
    /// Path to the commit message file
    path: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    subject::apply(&cli.path)
}
