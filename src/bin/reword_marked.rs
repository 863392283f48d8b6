use clap::Parser;
use rebase_hooks::error::Result;
use rebase_hooks::todo;
use std::path::PathBuf;

/// Relabel marked "pick" lines in a rebase instruction list to "reword".
#[derive(Parser, Debug)]
#[command(name = "reword-marked", version)]
struct Cli {
    /// Path to the rebase instruction list
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
    todo::apply(&cli.path)
}
