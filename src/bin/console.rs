//! Stockroom console binary
//!
//! Starts an interactive inventory session on stdin/stdout.

use std::io;

use clap::Parser;
use stockroom::ui::{Console, ConsoleOptions};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockroom console
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Interactive in-memory inventory tracker")]
#[command(version)]
struct Args {
    /// Command prompt
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Do not re-print the list after each add/remove
    #[arg(long)]
    no_auto_list: bool,
}

fn main() -> io::Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("stockroom v{}", stockroom::VERSION);

    let options = ConsoleOptions {
        prompt: args.prompt,
        auto_list: !args.no_auto_list,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), options);
    console.run()
}
