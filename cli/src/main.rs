mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{extract, points};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose { 0 => "warn", 1 => "info", _ => "debug" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Extract(args) => extract::run(&cli, args),
        Commands::Points(args) => points::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
