//! # Event Scheduler CLI
//!
//! Interactive menu over an in-memory, AVL-balanced event index.
//!
//! Run with: `cargo run --bin event-scheduler -- --format json --log-level debug`

mod config;
mod input;
mod menu;
mod render;

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{info, Level};

use config::{CliConfig, OutputFormat};
use menu::Session;

#[derive(Parser)]
#[command(name = "event-scheduler")]
#[command(about = "Schedule events and always know which one comes next")]
struct Cli {
    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print the numbered menu before each prompt
    #[arg(long)]
    no_menu: bool,

    /// Maximum log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let config = CliConfig {
        format: cli.format,
        show_menu: !cli.no_menu,
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    session.run()?;
    info!(events = session.index().len(), "session ended");

    Ok(())
}
