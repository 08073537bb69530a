//! Archlint - Architecture diagram validation CLI
//!
//! Validates saved C4, ArchiMate, TOGAF, and BPMN artifacts against their
//! framework's structural rules and reports a score, grade, and suggestions.

use anyhow::Result;
use archlint::cli;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
