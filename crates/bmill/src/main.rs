//! # `bmill` Tokenizer CLI
//!
//! Command-line interface for the `bytemill` tokenizer library.

use clap::Parser;

mod commands;
mod logging;
mod split_mode;

/// Top-level argument parser.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse().command.run()
}
