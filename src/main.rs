//! # Token Logos CLI
//!
//! This is the binary entry point for the `token-logos` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and executing the selected command.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The core logic is defined in the `lib.rs` library crate, so the binary
//! stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
