//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`:
//!
//! ```bash
//! token-logos completions bash > ~/.local/share/bash-completion/completions/token-logos
//! token-logos completions zsh > ~/.zfunc/_token-logos
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "token-logos", &mut io::stdout());
    Ok(())
}
