//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

/// Token Logos - Manage token logo images and their CDN cache
#[derive(Parser, Debug)]
#[command(name = "token-logos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Root of the logo repository (holds token/ and network/)
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "TOKEN_LOGOS_ROOT",
        default_value = "."
    )]
    root: PathBuf,

    /// Configuration file (defaults to <ROOT>/token-logos.toml when present)
    #[arg(long, global = true, value_name = "FILE", env = "TOKEN_LOGOS_CONFIG")]
    config: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy a token image from token/ into network/<network>/<address>.jpg
    Clone(commands::clone::CloneArgs),

    /// Invalidate every image of every network with a configured name
    #[command(name = "invalidate:all")]
    InvalidateAll(commands::invalidate::InvalidateAllArgs),

    /// Invalidate every image of one network
    #[command(name = "invalidate:network")]
    InvalidateNetwork(commands::invalidate::InvalidateNetworkArgs),

    /// Invalidate a single network image
    #[command(name = "invalidate:token")]
    InvalidateToken(commands::invalidate::InvalidateTokenArgs),

    /// Show the network name and id tables
    Networks,

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let context = || commands::Context::load(&self.root, self.config.as_deref(), &self.color);

        match self.command {
            Commands::Clone(args) => commands::clone::execute(args, &context()?),
            Commands::InvalidateAll(args) => commands::invalidate::execute_all(args, &context()?),
            Commands::InvalidateNetwork(args) => {
                commands::invalidate::execute_network(args, &context()?)
            }
            Commands::InvalidateToken(args) => {
                commands::invalidate::execute_token(args, &context()?)
            }
            Commands::Networks => commands::networks::execute(&context()?),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
