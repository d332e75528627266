//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `token-logos` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`], calls into the `token_logos` library and prints the result.

pub mod clone;
pub mod completions;
pub mod invalidate;
pub mod networks;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use token_logos::config::{self, Config};
use token_logos::layout::Layout;
use token_logos::output::OutputConfig;

/// State built once per invocation and handed to every command.
pub struct Context {
    pub config: Config,
    pub layout: Layout,
    pub out: OutputConfig,
}

impl Context {
    /// Loads the configuration for `root` and sets up output.
    pub fn load(root: &Path, config_path: Option<&Path>, color_flag: &str) -> Result<Self> {
        let config = config::load(root, config_path).with_context(|| {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| token_logos::defaults::default_config_path(root));
            format!("Failed to load configuration from {}", path.display())
        })?;

        Ok(Self {
            config,
            layout: Layout::new(PathBuf::from(root)),
            out: OutputConfig::from_env_and_flag(color_flag),
        })
    }
}
