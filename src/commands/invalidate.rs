//! # Invalidate Command Implementations
//!
//! This module implements the three `invalidate:*` subcommands. They share
//! [`InvalidateOptions`] and the summary printing; the directory walking and
//! the worker pool live in [`token_logos::invalidate`].
//!
//! ## Functionality
//!
//! - **`invalidate:all`**: every network the reverse table names
//! - **`invalidate:network <network>`**: one network, by name or id
//! - **`invalidate:token <network> <token>`**: one image
//!
//! Individual failures are listed in the summary and do not change the exit
//! status; only errors that stop the command before any request is sent do.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use token_logos::cdn::{CloudinaryCli, DryRunInvalidator, Invalidator};
use token_logos::config::Config;
use token_logos::invalidate::{Invalidation, InvalidationReport};
use token_logos::output::{OutputConfig, Status};
use token_logos::suggestions;

use super::Context;

/// Options shared by every invalidation command
#[derive(Args, Debug, Clone)]
pub struct InvalidateOptions {
    /// Print the requests without running the CDN tool.
    #[arg(long)]
    pub dry_run: bool,

    /// Maximum number of CDN tool invocations running at once.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Path to the CDN command-line tool.
    #[arg(long, value_name = "PATH", env = "TOKEN_LOGOS_CDN_TOOL")]
    pub tool: Option<PathBuf>,
}

/// Invalidate every image of every named network
#[derive(Args, Debug)]
pub struct InvalidateAllArgs {
    #[command(flatten)]
    pub options: InvalidateOptions,
}

/// Invalidate every image of one network
#[derive(Args, Debug)]
pub struct InvalidateNetworkArgs {
    /// Network name or numeric network id
    pub network: String,

    #[command(flatten)]
    pub options: InvalidateOptions,
}

/// Invalidate a single network image
#[derive(Args, Debug)]
pub struct InvalidateTokenArgs {
    /// Network name or numeric network id
    pub network: String,

    /// Image name inside the network directory, without the .jpg extension
    pub token: String,

    #[command(flatten)]
    pub options: InvalidateOptions,
}

/// Execute the `invalidate:all` command.
pub fn execute_all(args: InvalidateAllArgs, context: &Context) -> Result<()> {
    run(&args.options, context, |invalidation| invalidation.all())
}

/// Execute the `invalidate:network` command.
pub fn execute_network(args: InvalidateNetworkArgs, context: &Context) -> Result<()> {
    run(&args.options, context, |invalidation| {
        invalidation.network(&args.network)
    })
}

/// Execute the `invalidate:token` command.
pub fn execute_token(args: InvalidateTokenArgs, context: &Context) -> Result<()> {
    run(&args.options, context, |invalidation| {
        invalidation.token(&args.network, &args.token)
    })
}

fn run<F>(options: &InvalidateOptions, context: &Context, operation: F) -> Result<()>
where
    F: FnOnce(&Invalidation<'_>) -> token_logos::error::Result<InvalidationReport>,
{
    let config = effective_config(&context.config, options);

    let cli;
    let invalidator: &dyn Invalidator = if options.dry_run {
        &DryRunInvalidator
    } else {
        cli = CloudinaryCli::new(config.cdn.tool.clone());
        &cli
    };

    let invalidation = Invalidation::new(&config, &context.layout, invalidator);
    let report =
        operation(&invalidation).map_err(|e| suggestions::explain(e, &config.registry))?;

    print_report(&report, &context.out, options.dry_run);
    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration.
fn effective_config(config: &Config, options: &InvalidateOptions) -> Config {
    let mut config = config.clone();
    if let Some(concurrency) = options.concurrency {
        config.concurrency = usize::from(concurrency);
    }
    if let Some(tool) = &options.tool {
        config.cdn.tool = tool.clone();
    }
    config
}

fn print_report(report: &InvalidationReport, out: &OutputConfig, dry_run: bool) {
    let ok = if dry_run { Status::DryRun } else { Status::Ok };

    for skipped in &report.skipped {
        println!(
            "{} Skipped {}: {}",
            out.marker(Status::Skipped),
            skipped.network,
            skipped.reason
        );
    }
    for url in &report.succeeded {
        println!("{} Invalidated {}", out.marker(ok), url);
    }
    for failed in &report.failed {
        println!(
            "{} Failed {}: {}",
            out.marker(Status::Failed),
            failed.target,
            failed.message
        );
    }

    println!();
    println!(
        "{} invalidated, {} failed, {} network(s) skipped",
        report.succeeded.len(),
        report.failed.len(),
        report.skipped.len()
    );
}
