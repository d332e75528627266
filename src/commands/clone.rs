//! # Clone Command Implementation
//!
//! This module implements the `clone` subcommand, which copies a token image
//! from the shared `token/` pool into a network-specific slot named after
//! the token's checksummed contract address:
//!
//! ```bash
//! token-logos clone eth milkomedaTestnet 0x2f2a2543b76a4166549f7aab2e75bef0aefc5b0f
//! # token/eth.jpg -> network/milkomedaTestnet/0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f.jpg
//! ```

use anyhow::Result;
use clap::Args;

use token_logos::clone::clone_token;
use token_logos::output::Status;
use token_logos::suggestions;

use super::Context;

/// Copy a token image into a network/address slot
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Token image name in token/, without the .jpg extension
    pub name: String,

    /// Network name, as used for the directory under network/
    pub network: String,

    /// Contract address; stored under its checksummed form
    pub address: String,
}

/// Execute the `clone` command.
pub fn execute(args: CloneArgs, context: &Context) -> Result<()> {
    let out = &context.out;
    println!(
        "{} Performing clone of {}.jpg from the tokens directory to network/{}/{}.jpg",
        out.marker(Status::Working),
        args.name,
        args.network,
        args.address
    );

    let outcome = clone_token(
        &context.config.registry,
        &context.layout,
        &args.name,
        &args.network,
        &args.address,
    )
    .map_err(|e| suggestions::explain(e, &context.config.registry))?;

    println!(
        "{} Copied {} -> {}",
        out.marker(Status::Ok),
        outcome.source.display(),
        outcome.destination.display()
    );

    Ok(())
}
