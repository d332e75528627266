//! # Networks Command Implementation
//!
//! Prints both registry tables. They are shown separately because they
//! differ: `clone` accepts every forward-table name, while `invalidate:all`
//! and numeric network references only reach ids listed in the reverse
//! table.

use anyhow::Result;

use super::Context;

/// Execute the `networks` command.
pub fn execute(context: &Context) -> Result<()> {
    let registry = &context.config.registry;

    println!("Network names (clone, invalidate:network, invalidate:token):");
    for (name, id) in registry.forward_entries() {
        println!("  {name:<20} {id}");
    }

    println!();
    println!("Network ids (invalidate:all, numeric references):");
    for (id, name) in registry.reverse_entries() {
        println!("  {:<20} {name}", id.to_string());
    }

    let unnamed: Vec<String> = registry
        .known_ids()
        .into_iter()
        .filter(|id| registry.id_to_name(*id).is_err())
        .map(|id| id.to_string())
        .collect();
    if !unnamed.is_empty() {
        println!();
        println!("Ids skipped by invalidate:all: {}", unnamed.join(", "));
    }

    Ok(())
}
