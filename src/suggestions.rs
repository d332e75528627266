//! # Error Suggestions
//!
//! Turns library errors into operator messages that say what went wrong
//! and how to fix it.
//!
//! ```rust,ignore
//! clone_token(&registry, &layout, name, network, address)
//!     .map_err(|e| suggestions::explain(e, &registry))?;
//! ```

use crate::error::Error;
use crate::registry::ChainRegistry;

/// Wraps `error` in an `anyhow::Error` carrying hints where one helps.
pub fn explain(error: Error, registry: &ChainRegistry) -> anyhow::Error {
    match &error {
        Error::UnknownNetwork { name } => unknown_network(name, registry),
        Error::UnknownNetworkId { id } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Use the network name instead, e.g. 'invalidate:network <name>'\n\
             hint: Map {id} to a name under [networks.ids] in token-logos.toml"
        ),
        Error::InvalidAddress { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Addresses are 40 hex digits, optionally prefixed with 0x\n\
             hint: Pass the address in lowercase to skip checksum verification"
        ),
        Error::SourceNotFound { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Add the image to the token/ directory first\n\
             hint: Token names are given without the .jpg extension"
        ),
        Error::Copy { to, .. } => {
            let dir = to
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            anyhow::anyhow!(
                "{error}\n\n\
                 hint: Make sure the network directory {dir} exists\n\
                 hint: The destination may be incomplete; re-run the command"
            )
        }
        Error::PathNotFound { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Check --root points at the logo repository"
        ),
        _ => anyhow::Error::new(error),
    }
}

/// Error for a network name missing from the forward table.
///
/// Suggests the closest known name and lists all of them.
pub fn unknown_network(name: &str, registry: &ChainRegistry) -> anyhow::Error {
    let known: Vec<&str> = registry.names().collect();

    let did_you_mean = find_similar(name, &known)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "No network for {name}{did_you_mean}\n\n\
         Known networks are: {networks}\n\
         hint: Add it under [networks.names] in token-logos.toml",
        networks = known.join(", ")
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Case is ignored. Returns Some(candidate) if a close match is found
/// (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(&input, &candidate.to_lowercase());
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // single rolling row
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut diagonal = row[0];
        row[0] = i;
        for j in 1..=b.len() {
            let above = row[j];
            let cost = usize::from(a[i - 1] != b[j - 1]);
            row[j] = (above + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}
