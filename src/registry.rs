//! # Chain Registry
//!
//! A static, bidirectional mapping between network ids and the
//! human-readable network names used on the command line and as directory
//! names under `network/`.
//!
//! The two directions are kept as two explicit tables rather than one table
//! and its inverse. The forward table (name to id) decides which names
//! `clone` accepts. The reverse table (id to name) decides which networks
//! `invalidate:all` visits and which numeric references resolve. The
//! built-in reverse table only covers ethereum and the milkomeda testnet;
//! every other id is reported and skipped by `invalidate:all`.
//!
//! A registry is built once at startup and handed to each command; it is
//! never mutated afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::validate_component;

/// Numeric identifier of a blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl NetworkId {
    pub const ETHEREUM: NetworkId = NetworkId(1);
    pub const MAINNET: NetworkId = NetworkId(1);
    pub const ROPSTEN: NetworkId = NetworkId(3);
    pub const RINKEBY: NetworkId = NetworkId(4);
    pub const GORLI: NetworkId = NetworkId(5);
    pub const KOVAN: NetworkId = NetworkId(42);
    pub const MILKOMEDA_TESTNET: NetworkId = NetworkId(200101);
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable name/id lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    names: BTreeMap<String, NetworkId>,
    ids: BTreeMap<NetworkId, String>,
}

impl ChainRegistry {
    /// Builds a registry from explicit forward and reverse tables.
    ///
    /// Every name in either table must be usable as a directory name.
    pub fn new(
        names: BTreeMap<String, NetworkId>,
        ids: BTreeMap<NetworkId, String>,
    ) -> Result<Self> {
        for name in names.keys().chain(ids.values()) {
            validate_component(name).map_err(|e| Error::Config {
                message: format!("network name {name:?} cannot be used as a directory: {e}"),
            })?;
        }
        Ok(Self { names, ids })
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Self {
        let names = [
            ("ethereum", NetworkId::ETHEREUM),
            ("ropsten", NetworkId::ROPSTEN),
            ("rinkeby", NetworkId::RINKEBY),
            ("kovan", NetworkId::KOVAN),
            ("gorli", NetworkId::GORLI),
            ("milkomedaTestnet", NetworkId::MILKOMEDA_TESTNET),
        ]
        .into_iter()
        .map(|(name, id)| (name.to_string(), id))
        .collect();

        let ids = [
            (NetworkId::ETHEREUM, "ethereum"),
            (NetworkId::MILKOMEDA_TESTNET, "milkomedaTestnet"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect();

        Self { names, ids }
    }

    /// Looks up a network name in the forward table.
    pub fn name_to_id(&self, name: &str) -> Result<NetworkId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownNetwork {
                name: name.to_string(),
            })
    }

    /// Looks up a network id in the reverse table.
    ///
    /// Fails for ids missing from the reverse table even when some name maps
    /// to them in the forward table.
    pub fn id_to_name(&self, id: NetworkId) -> Result<&str> {
        self.ids
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::UnknownNetworkId { id })
    }

    /// Resolves a command-line network reference to a directory name.
    ///
    /// A reference made only of digits is a network id and goes through the
    /// reverse table; one too large for a `u64` is rejected as an invalid
    /// component. Anything else is taken as a network name as-is, whether
    /// or not the forward table knows it.
    pub fn resolve_ref(&self, network_ref: &str) -> Result<String> {
        if !network_ref.is_empty() && network_ref.bytes().all(|b| b.is_ascii_digit()) {
            let id = network_ref
                .parse::<u64>()
                .map_err(|e| Error::InvalidPathComponent {
                    component: network_ref.to_string(),
                    message: format!("not a valid network id: {e}"),
                })?;
            return self.id_to_name(NetworkId(id)).map(str::to_string);
        }

        validate_component(network_ref)?;
        Ok(network_ref.to_string())
    }

    /// Every id mentioned by either table, ascending and deduplicated.
    pub fn known_ids(&self) -> Vec<NetworkId> {
        self.names
            .values()
            .chain(self.ids.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Forward-table names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Forward table entries in name order.
    pub fn forward_entries(&self) -> impl Iterator<Item = (&str, NetworkId)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Reverse table entries in id order.
    pub fn reverse_entries(&self) -> impl Iterator<Item = (NetworkId, &str)> {
        self.ids.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
