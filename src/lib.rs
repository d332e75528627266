//! # Token Logos Library
//!
//! This library provides the functionality behind the `token-logos`
//! command-line tool, which maintains a repository of token logo images and
//! keeps the CDN serving them fresh.
//!
//! ## Quick Example
//!
//! ```
//! use token_logos::address;
//! use token_logos::layout::Layout;
//! use token_logos::registry::{ChainRegistry, NetworkId};
//!
//! let registry = ChainRegistry::builtin();
//! assert_eq!(registry.name_to_id("ethereum").unwrap(), NetworkId(1));
//!
//! let checksummed = address::checksum("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
//! assert_eq!(checksummed, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//!
//! let layout = Layout::new("/logos");
//! let path = layout.network_image_path("ethereum", &checksummed).unwrap();
//! assert!(path.ends_with("network/ethereum/0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed.jpg"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Registry (`registry`)**: The network name and id tables.
//! - **Addresses (`address`)**: Parsing and EIP-55 checksumming.
//! - **Layout (`layout`)**: Where pool and network images live under the root.
//! - **Clone (`clone`)**: Copies a pool image into a network slot.
//! - **CDN (`cdn`)**: The `Invalidator` seam and the `cld` implementation.
//! - **Invalidation (`invalidate`)**: Directory walking, the bounded worker
//!   pool and the aggregated report.
//! - **Configuration (`config`, `defaults`)**: The optional
//!   `token-logos.toml` file and built-in values.

pub mod address;
pub mod cdn;
pub mod clone;
pub mod config;
pub mod defaults;
pub mod error;
pub mod invalidate;
pub mod layout;
pub mod output;
pub mod registry;
pub mod suggestions;
