//! # Error Handling
//!
//! This module defines the centralized error type for the `token-logos`
//! library. It uses the `thiserror` library to create a single `Error` enum
//! covering every failure a command can hit, each with enough context to
//! tell the operator what to fix.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Argument-validation variants
//!   (`UnknownNetwork`, `UnknownNetworkId`, `InvalidAddress`,
//!   `SourceNotFound`, `PathNotFound`) abort a command. `ExternalToolFailure`
//!   is produced per invalidation request and is normally collected into an
//!   `InvalidationReport` instead of being propagated.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::NetworkId;

/// Main error type for token-logos operations
#[derive(Error, Debug)]
pub enum Error {
    /// The network name is not a key of the forward registry table.
    #[error("Unknown network: {name}")]
    UnknownNetwork { name: String },

    /// The network id has no entry in the reverse registry table.
    #[error("No network name configured for id {id}")]
    UnknownNetworkId { id: NetworkId },

    /// The address is malformed or carries a wrong mixed-case checksum.
    #[error("Invalid address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    /// No pool image exists for the requested token name.
    #[error("No token found with name {name} at path {}", path.display())]
    SourceNotFound { name: String, path: PathBuf },

    /// A network directory or network image does not exist.
    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// A name used as a path component would escape its directory.
    #[error("Invalid path component {component:?}: {message}")]
    InvalidPathComponent { component: String, message: String },

    /// Copying a pool image into its network slot failed.
    ///
    /// The destination may be missing or partially written.
    #[error("Failed to copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CDN tool could not be started or reported a failure.
    #[error("Invalidation failed for {url}: {message}")]
    ExternalToolFailure { url: String, message: String },

    /// The configuration file is well-formed TOML but semantically invalid.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The invalidation worker pool could not be created.
    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
