//! Copying pool images into network slots.
//!
//! `clone usdc ethereum 0xa0b8...` copies `token/usdc.jpg` to
//! `network/ethereum/<checksummed address>.jpg`. All validation happens
//! before anything is written; a failure during the copy itself leaves the
//! destination in an unknown state and the command should be re-run.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::address::Address;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::registry::ChainRegistry;

/// Where a clone read from and wrote to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Bytes written to the destination.
    pub bytes: u64,
}

/// Copies the pool image `token` to the slot for `address` on `network`.
///
/// Fails with `UnknownNetwork`, `InvalidAddress` or `SourceNotFound` before
/// touching the destination. The destination directory must already exist.
pub fn clone_token(
    registry: &ChainRegistry,
    layout: &Layout,
    token: &str,
    network: &str,
    address: &str,
) -> Result<CloneOutcome> {
    let id = registry.name_to_id(network)?;
    debug!("Network {} resolved to id {}", network, id);

    let checksummed = address.parse::<Address>()?.to_checksum();

    let source = layout.pool_image_path(token)?;
    if !source.is_file() {
        return Err(Error::SourceNotFound {
            name: token.to_string(),
            path: source,
        });
    }

    let destination = layout.network_image_path(network, &checksummed)?;

    info!(
        "Copying {} -> {}",
        source.display(),
        destination.display()
    );
    let bytes = fs::copy(&source, &destination).map_err(|e| Error::Copy {
        from: source.clone(),
        to: destination.clone(),
        source: e,
    })?;

    Ok(CloneOutcome {
        source,
        destination,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("token")).unwrap();
        fs::create_dir_all(temp.path().join("network/ethereum")).unwrap();
        fs::write(temp.path().join("token/usdc.jpg"), b"usdc-logo").unwrap();
        temp
    }

    fn network_entries(temp: &TempDir, network: &str) -> usize {
        fs::read_dir(temp.path().join("network").join(network))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    #[test]
    fn test_clone_writes_checksummed_destination() {
        let temp = setup();
        let layout = Layout::new(temp.path());

        let outcome =
            clone_token(&ChainRegistry::builtin(), &layout, "usdc", "ethereum", LOWER).unwrap();

        let expected = temp
            .path()
            .join("network/ethereum")
            .join(format!("{CHECKSUMMED}.jpg"));
        assert_eq!(outcome.destination, expected);
        assert_eq!(outcome.source, temp.path().join("token/usdc.jpg"));
        assert_eq!(outcome.bytes, 9);
        assert_eq!(fs::read(&expected).unwrap(), b"usdc-logo");
    }

    #[test]
    fn test_clone_overwrites_existing_destination() {
        let temp = setup();
        let layout = Layout::new(temp.path());
        let destination = temp
            .path()
            .join("network/ethereum")
            .join(format!("{CHECKSUMMED}.jpg"));
        fs::write(&destination, b"old").unwrap();

        clone_token(&ChainRegistry::builtin(), &layout, "usdc", "ethereum", LOWER).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"usdc-logo");
    }

    #[test]
    fn test_clone_unknown_network_writes_nothing() {
        let temp = setup();
        fs::create_dir_all(temp.path().join("network/arbitrum")).unwrap();
        let layout = Layout::new(temp.path());

        let err = clone_token(&ChainRegistry::builtin(), &layout, "usdc", "arbitrum", LOWER)
            .unwrap_err();

        assert!(matches!(err, Error::UnknownNetwork { .. }));
        assert_eq!(network_entries(&temp, "arbitrum"), 0);
    }

    #[test]
    fn test_clone_missing_source_writes_nothing() {
        let temp = setup();
        let layout = Layout::new(temp.path());

        let err = clone_token(&ChainRegistry::builtin(), &layout, "dai", "ethereum", LOWER)
            .unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { ref name, .. } if name == "dai"));
        assert_eq!(network_entries(&temp, "ethereum"), 0);
    }

    #[test]
    fn test_clone_invalid_address_writes_nothing() {
        let temp = setup();
        let layout = Layout::new(temp.path());

        let err = clone_token(
            &ChainRegistry::builtin(),
            &layout,
            "usdc",
            "ethereum",
            "0x../../../token/usdc",
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidAddress { .. }));
        assert_eq!(network_entries(&temp, "ethereum"), 0);
    }

    #[test]
    fn test_clone_missing_network_directory_reports_copy_error() {
        let temp = setup();
        let layout = Layout::new(temp.path());

        let err =
            clone_token(&ChainRegistry::builtin(), &layout, "usdc", "kovan", LOWER).unwrap_err();

        assert!(matches!(err, Error::Copy { .. }));
    }
}
