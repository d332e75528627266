//! Default values for token-logos configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the logo root.
pub const DEFAULT_CONFIG_FILENAME: &str = "token-logos.toml";

/// Public location the CDN fetches network images from.
pub const DEFAULT_CDN_BASE_URL: &str = "https://raw.githubusercontent.com/milkyswap/logos/main/network";

/// CDN command-line tool used for invalidation.
pub const DEFAULT_CDN_TOOL: &str = "/usr/local/bin/cld";

/// Number of invalidation requests in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Eager widths requested by `invalidate:all`.
pub const DEFAULT_ALL_BREAKPOINTS: &[u32] = &[24, 32, 48, 64, 96, 128];

/// Eager widths requested by `invalidate:network`.
pub const DEFAULT_NETWORK_BREAKPOINTS: &[u32] = &[24, 32, 48, 54, 64, 96, 128];

/// Eager widths requested by `invalidate:token`.
pub const DEFAULT_TOKEN_BREAKPOINTS: &[u32] = &[24, 32, 48, 54, 64, 96, 128];

/// Returns the config file path used when `--config` is not given.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_is_under_root() {
        let path = default_config_path(Path::new("/logos"));
        assert_eq!(path, PathBuf::from("/logos/token-logos.toml"));
    }

    #[test]
    fn test_all_breakpoints_omit_54() {
        assert!(!DEFAULT_ALL_BREAKPOINTS.contains(&54));
        assert!(DEFAULT_NETWORK_BREAKPOINTS.contains(&54));
        assert!(DEFAULT_TOKEN_BREAKPOINTS.contains(&54));
    }
}
