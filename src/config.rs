//! # Configuration
//!
//! This module loads the optional `token-logos.toml` file and merges it over
//! the built-in defaults. Every key is optional, so an absent file and an
//! empty file both produce [`Config::default`].
//!
//! ```toml
//! concurrency = 4
//!
//! [cdn]
//! base_url = "https://raw.githubusercontent.com/milkyswap/logos/main/network"
//! tool = "/usr/local/bin/cld"
//!
//! [breakpoints]
//! all = [24, 32, 48, 64, 96, 128]
//! network = [24, 32, 48, 54, 64, 96, 128]
//! token = [24, 32, 48, 54, 64, 96, 128]
//!
//! [networks.names]
//! ethereum = 1
//! kovan = 42
//!
//! [networks.ids]
//! "1" = "ethereum"
//! ```
//!
//! The two `networks` tables replace their built-in counterparts
//! independently. TOML keys are strings, so reverse-table ids are written as
//! quoted integers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::defaults;
use crate::error::{Error, Result};
use crate::registry::{ChainRegistry, NetworkId};

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    concurrency: Option<usize>,
    #[serde(default)]
    cdn: FileCdn,
    #[serde(default)]
    breakpoints: FileBreakpoints,
    #[serde(default)]
    networks: FileNetworks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileCdn {
    base_url: Option<String>,
    tool: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileBreakpoints {
    all: Option<Vec<u32>>,
    network: Option<Vec<u32>>,
    token: Option<Vec<u32>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileNetworks {
    names: Option<BTreeMap<String, NetworkId>>,
    ids: Option<BTreeMap<String, String>>,
}

/// Where and how invalidation requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnConfig {
    /// Public URL the network directories are served under.
    pub base_url: Url,
    /// CDN command-line tool.
    pub tool: PathBuf,
}

/// Eager transform widths, one list per invalidation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    pub all: Vec<u32>,
    pub network: Vec<u32>,
    pub token: Vec<u32>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            all: defaults::DEFAULT_ALL_BREAKPOINTS.to_vec(),
            network: defaults::DEFAULT_NETWORK_BREAKPOINTS.to_vec(),
            token: defaults::DEFAULT_TOKEN_BREAKPOINTS.to_vec(),
        }
    }
}

/// Fully resolved configuration shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub registry: ChainRegistry,
    pub cdn: CdnConfig,
    pub breakpoints: Breakpoints,
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: ChainRegistry::builtin(),
            cdn: CdnConfig {
                base_url: default_base_url(),
                tool: PathBuf::from(defaults::DEFAULT_CDN_TOOL),
            },
            breakpoints: Breakpoints::default(),
            concurrency: defaults::DEFAULT_CONCURRENCY,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(defaults::DEFAULT_CDN_BASE_URL).expect("built-in CDN base URL is valid")
}

/// Parses configuration from a TOML string.
pub fn parse(content: &str) -> Result<Config> {
    let file: FileConfig = toml::from_str(content)?;
    let base = Config::default();

    let concurrency = file.concurrency.unwrap_or(base.concurrency);
    if concurrency == 0 {
        return Err(Error::Config {
            message: "concurrency must be at least 1".to_string(),
        });
    }

    let base_url = match file.cdn.base_url {
        Some(raw) => parse_base_url(&raw)?,
        None => base.cdn.base_url,
    };

    let breakpoints = Breakpoints {
        all: checked_widths("all", file.breakpoints.all, base.breakpoints.all)?,
        network: checked_widths("network", file.breakpoints.network, base.breakpoints.network)?,
        token: checked_widths("token", file.breakpoints.token, base.breakpoints.token)?,
    };

    let registry = match (file.networks.names, file.networks.ids) {
        (None, None) => base.registry,
        (names, ids) => {
            let names = names.unwrap_or_else(|| {
                base.registry
                    .forward_entries()
                    .map(|(name, id)| (name.to_string(), id))
                    .collect()
            });
            let ids = match ids {
                Some(raw) => parse_reverse_table(raw)?,
                None => base
                    .registry
                    .reverse_entries()
                    .map(|(id, name)| (id, name.to_string()))
                    .collect(),
            };
            ChainRegistry::new(names, ids)?
        }
    };

    Ok(Config {
        registry,
        cdn: CdnConfig {
            base_url,
            tool: file.cdn.tool.unwrap_or(base.cdn.tool),
        },
        breakpoints,
        concurrency,
    })
}

/// Reads and parses a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Loads the configuration for a logo root.
///
/// An explicit path must exist. Without one, `<root>/token-logos.toml` is
/// used when present and the built-in defaults otherwise.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("Loading configuration from {}", path.display());
        return from_file(path);
    }

    let path = defaults::default_config_path(root);
    if path.is_file() {
        log::debug!("Loading configuration from {}", path.display());
        from_file(path)
    } else {
        log::debug!("No {} found, using built-in configuration", path.display());
        Ok(Config::default())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::Config {
        message: format!("cdn.base_url {raw:?} is not a valid URL: {e}"),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::Config {
            message: format!("cdn.base_url {raw:?} cannot be used as a base URL"),
        });
    }
    Ok(url)
}

fn checked_widths(key: &str, widths: Option<Vec<u32>>, fallback: Vec<u32>) -> Result<Vec<u32>> {
    let widths = widths.unwrap_or(fallback);
    if widths.contains(&0) {
        return Err(Error::Config {
            message: format!("breakpoints.{key} must only contain positive widths"),
        });
    }
    Ok(widths)
}

fn parse_reverse_table(raw: BTreeMap<String, String>) -> Result<BTreeMap<NetworkId, String>> {
    raw.into_iter()
        .map(|(key, name)| {
            key.parse::<u64>()
                .map(|id| (NetworkId(id), name))
                .map_err(|_| Error::Config {
                    message: format!("networks.ids key {key:?} is not a network id"),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.cdn.tool, PathBuf::from("/usr/local/bin/cld"));
        assert_eq!(
            config.cdn.base_url.as_str(),
            "https://raw.githubusercontent.com/milkyswap/logos/main/network"
        );
        assert_eq!(config.breakpoints.all, vec![24, 32, 48, 64, 96, 128]);
        assert_eq!(config.breakpoints.token, vec![24, 32, 48, 54, 64, 96, 128]);
    }

    #[test]
    fn test_parse_overrides() {
        let config = parse(
            r#"
concurrency = 2

[cdn]
base_url = "https://cdn.example.com/logos"
tool = "/opt/cld"

[breakpoints]
network = [16, 32]
"#,
        )
        .unwrap();

        assert_eq!(config.concurrency, 2);
        assert_eq!(config.cdn.base_url.as_str(), "https://cdn.example.com/logos");
        assert_eq!(config.cdn.tool, PathBuf::from("/opt/cld"));
        assert_eq!(config.breakpoints.network, vec![16, 32]);
        // untouched lists keep their defaults
        assert_eq!(config.breakpoints.all, vec![24, 32, 48, 64, 96, 128]);
    }

    #[test]
    fn test_parse_network_tables() {
        let config = parse(
            r#"
[networks.names]
ethereum = 1
arbitrum = 42161

[networks.ids]
"1" = "ethereum"
"42161" = "arbitrum"
"#,
        )
        .unwrap();

        assert_eq!(
            config.registry.name_to_id("arbitrum").unwrap(),
            NetworkId(42161)
        );
        assert_eq!(config.registry.id_to_name(NetworkId(42161)).unwrap(), "arbitrum");
        assert!(config.registry.name_to_id("kovan").is_err());
    }

    #[test]
    fn test_reverse_table_alone_keeps_builtin_names() {
        let config = parse(
            r#"
[networks.ids]
"42" = "kovan"
"#,
        )
        .unwrap();

        assert_eq!(config.registry.id_to_name(NetworkId(42)).unwrap(), "kovan");
        assert!(config.registry.id_to_name(NetworkId(1)).is_err());
        assert!(config.registry.name_to_id("ethereum").is_ok());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(parse("concurrency = 0"), Err(Error::Config { .. })));
        assert!(matches!(
            parse("[cdn]\nbase_url = \"not a url\""),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            parse("[breakpoints]\nall = [0, 24]"),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            parse("[networks.ids]\nmainnet = \"ethereum\""),
            Err(Error::Config { .. })
        ));
        assert!(matches!(parse("unknown = true"), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_prefers_root_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load(temp.path(), None).unwrap(), Config::default());

        fs::write(temp.path().join("token-logos.toml"), "concurrency = 9").unwrap();
        assert_eq!(load(temp.path(), None).unwrap().concurrency, 9);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            load(temp.path(), Some(&missing)),
            Err(Error::Io(_))
        ));
    }
}
