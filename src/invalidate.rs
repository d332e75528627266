//! # Invalidate Commands
//!
//! Walks the network directories and issues one CDN invalidation per image.
//!
//! ## Operations
//!
//! - [`Invalidation::all`]: every network id known to the registry. Ids with
//!   no reverse-table name, and networks without a directory on disk, are
//!   logged and recorded as skipped.
//! - [`Invalidation::network`]: every image under one network.
//! - [`Invalidation::token`]: a single image.
//!
//! Network references may be a name or a numeric id; see
//! [`ChainRegistry::resolve_ref`].
//!
//! Requests run on a rayon pool capped at the configured concurrency. A
//! failed request never stops the others; every outcome lands in the
//! returned [`InvalidationReport`].

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::address::Address;
use crate::cdn::{image_url, InvalidationRequest, Invalidator};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::layout::{validate_component, Layout};
use crate::registry::ChainRegistry;

/// A request the CDN tool did not accept, or an entry that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedInvalidation {
    /// URL of the request, or the path of an unreadable directory entry.
    pub target: String,
    pub message: String,
}

/// A network `invalidate:all` did not visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNetwork {
    /// Network name, or the numeric id when no name is configured.
    pub network: String,
    pub reason: String,
}

/// Aggregated outcome of one invalidation command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvalidationReport {
    /// URLs invalidated successfully, in submission order.
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedInvalidation>,
    pub skipped: Vec<SkippedNetwork>,
}

impl InvalidationReport {
    pub fn total_requests(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Everything the invalidate commands need, passed in explicitly.
pub struct Invalidation<'a> {
    pub config: &'a Config,
    pub layout: &'a Layout,
    pub invalidator: &'a dyn Invalidator,
}

impl<'a> Invalidation<'a> {
    pub fn new(config: &'a Config, layout: &'a Layout, invalidator: &'a dyn Invalidator) -> Self {
        Self {
            config,
            layout,
            invalidator,
        }
    }

    fn registry(&self) -> &ChainRegistry {
        &self.config.registry
    }

    /// Invalidates every image of every network the registry can name.
    pub fn all(&self) -> Result<InvalidationReport> {
        let mut report = InvalidationReport::default();
        let mut requests = Vec::new();

        for id in self.registry().known_ids() {
            let name = match self.registry().id_to_name(id) {
                Ok(name) => name,
                Err(e) => {
                    warn!("Skipping network id {}: {}", id, e);
                    report.skipped.push(SkippedNetwork {
                        network: id.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let dir = self.layout.network_dir(name)?;
            if !dir.is_dir() {
                warn!("No network directory found at {}", dir.display());
                report.skipped.push(SkippedNetwork {
                    network: name.to_string(),
                    reason: format!("no directory at {}", dir.display()),
                });
                continue;
            }

            info!("Invalidating cache for network {}", name);
            requests.extend(self.directory_requests(
                name,
                &dir,
                &self.config.breakpoints.all,
                &mut report,
            )?);
        }

        self.submit(requests, &mut report)?;
        Ok(report)
    }

    /// Invalidates every image under one network directory.
    pub fn network(&self, network_ref: &str) -> Result<InvalidationReport> {
        let name = self.registry().resolve_ref(network_ref)?;
        let dir = self.layout.network_dir(&name)?;
        if !dir.is_dir() {
            return Err(Error::PathNotFound { path: dir });
        }

        info!("Invalidating cache for network {}", name);
        let mut report = InvalidationReport::default();
        let requests =
            self.directory_requests(&name, &dir, &self.config.breakpoints.network, &mut report)?;
        self.submit(requests, &mut report)?;
        Ok(report)
    }

    /// Invalidates a single network image.
    ///
    /// A key that is not found as typed but parses as an address is retried
    /// in its checksummed form, the name `clone` writes.
    pub fn token(&self, network_ref: &str, key: &str) -> Result<InvalidationReport> {
        let name = self.registry().resolve_ref(network_ref)?;
        let path = self.token_path(&name, key)?;

        info!("Invalidating cache for network {} and token {}", name, key);
        let file_name = file_name_of(&path)?;
        let url = image_url(&self.config.cdn.base_url, &name, &file_name)?;

        let mut report = InvalidationReport::default();
        let request = InvalidationRequest::new(url, &self.config.breakpoints.token);
        self.submit(vec![request], &mut report)?;
        Ok(report)
    }

    fn token_path(&self, network: &str, key: &str) -> Result<PathBuf> {
        let path = self.layout.network_image_path(network, key)?;
        if path.is_file() {
            return Ok(path);
        }

        if let Ok(address) = key.parse::<Address>() {
            let checksummed = self
                .layout
                .network_image_path(network, &address.to_checksum())?;
            if checksummed.is_file() {
                debug!("Using checksummed name {}", checksummed.display());
                return Ok(checksummed);
            }
        }

        Err(Error::PathNotFound { path })
    }

    /// Builds one request per file directly inside `dir`.
    ///
    /// Unreadable entries are logged and recorded, not fatal.
    fn directory_requests(
        &self,
        network: &str,
        dir: &Path,
        widths: &[u32],
        report: &mut InvalidationReport,
    ) -> Result<Vec<InvalidationRequest>> {
        let mut requests = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("Failed to read entry in {}: {}", dir.display(), e);
                    report.failed.push(FailedInvalidation {
                        target: e
                            .path()
                            .unwrap_or(dir)
                            .display()
                            .to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                debug!("Ignoring non-file entry {}", entry.path().display());
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                error!("Skipping non UTF-8 file name {}", entry.path().display());
                report.failed.push(FailedInvalidation {
                    target: entry.path().display().to_string(),
                    message: "file name is not valid UTF-8".to_string(),
                });
                continue;
            };

            let url = image_url(&self.config.cdn.base_url, network, file_name)?;
            requests.push(InvalidationRequest::new(url, widths));
        }

        Ok(requests)
    }

    /// Runs requests on a bounded pool and folds the outcomes into `report`.
    fn submit(
        &self,
        requests: Vec<InvalidationRequest>,
        report: &mut InvalidationReport,
    ) -> Result<()> {
        if requests.is_empty() {
            return Ok(());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.concurrency.max(1))
            .build()?;

        let invalidator = self.invalidator;
        let outcomes: Vec<(String, Result<String>)> = pool.install(|| {
            requests
                .par_iter()
                .map(|request| {
                    info!("Invalidating {}", request.url);
                    let outcome = invalidator.invalidate(request);
                    match &outcome {
                        Ok(output) => {
                            if !output.is_empty() {
                                debug!("{}", output);
                            }
                            info!("Invalidated {}", request.url);
                        }
                        Err(e) => error!("{}", e),
                    }
                    (request.url.clone(), outcome)
                })
                .collect()
        });

        for (url, outcome) in outcomes {
            match outcome {
                Ok(_) => report.succeeded.push(url),
                Err(e) => report.failed.push(FailedInvalidation {
                    target: url,
                    message: e.to_string(),
                }),
            }
        }

        Ok(())
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::PathNotFound {
            path: path.to_path_buf(),
        })?;
    validate_component(name)?;
    Ok(name.to_string())
}
