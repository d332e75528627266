//! # CDN Cache Invalidation
//!
//! This module is the boundary to the external CDN tooling. It is built
//! around the [`Invalidator`] trait so that the directory walking in
//! [`crate::invalidate`] can be exercised with a recording mock in tests and
//! with [`DryRunInvalidator`] from the command line.
//!
//! The production implementation, [`CloudinaryCli`], shells out once per
//! image to the `cld` command:
//!
//! ```text
//! cld uploader explicit <url> type=fetch invalidate=true eager=[{"width":24},...]
//! ```
//!
//! The tool's exit status decides success; its stdout is handed back for
//! logging and is never interpreted.

use std::path::PathBuf;
use std::process::Command;

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// One cache-bust request for a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationRequest {
    /// Public URL of the image as fetched by the CDN.
    pub url: String,
    /// Widths to regenerate eagerly once the cached copy is purged.
    pub eager_widths: Vec<u32>,
}

impl InvalidationRequest {
    pub fn new(url: impl Into<String>, eager_widths: &[u32]) -> Self {
        Self {
            url: url.into(),
            eager_widths: eager_widths.to_vec(),
        }
    }

    /// The `eager` parameter as the JSON array the CDN tool expects.
    pub fn eager_param(&self) -> String {
        #[derive(Serialize)]
        struct Eager {
            width: u32,
        }

        let transforms: Vec<Eager> = self
            .eager_widths
            .iter()
            .map(|&width| Eager { width })
            .collect();
        serde_json::to_string(&transforms).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Trait for CDN invalidation - allows mocking in tests
pub trait Invalidator: Send + Sync {
    /// Purges one image and requests its eager transforms.
    ///
    /// Returns whatever the backend reported on success.
    fn invalidate(&self, request: &InvalidationRequest) -> Result<String>;
}

/// Invalidates through the Cloudinary command-line tool.
#[derive(Debug, Clone)]
pub struct CloudinaryCli {
    program: PathBuf,
}

impl CloudinaryCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, request: &InvalidationRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(["uploader", "explicit"])
            .arg(&request.url)
            .arg("type=fetch")
            .arg("invalidate=true")
            .arg(format!("eager={}", request.eager_param()));
        command
    }
}

impl Invalidator for CloudinaryCli {
    fn invalidate(&self, request: &InvalidationRequest) -> Result<String> {
        let output = self
            .command(request)
            .output()
            .map_err(|e| Error::ExternalToolFailure {
                url: request.url.clone(),
                message: format!("failed to run {}: {}", self.program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExternalToolFailure {
                url: request.url.clone(),
                message: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Accepts every request without contacting the CDN.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunInvalidator;

impl Invalidator for DryRunInvalidator {
    fn invalidate(&self, request: &InvalidationRequest) -> Result<String> {
        Ok(format!("dry run: would invalidate {}", request.url))
    }
}

/// Public URL of `file_name` inside `network` under `base`.
///
/// Components are percent-encoded as path segments.
pub fn image_url(base: &Url, network: &str, file_name: &str) -> Result<String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::Config {
            message: format!("{base} cannot be used as a base URL"),
        })?
        .pop_if_empty()
        .push(network)
        .push(file_name);
    Ok(url.into())
}
