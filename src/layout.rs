//! Path construction for the logo tree.
//!
//! The repository root holds two subtrees:
//!
//! ```text
//! <root>/token/<name>.jpg                 shared pool, one image per token
//! <root>/network/<network>/<address>.jpg  served images, keyed per network
//! ```
//!
//! Nothing here touches the disk. Every caller-supplied component is
//! checked with [`validate_component`] before it is joined onto the root.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Extension shared by every logo image.
pub const IMAGE_EXTENSION: &str = "jpg";

const TOKEN_DIR: &str = "token";
const NETWORK_DIR: &str = "network";

/// Rejects components that are empty, relative links, or contain separators.
pub fn validate_component(component: &str) -> Result<()> {
    let message = if component.is_empty() {
        "must not be empty"
    } else if component == "." || component == ".." {
        "must not be a relative directory"
    } else if component.contains(['/', '\\']) {
        "must not contain path separators"
    } else if component.contains('\0') {
        "must not contain NUL bytes"
    } else {
        return Ok(());
    };

    Err(Error::InvalidPathComponent {
        component: component.to_string(),
        message: message.to_string(),
    })
}

/// File name of an image keyed by `key`.
pub fn image_file_name(key: &str) -> String {
    format!("{key}.{IMAGE_EXTENSION}")
}

/// Resolves pool and network paths under a fixed root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/token/<token>.jpg`
    pub fn pool_image_path(&self, token: &str) -> Result<PathBuf> {
        validate_component(token)?;
        Ok(self.root.join(TOKEN_DIR).join(image_file_name(token)))
    }

    /// `<root>/network/<network>`
    pub fn network_dir(&self, network: &str) -> Result<PathBuf> {
        validate_component(network)?;
        Ok(self.root.join(NETWORK_DIR).join(network))
    }

    /// `<root>/network/<network>/<key>.jpg`
    pub fn network_image_path(&self, network: &str, key: &str) -> Result<PathBuf> {
        validate_component(key)?;
        Ok(self.network_dir(network)?.join(image_file_name(key)))
    }
}
