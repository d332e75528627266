//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = LogoFixture::new().with_token("usdc");
//!     fixture.command().arg("networks").assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::addresses;
    pub use super::LogoFixture;
}

/// Addresses from the EIP-55 reference vectors.
#[allow(dead_code)]
pub mod addresses {
    pub const LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    pub const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
}

/// A temporary logo repository with `token/` and `network/` subtrees.
pub struct LogoFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl LogoFixture {
    /// Create a fixture with empty `token/` and `network/` directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("token")
            .create_dir_all()
            .expect("Failed to create token directory");
        temp_dir
            .child("network")
            .create_dir_all()
            .expect("Failed to create network directory");
        Self { temp_dir }
    }

    /// Add `token/<name>.jpg`.
    pub fn with_token(self, name: &str) -> Self {
        self.temp_dir
            .child(format!("token/{name}.jpg"))
            .write_binary(name.as_bytes())
            .expect("Failed to write token image");
        self
    }

    /// Add an empty `network/<network>` directory.
    pub fn with_network(self, network: &str) -> Self {
        self.temp_dir
            .child(format!("network/{network}"))
            .create_dir_all()
            .expect("Failed to create network directory");
        self
    }

    /// Add `network/<network>/<key>.jpg`.
    pub fn with_network_image(self, network: &str, key: &str) -> Self {
        self.temp_dir
            .child(format!("network/{network}/{key}.jpg"))
            .write_binary(key.as_bytes())
            .expect("Failed to write network image");
        self
    }

    /// Add `token-logos.toml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("token-logos.toml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add an executable shell script, returning the fixture.
    #[cfg(unix)]
    pub fn with_script(self, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let child = self.temp_dir.child(name);
        child
            .write_str(&format!("#!/bin/sh\n{body}\n"))
            .expect("Failed to write script");
        std::fs::set_permissions(child.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        self
    }

    /// Get the path to the logo root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `token-logos` command rooted at this fixture, without colors and
    /// isolated from the caller's environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("token-logos");
        cmd.current_dir(self.path())
            .env_remove("TOKEN_LOGOS_ROOT")
            .env_remove("TOKEN_LOGOS_CONFIG")
            .env_remove("TOKEN_LOGOS_CDN_TOOL")
            .env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.path())
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for LogoFixture {
    fn default() -> Self {
        Self::new()
    }
}
