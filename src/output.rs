//! # Console Output
//!
//! Operator-facing lines printed by the commands (copy results, per-image
//! invalidation outcomes, summaries) start with a status marker. On a color
//! capable terminal the marker is an emoji, otherwise a bracketed tag so the
//! output stays greppable in CI logs.
//!
//! The `--color` flag and the usual environment variables decide which:
//! - `--color=always|never|auto`
//! - `NO_COLOR` disables markers' emoji form when set (https://no-color.org/)
//! - `CLICOLOR=0` disables, `CLICOLOR_FORCE=1` forces
//! - `TERM=dumb` disables

use std::env;

/// Output configuration for status markers.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether emoji markers should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` value.
    ///
    /// `always` and `never` are taken literally; anything else falls back to
    /// environment and terminal detection.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Prefix for a line describing `status`.
    pub fn marker(&self, status: Status) -> &'static str {
        if self.use_color {
            status.emoji()
        } else {
            status.plain()
        }
    }
}

/// Kinds of console lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
    Skipped,
    Working,
    DryRun,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Failed => "❌",
            Status::Skipped => "⏭️",
            Status::Working => "🔄",
            Status::DryRun => "📝",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Failed => "[ERR]",
            Status::Skipped => "[SKIP]",
            Status::Working => "[..]",
            Status::DryRun => "[DRY]",
        }
    }
}
