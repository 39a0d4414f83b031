//! Opener configuration options for navi
//!
//! The `[opener]` table names the command that opens files with the OS default
//! application. It is looked up on `PATH` each time a file is opened.

use crate::core::error::{FsError, FsResult};

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Opener {
    cmd: String,
}

impl Default for Opener {
    fn default() -> Self {
        Opener {
            cmd: default_opener().into(),
        }
    }
}

impl Opener {
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() {
            default_opener()
        } else {
            trimmed
        }
    }

    /// Resolves the opener with the standard executable search rules.
    pub fn locate(&self) -> FsResult<PathBuf> {
        which::which(self.cmd()).map_err(|e| {
            log::warn!("opener '{}' not found: {}", self.cmd(), e);
            FsError::LauncherNotFound {
                cmd: self.cmd().to_string(),
            }
        })
    }
}

#[cfg(target_os = "macos")]
fn default_opener() -> &'static str {
    "open"
}

#[cfg(windows)]
fn default_opener() -> &'static str {
    "explorer"
}

#[cfg(not(any(target_os = "macos", windows)))]
fn default_opener() -> &'static str {
    "xdg-open"
}
