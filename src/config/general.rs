//! The general configuration settings for navi.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of navi.toml and the [InternalGeneral] struct holding the processed values.

use log::LevelFilter;
use serde::Deserialize;

use std::str::FromStr;
use std::time::Duration;

/// Narrowest and widest allowed name column.
const MIN_NAME_WIDTH: usize = 10;
const MAX_NAME_WIDTH: usize = 120;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    preview_support: bool,
    preview_on_start: bool,
    status_timeout_ms: u64,
    delete_timeout_ms: u64,
    name_width: usize,
    icons: bool,
    log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            preview_support: true,
            preview_on_start: false,
            status_timeout_ms: 3000,
            delete_timeout_ms: 3000,
            name_width: 30,
            icons: true,
            log_level: "info".into(),
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    preview_support: bool,
    preview_on_start: bool,
    status_timeout: Duration,
    delete_timeout: Duration,
    name_width: usize,
    icons: bool,
    log_level: LevelFilter,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let log_level = LevelFilter::from_str(g.log_level.trim()).unwrap_or_else(|_| {
            eprintln!(
                "[Warning] unknown log_level '{}', falling back to 'info'",
                g.log_level
            );
            LevelFilter::Info
        });

        Self {
            preview_support: g.preview_support,
            preview_on_start: g.preview_support && g.preview_on_start,
            status_timeout: Duration::from_millis(g.status_timeout_ms),
            delete_timeout: Duration::from_millis(g.delete_timeout_ms),
            name_width: g.name_width.clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH),
            icons: g.icons,
            log_level,
        }
    }
}

impl InternalGeneral {
    /// Whether the preview pane, its `p` toggle and the three-row help footer exist at all.
    #[inline]
    pub fn preview_support(&self) -> bool {
        self.preview_support
    }

    #[inline]
    pub fn preview_on_start(&self) -> bool {
        self.preview_on_start
    }

    /// How long a status message stays on screen.
    #[inline]
    pub fn status_timeout(&self) -> Duration {
        self.status_timeout
    }

    /// Window in which a second delete press confirms the first.
    #[inline]
    pub fn delete_timeout(&self) -> Duration {
        self.delete_timeout
    }

    #[inline]
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    #[inline]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for InternalGeneral {
    fn default() -> Self {
        InternalGeneral::from(General::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_three_second_windows() {
        let g = InternalGeneral::default();
        assert_eq!(g.status_timeout(), Duration::from_secs(3));
        assert_eq!(g.delete_timeout(), Duration::from_secs(3));
        assert_eq!(g.name_width(), 30);
        assert!(g.preview_support());
        assert!(!g.preview_on_start());
    }

    #[test]
    fn values_are_processed() -> Result<(), Box<dyn std::error::Error>> {
        let raw: General = toml::from_str(
            r#"
            preview_support = false
            preview_on_start = true
            name_width = 500
            log_level = "debug"
            "#,
        )?;
        let g = InternalGeneral::from(raw);
        assert!(!g.preview_on_start(), "preview cannot start on without support");
        assert_eq!(g.name_width(), MAX_NAME_WIDTH);
        assert_eq!(g.log_level(), LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn bad_log_level_falls_back() -> Result<(), Box<dyn std::error::Error>> {
        let raw: General = toml::from_str(r#"log_level = "chatty""#)?;
        assert_eq!(InternalGeneral::from(raw).log_level(), LevelFilter::Info);
        Ok(())
    }
}
