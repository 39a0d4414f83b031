//! The main config loading module for navi.
//!
//! Handles loading and deserializing settings from `navi.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing file is not an error: navi runs on internal defaults.

use crate::config::{General, InternalGeneral, Opener, Theme};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    opener: Opener,
}

/// Main configuration struct for navi
#[derive(Debug, Default)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
    opener: Opener,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: raw.theme,
            opener: raw.opener,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// Falls back to the defaults if the file is missing or does not parse.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn opener(&self) -> &Opener {
        &self.opener
    }

    /// Determine the default configuration file path.
    /// Checks the NAVI_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then defaults to ~/.config/navi/navi.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("NAVI_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("navi/navi.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/navi/navi.toml");
        }
        PathBuf::from("navi.toml")
    }

    /// Write the default configuration file to `path`. Refuses to overwrite.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

const DEFAULT_TOML: &str = r##"# navi.toml - default configuration for navi
# Commented values are the internal defaults.

[general]
# preview_support = true      # false removes the preview pane and the 'p' key
# preview_on_start = false
# status_timeout_ms = 3000
# delete_timeout_ms = 3000
# name_width = 30
# icons = true                # needs a Nerd Font
# log_level = "info"          # off, error, warn, info, debug, trace

[opener]
# cmd = "xdg-open"

# Colors: names ("cyan"), hex ("#RRGGBB") or palette indices ("236")
[theme]
# header = { fg = "252", bg = "24" }
# status = { fg = "221", bg = "236" }
# selection = { fg = "39", bg = "236" }
# directory = { fg = "221" }
# file = { fg = "39" }
# name = { fg = "252" }
# size = { fg = "114" }
# date = { fg = "221" }
# footer = { fg = "252", bg = "237" }
# prompt = { fg = "252", bg = "236" }
# prompt_border = { fg = "39", bg = "236" }
# preview = { fg = "252", bg = "236" }
"##;
