//! Configuration module for navi.
//!
//! Settings are read from an optional `navi.toml`; every field has an internal default so
//! the file can be absent or partial.
//!
//! Module layout:
//! - [load]: path resolution, parsing and the main [Config] struct.
//! - [general]: behavior settings (preview support, timeouts, column width, logging).
//! - [theme]: colors for every part of the screen.
//! - [opener]: the external command used to open files.

pub mod general;
pub mod load;
pub mod opener;
pub mod theme;

pub use general::{General, InternalGeneral};
pub use load::{Config, RawConfig};
pub use opener::Opener;
pub use theme::{ColorPair, Theme};
