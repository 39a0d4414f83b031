//! Miscellaneous utility functions for navi.
//!
//! - [helpers]: color parsing, collision-free paths and running the external opener.
//! - [cli]: command-line argument handling.
//! - [logging]: file logger setup.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{get_unused_path, join_under, open_external, parse_color};
