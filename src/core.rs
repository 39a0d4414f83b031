//! Core runtime logic for navi.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [fm]: directory listing and the file operations (see [list_entries], [Entry]).
//! - [error]: the [FsError] every file operation reports.
//! - [formatter]: sizes, times, fixed-width names and previews.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod terminal;

pub use error::{FsError, FsResult};
pub use fm::{Entry, EntryMeta, browse_dir, list_entries};
pub use formatter::{
    Preview, format_entry_size, format_file_size, format_file_time, load_preview,
    sanitize_to_exact_width,
};
