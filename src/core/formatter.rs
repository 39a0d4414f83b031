//! Display formatting and preview loading for navi.
//!
//! Turns raw metadata into the strings the renderer shows (sizes, dates, fixed-width names)
//! and builds the [Preview] for the selected entry.

use crate::core::fm::browse_dir;

use chrono::{DateTime, Local};
use humansize::{FormatSizeOptions, WINDOWS, format_size};
use unicode_width::UnicodeWidthChar;

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::time::SystemTime;

/// Number of children listed in a directory preview.
pub const PREVIEW_DIR_ENTRIES: usize = 5;
/// Bytes read from the start of a file for preview and binary detection.
pub const PREVIEW_PEEK_BYTES: usize = 1000;
/// Lines of text shown in a file preview.
pub const PREVIEW_MAX_LINES: usize = 10;
/// Files above this size are not previewed at all (1 MiB).
pub const MAX_PREVIEW_SIZE: u64 = 1024 * 1024;
/// Appended when a preview does not show everything.
pub const TRUNCATION_MARKER: &str = "...";

/// Date format used for modification times, e.g. `Jan 02 2006 15:04`.
const DATE_FORMAT: &str = "%b %d %Y %H:%M";

/// Preview content for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Directory {
        total: usize,
        /// `(name, is_dir)` for the first [PREVIEW_DIR_ENTRIES] children.
        entries: Vec<(String, bool)>,
        truncated: bool,
    },
    Text {
        lines: Vec<String>,
        truncated: bool,
    },
    Binary,
    TooLarge,
    Error(String),
}

/// Formats a byte count with 1024-based units, e.g. `512 B`, `1.5 KB`.
pub fn format_file_size(size: u64) -> String {
    let opts = FormatSizeOptions::from(WINDOWS).decimal_places(1);
    format_size(size, opts)
}

/// Formats the size column of a listing row. Directories show `-`.
pub fn format_entry_size(size: u64, is_dir: bool) -> String {
    if is_dir {
        "-".into()
    } else {
        format_file_size(size)
    }
}

/// Formats a modification time in local time, or `-` if unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format(DATE_FORMAT).to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Truncates or pads `line` to exactly `width` display columns.
///
/// Control characters are dropped and tabs expand to the next multiple of 4.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }

        out.push(ch);
        current_w += w;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }
    out
}

/// Drops control characters and expands tabs without padding or truncating.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let n = 4 - (col % 4);
            out.push_str(&" ".repeat(n));
            col += n;
        } else if !ch.is_control() {
            out.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Builds the preview for `path`: a short child listing for directories, the
/// first lines of text for files.
pub fn load_preview(path: &Path) -> Preview {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => return Preview::Error("Error accessing file".into()),
    };

    if meta.is_dir() {
        return preview_directory(path);
    }

    if meta.len() > MAX_PREVIEW_SIZE {
        return Preview::TooLarge;
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => "Permission denied".to_string(),
                _ => format!("Error opening file: {}", e),
            };
            return Preview::Error(msg);
        }
    };

    let mut buf = Vec::with_capacity(PREVIEW_PEEK_BYTES);
    if let Err(e) = file.take(PREVIEW_PEEK_BYTES as u64).read_to_end(&mut buf) {
        return Preview::Error(format!("Error reading file: {}", e));
    }

    preview_bytes(&buf, (buf.len() as u64) < meta.len())
}

/// Interprets the leading bytes of a file. `more` tells whether the file
/// continues past `buf`.
pub fn preview_bytes(buf: &[u8], more: bool) -> Preview {
    if buf.contains(&0) {
        return Preview::Binary;
    }

    let text = String::from_utf8_lossy(buf);
    let mut lines: Vec<String> = text.lines().map(sanitize_line).collect();
    let truncated = lines.len() > PREVIEW_MAX_LINES || more;
    lines.truncate(PREVIEW_MAX_LINES);

    Preview::Text { lines, truncated }
}

fn preview_directory(path: &Path) -> Preview {
    match browse_dir(path) {
        Ok(names) => {
            let total = names.len();
            let entries = names
                .iter()
                .take(PREVIEW_DIR_ENTRIES)
                .map(|n| {
                    let is_dir = path.join(n).is_dir();
                    (n.to_string_lossy().into_owned(), is_dir)
                })
                .collect();
            Preview::Directory {
                total,
                entries,
                truncated: total > PREVIEW_DIR_ENTRIES,
            }
        }
        Err(_) => Preview::Error("Error reading directory".into()),
    }
}
