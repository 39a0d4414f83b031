//! Helpers for navi.
//!
//! - Color parsing from names, hex codes or palette indices
//! - Generating unused filenames so a paste never clobbers an existing entry
//! - Keeping names typed at the prompt inside the browsed directory
//! - Handing the terminal over to an external program and taking it back

use ratatui::style::Color;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Parses a string (color name, hex or 256-color index) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.), hex values (#RRGGBB or #RGB)
/// and palette indices ("0".."255"). Anything else falls back to `Color::Reset`.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        other => {
            if let Ok(idx) = other.parse::<u8>() {
                return Color::Indexed(idx);
            }
            if let Some(color) = other.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            Color::Reset
        }
    }
}

/// Finds the next available filename by appending _1, _2, etc. if the target exists
///
/// Example: "notes.txt" -> "notes_1.txt"
pub fn get_unused_path(path: &Path) -> PathBuf {
    if path.symlink_metadata().is_err() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path.file_name().unwrap_or_default();

    let stem = Path::new(name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let ext = Path::new(name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let target = parent.join(format!("{}_{}{}", stem, counter, ext));
        if target.symlink_metadata().is_err() {
            return target;
        }
        counter += 1;
    }
}

/// Joins a typed name onto `dir`, dropping any root or drive prefix so the result
/// never starts outside `dir`. Returns `None` if nothing is left of the name.
///
/// Example: "/tmp/x.txt" under "/home/me" -> "/home/me/tmp/x.txt"
pub fn join_under(dir: &Path, name: &str) -> Option<PathBuf> {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(dir.join(relative))
    }
}

/// Runs `program` with `path` as its only argument, handing it the terminal.
///
/// Raw mode and the alternate screen are released while the program runs and
/// restored once it exits, even if it could not be started.
pub fn open_external(program: &Path, path: &Path) -> io::Result<ExitStatus> {
    use crossterm::{
        cursor::{Hide, Show},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    };

    suspended(
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)
        },
        || Command::new(program).arg(path).status(),
        || {
            let screen = execute!(io::stdout(), EnterAlternateScreen, Hide);
            let raw = enable_raw_mode();
            screen.and(raw)
        },
    )
}

/// Runs `run` between `release` and `reclaim`.
///
/// `reclaim` always runs, whichever step failed. `run` is skipped if `release`
/// failed. The first error wins.
fn suspended<T>(
    release: impl FnOnce() -> io::Result<()>,
    run: impl FnOnce() -> io::Result<T>,
    reclaim: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = release().and_then(|()| run());
    let reclaimed = reclaim();
    let value = result?;
    reclaimed?;
    Ok(value)
}
