//! Nerd Font icons for navi.
//!
//! Entry icons are picked from static maps keyed by special directory name, special
//! file name and then extension. The remaining constants decorate the header, the
//! listing columns and the help footer.

use phf::phf_map;

pub const FILE: &str = "\u{f15b}";
pub const FOLDER: &str = "\u{f07b}";
pub const PATH: &str = "\u{f07c}";
pub const CLOCK: &str = "\u{f017}";
pub const SIZE: &str = "\u{f0c7}";
pub const NAV: &str = "\u{f0dc}";
pub const QUIT: &str = "\u{f011}";
pub const COPY: &str = "\u{f0c5}";
pub const CUT: &str = "\u{f0c4}";
pub const PASTE: &str = "\u{f0ea}";
pub const PREVIEW: &str = "\u{f06e}";
pub const RENAME: &str = "\u{f044}";
pub const TRASH: &str = "\u{f1f8}";

/// File extension to icon mapping.
/// For example, "rs" maps to the Rust icon.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "ts" => "\u{e628}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "sh" => "\u{e795}",
    "go" => "\u{e627}",
    "java" => "\u{e738}",
    "c" => "\u{e61e}",
    "cpp" => "\u{e61d}",
    "h" => "\u{f0fd}",
    "php" => "\u{e73d}",
    "rb" => "\u{e791}",
    "swift" => "\u{e755}",
    "kt" => "\u{e634}",
    "lua" => "\u{e620}",
    "vue" => "\u{e6a0}",
    "sql" => "\u{e706}",
    "toml" => "\u{e615}",
    "yml" => "\u{e615}",
    "yaml" => "\u{e615}",
    "ini" => "\u{e615}",
    "cfg" => "\u{e615}",
    "lock" => "\u{f023}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "mp3" => "\u{f001}",
    "mp4" => "\u{f008}",
    "png" => "\u{f03e}",
    "jpg" => "\u{f03e}",
    "jpeg" => "\u{f03e}",
    "gif" => "\u{f03e}",
    "svg" => "\u{f03e}",
    "pdf" => "\u{f1c1}",
    "doc" => "\u{f1c2}",
    "docx" => "\u{f1c2}",
    "xls" => "\u{f1c3}",
    "xlsx" => "\u{f1c3}",
    "ppt" => "\u{f1c4}",
    "pptx" => "\u{f1c4}",
    "txt" => "\u{f15c}",
    "log" => "\u{f18d}",
    "diff" => "\u{e728}",
    "patch" => "\u{e728}",
};

/// Special file names.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "Cargo.toml" => "\u{e7a8}",
    "Cargo.lock" => "\u{f023}",
    "Makefile" => "\u{e779}",
    "Dockerfile" => "\u{f308}",
    "README" => "\u{f48a}",
    "README.md" => "\u{f48a}",
    "LICENSE" => "\u{f0e3}",
    ".gitignore" => "\u{e702}",
    "package.json" => "\u{e71e}",
    ".env" => "\u{f462}",
};

/// Special directory names.
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".git" => "\u{e5fb}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "node_modules" => "\u{e5fa}",
};

/// Icon for an entry named `name`.
///
/// Lookups are exact first and then lowercase, so `README.MD` still gets the markdown icon.
pub fn entry_icon(name: &str, is_dir: bool) -> &'static str {
    if is_dir {
        return lookup(&SPECIAL_DIR_ICON_MAP, name).unwrap_or(FOLDER);
    }

    if let Some(icon) = lookup(&SPECIAL_FILE_ICON_MAP, name) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
        && let Some(icon) = lookup(&EXT_ICON_MAP, &name[dot_idx + 1..])
    {
        return icon;
    }
    FILE
}

fn lookup(map: &phf::Map<&'static str, &'static str>, key: &str) -> Option<&'static str> {
    map.get(key)
        .or_else(|| map.get(key.to_lowercase().as_str()))
        .copied()
}
