//! Theme configuration options for navi
//!
//! This module defines the theme configuration options which are read from the `[theme]`
//! table of navi.toml. Colors accept names ("cyan"), hex codes ("#RRGGBB", "#RGB")
//! or 256-color palette indices ("236").
//!
//! # Examples
//! ```toml
//! [theme]
//! header = { fg = "white", bg = "#005f87" }
//! selection.bg = "236"
//! ```

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Theme {
    header: ColorPair,
    status: ColorPair,
    selection: ColorPair,
    directory: ColorPair,
    file: ColorPair,
    name: ColorPair,
    size: ColorPair,
    date: ColorPair,
    footer: ColorPair,
    prompt: ColorPair,
    prompt_border: ColorPair,
    preview: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        let white = Color::Indexed(252);
        let blue = Color::Indexed(39);
        let green = Color::Indexed(114);
        let yellow = Color::Indexed(221);
        let dark = Color::Indexed(236);

        Theme {
            header: ColorPair::new(white, Color::Indexed(24)),
            status: ColorPair::new(yellow, dark),
            selection: ColorPair::new(blue, dark),
            directory: ColorPair::fg(yellow),
            file: ColorPair::fg(blue),
            name: ColorPair::fg(white),
            size: ColorPair::fg(green),
            date: ColorPair::fg(yellow),
            footer: ColorPair::new(white, Color::Indexed(237)),
            prompt: ColorPair::new(white, dark),
            prompt_border: ColorPair::new(blue, dark),
            preview: ColorPair::new(white, dark),
        }
    }
}

impl Theme {
    pub fn header_style(&self) -> Style {
        self.header.style().add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        self.status.style().add_modifier(Modifier::BOLD)
    }

    /// Background/foreground applied on top of the cursor row.
    pub fn selection_style(&self) -> Style {
        self.selection.style()
    }

    pub fn directory_style(&self) -> Style {
        self.directory.style()
    }

    pub fn file_style(&self) -> Style {
        self.file.style()
    }

    pub fn name_style(&self) -> Style {
        self.name.style()
    }

    pub fn size_style(&self) -> Style {
        self.size.style()
    }

    pub fn date_style(&self) -> Style {
        self.date.style()
    }

    pub fn footer_style(&self) -> Style {
        self.footer.style().add_modifier(Modifier::BOLD)
    }

    pub fn prompt_style(&self) -> Style {
        self.prompt.style().add_modifier(Modifier::BOLD)
    }

    pub fn prompt_border_style(&self) -> Style {
        self.prompt_border.style().add_modifier(Modifier::BOLD)
    }

    pub fn preview_style(&self) -> Style {
        self.preview.style()
    }
}

/// Foreground/background pair. `Color::Reset` means "terminal default".
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default = "reset", deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default = "reset", deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Reset,
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

fn reset() -> Color {
    Color::Reset
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
