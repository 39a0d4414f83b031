//! Widgets drawn below the entry list: the modal prompt, the preview pane,
//! the key binding footer and the selected-entry metadata line.

use crate::config::Theme;
use crate::core::fm::{Entry, EntryMeta};
use crate::core::formatter::{Preview, TRUNCATION_MARKER, format_entry_size, format_file_time};
use crate::ui::icons;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// Height of the bordered prompt bar.
pub const PROMPT_HEIGHT: u16 = 3;

/// Draws the bordered modal prompt with the live input buffer.
pub fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &str, buffer: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(theme.prompt_border_style())
        .style(theme.prompt_style());

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(prompt.to_string()),
        Span::raw(buffer.to_string()),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Lines making up a preview, without the title.
pub fn preview_lines(preview: &Preview, icons_on: bool) -> Vec<Line<'static>> {
    match preview {
        Preview::Directory {
            total,
            entries,
            truncated,
        } => {
            let mut lines = vec![Line::from(format!("Directory: {} items", total))];
            lines.extend(entries.iter().map(|(name, is_dir)| {
                if icons_on {
                    let icon = if *is_dir { icons::FOLDER } else { icons::FILE };
                    Line::from(format!("{} {}", icon, name))
                } else {
                    Line::from(name.clone())
                }
            }));
            if *truncated {
                lines.push(Line::from(TRUNCATION_MARKER));
            }
            lines
        }
        Preview::Text { lines, truncated } => {
            let mut out: Vec<Line> = lines.iter().map(|l| Line::from(l.clone())).collect();
            if *truncated {
                out.push(Line::from(TRUNCATION_MARKER));
            }
            out
        }
        Preview::Binary => vec![Line::from("Binary file")],
        Preview::TooLarge => vec![Line::from("File too large to preview")],
        Preview::Error(msg) => vec![Line::from(msg.clone())],
    }
}

pub fn draw_preview(
    frame: &mut Frame,
    area: Rect,
    preview: &Preview,
    theme: &Theme,
    icons_on: bool,
) {
    let title = if icons_on {
        format!(" {} Preview ", icons::PREVIEW)
    } else {
        " Preview ".to_string()
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .title(title)
        .border_style(theme.prompt_border_style())
        .style(theme.preview_style());

    let text = Text::from(preview_lines(preview, icons_on));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Rows of the key binding footer. The preview row only exists with preview support.
pub fn help_rows(preview_support: bool, icons_on: bool) -> Vec<String> {
    let ic = |icon: &'static str| if icons_on { icon } else { "" };

    let mut rows = vec![
        format!(
            " {} \u{2191}/\u{2193}: Navigate  {} Enter: Open  {} n: New File  {} N: New Folder",
            ic(icons::NAV),
            ic(icons::FOLDER),
            ic(icons::FILE),
            ic(icons::FOLDER)
        ),
        format!(
            " {} r: Rename  {} c: Copy  {} x: Cut  {} v: Paste  {} d: Delete",
            ic(icons::RENAME),
            ic(icons::COPY),
            ic(icons::CUT),
            ic(icons::PASTE),
            ic(icons::TRASH)
        ),
    ];

    if preview_support {
        rows.push(format!(
            " {} w: Set PWD  {} o: Open (default)  {} p: Toggle Preview  {} q: Quit",
            ic(icons::PATH),
            ic(icons::FILE),
            ic(icons::PREVIEW),
            ic(icons::QUIT)
        ));
    } else {
        // The second row absorbs the rest without preview support.
        if let Some(second) = rows.last_mut() {
            second.push_str(&format!(
                "  {} w: Set PWD  {} o: Open  {} q: Quit",
                ic(icons::PATH),
                ic(icons::FILE),
                ic(icons::QUIT)
            ));
        }
    }
    rows
}

pub fn draw_help(frame: &mut Frame, area: Rect, rows: &[String], style: Style) {
    let text = Text::from(rows.iter().map(|r| Line::from(r.clone())).collect::<Vec<_>>());
    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Metadata line for the selected entry. Empty when it cannot be stat'ed.
pub fn metadata_line(entry: &Entry, meta: Option<EntryMeta>, icons_on: bool) -> String {
    let Some(meta) = meta else {
        return String::new();
    };
    let (size_ic, clock_ic) = if icons_on {
        (icons::SIZE, icons::CLOCK)
    } else {
        ("", "")
    };
    format!(
        " File: {}    {} Size: {}    {} Modified: {}",
        entry.display_name(),
        size_ic,
        format_entry_size(meta.size(), meta.is_dir()),
        clock_ic,
        format_file_time(meta.modified())
    )
}

pub fn draw_metadata(frame: &mut Frame, area: Rect, line: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(line.to_string()).style(theme.footer_style()),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_has_three_rows_with_preview_support() {
        let rows = help_rows(true, false);
        assert_eq!(rows.len(), 3);
        assert!(rows[2].contains("p: Toggle Preview"));

        let rows = help_rows(false, false);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.contains("p: Toggle Preview")));
        assert!(rows[1].contains("q: Quit"));
    }

    #[test]
    fn truncated_text_preview_ends_with_marker() {
        let preview = Preview::Text {
            lines: (1..=10).map(|i| format!("line {}", i)).collect(),
            truncated: true,
        };
        let lines = preview_lines(&preview, false);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], Line::from(TRUNCATION_MARKER));
    }

    #[test]
    fn directory_preview_counts_items() {
        let preview = Preview::Directory {
            total: 2,
            entries: vec![("a".into(), false), ("b".into(), true)],
            truncated: false,
        };
        let lines = preview_lines(&preview, false);
        assert_eq!(lines[0], Line::from("Directory: 2 items"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn metadata_needs_a_stat() {
        assert_eq!(metadata_line(&Entry::Parent, None, true), "");
    }
}
