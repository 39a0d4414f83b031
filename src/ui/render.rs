//! UI renderer implementation.
//!
//! Contains the top-level [render] entry point used by the terminal loop and the
//! layout helper that splits the screen into header, status, list and bottom areas.
//!
//! Rendering only reads the [Session]. Entry metadata is stat'ed again on every frame
//! for every visible row, so the cost of a frame grows with the length of the listing.

use crate::app::Session;
use crate::core::fm::{self, Entry, EntryMeta};
use crate::core::formatter::{
    format_entry_size, format_file_time, load_preview, sanitize_to_exact_width,
};
use crate::ui::{icons, widgets};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use std::path::Path;
use std::time::Instant;

/// Height of the preview pane: title, up to ten lines and the truncation marker.
pub const PREVIEW_HEIGHT: u16 = 12;

/// Screen areas of one frame. Optional parts are `None` when not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub status: Option<Rect>,
    pub list: Rect,
    pub prompt: Option<Rect>,
    pub preview: Option<Rect>,
    pub help: Option<Rect>,
    pub metadata: Option<Rect>,
}

/// Splits `area` for the given session state.
pub fn layout_areas(area: Rect, session: &Session, now: Instant) -> ScreenAreas {
    let general = session.config().general();
    let has_status = session.status_at(now).is_some();
    let input_mode = session.actions().is_input_mode();
    let show_preview = !input_mode && general.preview_support() && session.is_preview_enabled();
    let help_height: u16 = if general.preview_support() { 3 } else { 2 };

    let mut constraints = vec![Constraint::Length(1)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(1));
    if input_mode {
        constraints.push(Constraint::Length(widgets::PROMPT_HEIGHT));
    } else {
        if show_preview {
            constraints.push(Constraint::Length(PREVIEW_HEIGHT));
        }
        constraints.push(Constraint::Length(help_height));
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::vertical(constraints).split(area);
    let mut it = chunks.iter().copied();
    let mut next = || it.next().unwrap_or_default();

    let header = next();
    let status = has_status.then(&mut next);
    let list = next();

    if input_mode {
        ScreenAreas {
            header,
            status,
            list,
            prompt: Some(next()),
            preview: None,
            help: None,
            metadata: None,
        }
    } else {
        let preview = show_preview.then(&mut next);
        let help = Some(next());
        let metadata = Some(next());
        ScreenAreas {
            header,
            status,
            list,
            prompt: None,
            preview,
            help,
            metadata,
        }
    }
}

/// Render function which draws the entire terminal UI for navi on each frame.
pub fn render(frame: &mut Frame, session: &Session, now: Instant) {
    let areas = layout_areas(frame.area(), session, now);
    let config = session.config();
    let theme = config.theme();
    let icons_on = config.general().icons();

    // Header
    let header = if icons_on {
        format!(" {}  Path: {}", icons::PATH, session.current_dir().display())
    } else {
        format!(" Path: {}", session.current_dir().display())
    };
    frame.render_widget(
        Paragraph::new(header).style(theme.header_style()),
        areas.header,
    );

    // Status
    if let (Some(area), Some(msg)) = (areas.status, session.status_at(now)) {
        frame.render_widget(
            Paragraph::new(format!(" {}", msg)).style(theme.status_style()),
            area,
        );
    }

    // Entry list
    let metas: Vec<Option<EntryMeta>> = session
        .entries()
        .iter()
        .map(|e| entry_meta(session, e))
        .collect();
    let items: Vec<ListItem> = session
        .entries()
        .iter()
        .zip(&metas)
        .enumerate()
        .map(|(idx, (entry, meta))| {
            ListItem::new(entry_line(session, entry, *meta, idx == session.cursor()))
        })
        .collect();

    let list = List::new(items).highlight_style(theme.selection_style());
    let mut state = ListState::default().with_selected(Some(session.cursor()));
    frame.render_stateful_widget(list, areas.list, &mut state);

    // Bottom
    if let Some(area) = areas.prompt {
        let prompt = session.actions().prompt().unwrap_or_default();
        widgets::draw_prompt(frame, area, prompt, session.actions().input_buffer(), theme);
        return;
    }

    if let Some(area) = areas.preview
        && let Some(entry) = session.selected_entry()
    {
        let target = match entry {
            Entry::Named(name) => Some(session.current_dir().join(name)),
            Entry::Parent => Some(parent_or_self(session.current_dir()).to_path_buf()),
            Entry::Unreadable(_) => None,
        };
        if let Some(target) = target {
            let preview = load_preview(&target);
            widgets::draw_preview(frame, area, &preview, theme, icons_on);
        }
    }

    if let Some(area) = areas.help {
        let rows = widgets::help_rows(config.general().preview_support(), icons_on);
        widgets::draw_help(frame, area, &rows, theme.footer_style());
    }

    if let Some(area) = areas.metadata
        && let Some(entry) = session.selected_entry()
    {
        let meta = metas.get(session.cursor()).copied().flatten();
        let line = widgets::metadata_line(entry, meta, icons_on);
        widgets::draw_metadata(frame, area, &line, theme);
    }
}

fn entry_meta(session: &Session, entry: &Entry) -> Option<EntryMeta> {
    match entry {
        Entry::Named(name) => fm::stat(&session.current_dir().join(name)).ok(),
        Entry::Parent => fm::stat(parent_or_self(session.current_dir())).ok(),
        Entry::Unreadable(_) => None,
    }
}

/// Target of the `../` row. The root is its own parent.
fn parent_or_self(dir: &Path) -> &Path {
    dir.parent().unwrap_or(dir)
}

/// One listing row: cursor marker, icon, padded name, size and date.
fn entry_line(
    session: &Session,
    entry: &Entry,
    meta: Option<EntryMeta>,
    selected: bool,
) -> Line<'static> {
    let config = session.config();
    let theme = config.theme();
    let icons_on = config.general().icons();
    let width = config.general().name_width();

    let marker = if selected { "-> " } else { "   " };
    let name = sanitize_to_exact_width(&entry.display_name(), width);

    let Some(meta) = meta else {
        let reason = match entry {
            Entry::Unreadable(reason) => reason.clone(),
            _ => "error".to_string(),
        };
        return Line::from(vec![
            Span::raw(marker),
            Span::styled(name, theme.name_style()),
            Span::raw("  "),
            Span::styled(reason, theme.status_style()),
        ]);
    };

    let icon_style = if meta.is_dir() {
        theme.directory_style()
    } else {
        theme.file_style()
    };

    let mut spans = vec![Span::raw(marker)];
    if icons_on {
        let icon = match entry {
            Entry::Named(n) => icons::entry_icon(&n.to_string_lossy(), meta.is_dir()),
            _ => icons::FOLDER,
        };
        spans.push(Span::styled(format!("{} ", icon), icon_style));
    }
    spans.push(Span::styled(name, theme.name_style()));

    let (size_ic, clock_ic) = if icons_on {
        (format!("{} ", icons::SIZE), format!("{} ", icons::CLOCK))
    } else {
        (String::new(), String::new())
    };
    spans.push(Span::styled(
        format!(
            "    {}{:>10}",
            size_ic,
            format_entry_size(meta.size(), meta.is_dir())
        ),
        theme.size_style(),
    ));
    spans.push(Span::styled(
        format!("    {}{}", clock_ic, format_file_time(meta.modified())),
        theme.date_style(),
    ));

    Line::from(spans)
}
