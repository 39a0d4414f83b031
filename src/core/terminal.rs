//! Terminal setup and event loop for navi.
//!
//! Handles raw mode and the alternate screen through [TerminalGuard], decodes crossterm
//! events into [Key]s and drives the render, read, dispatch cycle.

use crate::app::{Key, KeypressResult, LaunchRequest, Session};
use crate::ui;
use crate::utils::open_external;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;
use std::process::ExitStatus;
use std::time::Instant;

/// Raw mode, alternate screen and hidden cursor for as long as the guard lives.
///
/// Dropping the guard restores all three, on quit, on error returns and during unwinding.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// One input event relevant to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(Key),
    /// The terminal changed size; only a redraw is needed.
    Resize,
}

/// Blocking source of input events.
pub trait KeySource {
    /// Blocks until the next event. An error ends the session.
    fn read_key(&mut self) -> io::Result<TermEvent>;
}

/// [KeySource] reading from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<TermEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(key) = decode_key(key) {
                        return Ok(TermEvent::Key(key));
                    }
                }
                Event::Resize(_, _) => return Ok(TermEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Maps a crossterm key event to a [Key]. Releases and repeats are dropped,
/// Ctrl/Alt chords become [Key::Other].
pub fn decode_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Some(Key::Other);
    }

    Some(match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    })
}

/// Initializes the terminal and runs the main event loop until quit.
///
/// Returns an std::io::Error if terminal setup fails or drawing fails.
pub fn run_terminal(session: &mut Session) -> io::Result<()> {
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut keys = CrosstermKeys;

    event_loop(&mut terminal, session, &mut keys, |req| {
        open_external(req.program(), req.path())
    })
}

/// Main event loop of navi: draws the UI, blocks for one event and dispatches it.
///
/// `launch` runs the opener for a [LaunchRequest]; the terminal is fully redrawn
/// afterwards. Returns on quit or when reading input fails.
pub fn event_loop<B, K, L>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    keys: &mut K,
    mut launch: L,
) -> io::Result<()>
where
    B: Backend,
    K: KeySource,
    L: FnMut(&LaunchRequest) -> io::Result<ExitStatus>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    loop {
        terminal
            .draw(|f| ui::render(f, session, Instant::now()))
            .map_err(backend_error)?;

        let event = match keys.read_key() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("reading input failed, ending session: {}", e);
                break;
            }
        };

        let TermEvent::Key(key) = event else {
            continue;
        };

        match session.handle_key(key) {
            KeypressResult::Continue => {}
            KeypressResult::Quit => {
                log::info!("quit");
                break;
            }
            KeypressResult::Launch(request) => {
                let result = launch(&request);
                session.finish_launch(&request, result);
                terminal.clear().map_err(backend_error)?;
            }
        }
    }
    Ok(())
}

/// Converts a backend error into an [io::Error], passing io errors through unchanged.
fn backend_error<E: Into<Box<dyn std::error::Error + Send + Sync>>>(e: E) -> io::Error {
    match e.into().downcast::<io::Error>() {
        Ok(e) => *e,
        Err(e) => io::Error::other(e),
    }
}
