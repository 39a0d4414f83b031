//! Session state and main controller module for navi.
//!
//! This module defines the [Session] struct, which owns everything the interactive loop
//! mutates between two renders:
//! - The browsed directory, its entries and the cursor into them
//! - The transient status message
//! - Modal input and clipboard state (see [ActionContext])
//! - The pending delete confirmation
//! - Whether the preview pane is shown
//!
//! Time never comes from inside the session: [Session::handle_key_at] and [Session::status_at]
//! take the current [Instant], which keeps every expiry window testable with a fake clock.

use crate::app::actions::ActionContext;
use crate::app::keymap::{Action, FileAction, Key, Keymap};
use crate::config::Config;
use crate::core::fm::{Entry, list_entries};

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Instant;

/// Result of processing a single keypress.
#[derive(Debug, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
    /// The terminal must be handed to an external program before the session continues.
    Launch(LaunchRequest),
}

/// An opener invocation requested by the session, carried out by the terminal loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    program: PathBuf,
    path: PathBuf,
}

impl LaunchRequest {
    pub fn new(program: PathBuf, path: PathBuf) -> Self {
        Self { program, path }
    }

    #[inline]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Main struct holding the state of a browsing session.
///
/// Created once at startup, mutated in place by key events and discarded at exit.
pub struct Session<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) current_dir: PathBuf,
    pub(super) entries: Vec<Entry>,
    pub(super) cursor: usize,

    pub(super) status: Option<(String, Instant)>,
    pub(super) actions: ActionContext,
    pub(super) delete_armed: Option<Instant>,
    pub(super) preview_enabled: bool,
}

impl<'a> Session<'a> {
    /// Starts a session in the process working directory.
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::from_dir(config, &current_dir)
    }

    /// Starts a session in `initial_path`, or in the working directory if that is not a directory.
    pub fn from_dir(config: &'a Config, initial_path: &Path) -> io::Result<Self> {
        let current_dir = if initial_path.is_dir() {
            initial_path.to_path_buf()
        } else {
            std::env::current_dir()?
        };

        let mut session = Self {
            config,
            keymap: Keymap::new(config.general().preview_support()),
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            status: None,
            actions: ActionContext::default(),
            delete_armed: None,
            preview_enabled: config.general().preview_support()
                && config.general().preview_on_start(),
        };
        session.reload(None);
        log::info!("session started in {}", session.current_dir.display());
        Ok(session)
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn actions(&self) -> &ActionContext {
        &self.actions
    }

    #[inline]
    pub fn is_preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    #[inline]
    pub fn is_delete_armed(&self) -> bool {
        self.delete_armed.is_some()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Full path of the selected entry, if it names a real child.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .and_then(Entry::name)
            .map(|name| self.current_dir.join(name))
    }

    /// The status message, if one is set and still inside its display window at `now`.
    pub fn status_at(&self, now: Instant) -> Option<&str> {
        let (msg, set_at) = self.status.as_ref()?;
        if now.saturating_duration_since(*set_at) < self.config.general().status_timeout() {
            Some(msg)
        } else {
            None
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status_at(Instant::now())
    }

    // Key handling

    /// Central key handler, using the wall clock.
    pub fn handle_key(&mut self, key: Key) -> KeypressResult {
        self.handle_key_at(key, Instant::now())
    }

    /// Central key handler with an explicit clock.
    ///
    /// Modal input swallows every key. Otherwise any key other than delete disarms a
    /// pending delete before the key's own action runs.
    pub fn handle_key_at(&mut self, key: Key, now: Instant) -> KeypressResult {
        if self.actions.is_input_mode() {
            return self.handle_input_mode(key, now);
        }

        let action = self.keymap.lookup(key);
        if action != Some(Action::File(FileAction::Delete)) && self.delete_armed.take().is_some() {
            log::debug!("pending delete disarmed by {:?}", key);
        }

        match action {
            Some(Action::Nav(nav_act)) => self.handle_nav_action(nav_act, now),
            Some(Action::File(file_act)) => self.handle_file_action(file_act, now),
            Some(Action::System(sys_act)) => self.handle_sys_action(sys_act, now),
            None => KeypressResult::Continue,
        }
    }

    /// Reports the outcome of a [LaunchRequest] once the terminal is back.
    pub fn finish_launch(&mut self, request: &LaunchRequest, result: io::Result<ExitStatus>) {
        let name = request
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let now = Instant::now();

        match result {
            Ok(status) if status.success() => {
                log::info!("opened {}", request.path().display());
                self.set_status(format!("Opened: {}", name), now);
            }
            Ok(status) => {
                log::warn!("opener exited with {} for {}", status, request.path().display());
                self.set_status(format!("Error opening file: opener exited with {}", status), now);
            }
            Err(e) => {
                log::warn!("failed to run opener: {}", e);
                self.set_status(format!("Error opening file: {}", e), now);
            }
        }
        self.reload(request.path().file_name());
    }

    // Internal state helpers

    pub(super) fn set_status(&mut self, msg: impl Into<String>, now: Instant) {
        self.status = Some((msg.into(), now));
    }

    /// Re-reads the current directory. The cursor lands on `focus` if it is listed,
    /// otherwise it keeps its index, clamped to the new length.
    pub(super) fn reload(&mut self, focus: Option<&OsStr>) {
        self.entries = list_entries(&self.current_dir);
        if let Some(focus) = focus
            && let Some(idx) = self.entries.iter().position(|e| e.name() == Some(focus))
        {
            self.cursor = idx;
        }
        self.clamp_cursor();
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }
}
