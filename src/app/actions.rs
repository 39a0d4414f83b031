//! Action context and input mode logic for navi.
//!
//! Contains the [ActionContext] struct, tracking the modal text input and the clipboard.
//! A modal prompt remembers what to do with the typed text as a [PendingInput] value
//! instead of a stored closure; the session dispatches on it when the prompt is submitted.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Describes the current mode for action handling/input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionMode {
    Normal,
    Input {
        pending: PendingInput,
        prompt: &'static str,
    },
}

/// Follow-up operation for a modal prompt, run with the submitted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingInput {
    CreateFile,
    CreateFolder,
    /// Rename the entry with this name in the current directory.
    RenameFrom(OsString),
}

impl PendingInput {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingInput::CreateFile => "Enter new file name: ",
            PendingInput::CreateFolder => "Enter new folder name: ",
            PendingInput::RenameFrom(_) => "Enter new name: ",
        }
    }
}

/// Whether a paste copies the clipboard source or moves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Move,
}

/// Single-slot clipboard: one absolute source path plus its paste mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    path: PathBuf,
    mode: ClipboardMode,
}

impl Clipboard {
    pub fn new(path: PathBuf, mode: ClipboardMode) -> Self {
        Self { path, mode }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }
}

/// Tracks current user action and input buffer state for file operations.
///
/// Holds the modal input mode with its prompt, the text typed so far, and the clipboard.
#[derive(Debug)]
pub struct ActionContext {
    mode: ActionMode,
    input_buffer: String,
    clipboard: Option<Clipboard>,
}

impl ActionContext {
    // Getters / accessors

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match &self.mode {
            ActionMode::Input { prompt, .. } => Some(*prompt),
            ActionMode::Normal => None,
        }
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    // Mode functions

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, ActionMode::Input { .. })
    }

    /// Enters modal input with an empty buffer.
    pub fn enter_input(&mut self, pending: PendingInput) {
        let prompt = pending.prompt();
        self.mode = ActionMode::Input { pending, prompt };
        self.input_buffer.clear();
    }

    /// Leaves modal input, dropping the prompt, the buffer and the pending action.
    pub fn exit_mode(&mut self) {
        self.mode = ActionMode::Normal;
        self.input_buffer.clear();
    }

    /// Ends modal input and hands back what was typed together with the pending action.
    pub fn take_submission(&mut self) -> Option<(PendingInput, String)> {
        let mode = std::mem::replace(&mut self.mode, ActionMode::Normal);
        let text = std::mem::take(&mut self.input_buffer);
        match mode {
            ActionMode::Input { pending, .. } => Some((pending, text)),
            ActionMode::Normal => None,
        }
    }

    // Input buffer functions

    /// Appends a character. Only printable ASCII is accepted; returns whether it was.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch == ' ' || ch.is_ascii_graphic() {
            self.input_buffer.push(ch);
            true
        } else {
            false
        }
    }

    /// Drops the last character, if any.
    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    // Clipboard functions

    pub fn set_clipboard(&mut self, path: PathBuf, mode: ClipboardMode) {
        self.clipboard = Some(Clipboard::new(path, mode));
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard = None;
    }
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            mode: ActionMode::Normal,
            input_buffer: String::new(),
            clipboard: None,
        }
    }
}
