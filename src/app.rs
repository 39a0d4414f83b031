//! Application state for navi.
//!
//! - [state]: the [Session] owning the browse path, entries, cursor and status message.
//! - [handlers]: key handling and the file operations behind each binding.
//! - [actions]: modal input prompt and clipboard.
//! - [keymap]: decoded keys and the fixed key bindings.

pub mod actions;
pub mod handlers;
pub mod keymap;
pub mod state;

pub use actions::{ActionContext, ActionMode, Clipboard, ClipboardMode, PendingInput};
pub use keymap::{Action, FileAction, Key, Keymap, NavAction, SystemAction};
pub use state::{KeypressResult, LaunchRequest, Session};
