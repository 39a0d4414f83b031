//! Input action handler methods for navi.
//!
//! This module implements [Session] methods that process key events, file/nav actions,
//! and the modal input prompt (new file, new folder, rename).
//!
//! No filesystem failure escapes from here: every error becomes a status message.

use crate::app::actions::{ClipboardMode, PendingInput};
use crate::app::keymap::{FileAction, Key, NavAction, SystemAction};
use crate::app::state::{KeypressResult, LaunchRequest, Session};
use crate::core::error::FsError;
use crate::core::fm::{self, Entry};
use crate::utils::{get_unused_path, join_under};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Session input and action handlers
impl<'a> Session<'a> {
    // Session core handlers

    /// Handles key events while the modal prompt is open.
    ///
    /// Every key is consumed. Printable ASCII is appended, Backspace erases, Escape cancels
    /// and Enter submits the buffer to the pending operation.
    pub(super) fn handle_input_mode(&mut self, key: Key, now: Instant) -> KeypressResult {
        match key {
            Key::Enter => {
                if self.actions.input_buffer().is_empty() {
                    self.actions.exit_mode();
                    self.set_status("Operation cancelled", now);
                } else if let Some((pending, text)) = self.actions.take_submission() {
                    self.submit_input(pending, &text, now);
                }
            }
            Key::Esc => self.actions.exit_mode(),
            Key::Backspace => self.actions.backspace(),
            Key::Char(c) => {
                self.actions.push_char(c);
            }
            Key::Up | Key::Down | Key::Other => {}
        }
        KeypressResult::Continue
    }

    /// Handles navigation actions (up, down, into dir).
    pub(super) fn handle_nav_action(&mut self, action: NavAction, now: Instant) -> KeypressResult {
        match action {
            NavAction::GoUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            NavAction::GoDown => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
            }
            NavAction::GoIntoDir => match self.selected_entry() {
                Some(Entry::Parent | Entry::Unreadable(_)) => self.go_parent(now),
                Some(Entry::Named(_)) => {
                    if let Some(path) = self.selected_path()
                        && path.is_dir()
                    {
                        self.go_into(path, now);
                    }
                }
                None => {}
            },
        }
        KeypressResult::Continue
    }

    /// Handles file actions (open, copy, paste, delete, etc).
    pub(super) fn handle_file_action(&mut self, action: FileAction, now: Instant) -> KeypressResult {
        match action {
            FileAction::Open => return self.handle_open(now),
            FileAction::CreateFile => self.actions.enter_input(PendingInput::CreateFile),
            FileAction::CreateFolder => self.actions.enter_input(PendingInput::CreateFolder),
            FileAction::Rename => {
                if let Some(name) = self.selected_name_or_refuse("rename", now) {
                    self.actions.enter_input(PendingInput::RenameFrom(name));
                }
            }
            FileAction::Copy => self.handle_clipboard_store(ClipboardMode::Copy, now),
            FileAction::Cut => self.handle_clipboard_store(ClipboardMode::Move, now),
            FileAction::Paste => self.handle_paste(now),
            FileAction::SetWorkDir => self.handle_set_work_dir(now),
            FileAction::Delete => self.handle_delete(now),
        }
        KeypressResult::Continue
    }

    /// Handles system actions (toggle preview, quit).
    pub(super) fn handle_sys_action(&mut self, action: SystemAction, now: Instant) -> KeypressResult {
        match action {
            SystemAction::TogglePreview => {
                self.preview_enabled = !self.preview_enabled;
                let msg = if self.preview_enabled {
                    "Preview enabled"
                } else {
                    "Preview disabled"
                };
                self.set_status(msg, now);
                KeypressResult::Continue
            }
            SystemAction::Quit => KeypressResult::Quit,
        }
    }

    // Navigation helpers

    /// Moves into `path` with the cursor on the first entry.
    /// Refused with a status if the directory cannot be listed.
    fn go_into(&mut self, path: PathBuf, now: Instant) {
        if let Err(e) = fs::read_dir(&path) {
            log::warn!("cannot enter {}: {}", path.display(), e);
            self.set_status(format!("Cannot open {}: {}", path.display(), e), now);
            return;
        }
        log::debug!("entering {}", path.display());
        self.current_dir = path;
        self.cursor = 0;
        self.reload(None);
    }

    /// Moves to the parent directory and puts the cursor on the directory just left.
    fn go_parent(&mut self, now: Instant) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        if let Err(e) = fs::read_dir(&parent) {
            log::warn!("cannot enter {}: {}", parent.display(), e);
            self.set_status(format!("Cannot open {}: {}", parent.display(), e), now);
            return;
        }

        let left: Option<OsString> = self.current_dir.file_name().map(OsStr::to_os_string);
        log::debug!("leaving {} for {}", self.current_dir.display(), parent.display());
        self.current_dir = parent;
        self.cursor = 0;
        self.reload(left.as_deref());
    }

    /// Opens the selected entry. Directories are entered, files are handed to the opener.
    fn handle_open(&mut self, now: Instant) -> KeypressResult {
        let path = match self.selected_entry() {
            None => {
                self.set_status("No files to open", now);
                return KeypressResult::Continue;
            }
            Some(Entry::Parent | Entry::Unreadable(_)) => {
                self.go_parent(now);
                return KeypressResult::Continue;
            }
            Some(Entry::Named(name)) => self.current_dir.join(name),
        };

        match fm::stat(&path) {
            Ok(meta) if meta.is_dir() => {
                self.go_into(path, now);
                KeypressResult::Continue
            }
            Ok(_) => match self.config.opener().locate() {
                Ok(program) => {
                    log::info!("handing {} to {}", path.display(), program.display());
                    KeypressResult::Launch(LaunchRequest::new(program, path))
                }
                Err(e) => {
                    self.set_status(format!("Error opening file: {}", e), now);
                    KeypressResult::Continue
                }
            },
            Err(e) => {
                self.set_status(format!("Error: {}", e), now);
                KeypressResult::Continue
            }
        }
    }

    // File action helpers

    /// Name of the selected child, or a refusal status if the cursor is on `../`
    /// or on the unreadable placeholder.
    fn selected_name_or_refuse(&mut self, verb: &str, now: Instant) -> Option<OsString> {
        match self.selected_entry()? {
            Entry::Named(name) => Some(name.clone()),
            other => {
                let msg = format!("Cannot {} {}", verb, other.display_name());
                self.set_status(msg, now);
                None
            }
        }
    }

    fn handle_clipboard_store(&mut self, mode: ClipboardMode, now: Instant) {
        let verb = match mode {
            ClipboardMode::Copy => "copy",
            ClipboardMode::Move => "cut",
        };
        let Some(name) = self.selected_name_or_refuse(verb, now) else {
            return;
        };

        let path = self.current_dir.join(&name);
        log::debug!("clipboard ({:?}): {}", mode, path.display());
        self.actions.set_clipboard(path, mode);

        let msg = match mode {
            ClipboardMode::Copy => "File copied to buffer",
            ClipboardMode::Move => "File cut to buffer",
        };
        self.set_status(msg, now);
    }

    /// Pastes the clipboard into the current directory under a free name.
    ///
    /// A copy keeps the clipboard for repeated pastes, a move clears it. A vanished
    /// source keeps the clipboard as it is.
    fn handle_paste(&mut self, now: Instant) {
        let Some(clip) = self.actions.clipboard().cloned() else {
            self.set_status("No file in buffer to paste", now);
            return;
        };
        let src = clip.path();

        if src.symlink_metadata().is_err() {
            log::warn!("paste failed: {}", FsError::SourceMissing(src.to_path_buf()));
            self.set_status("Source file no longer exists", now);
            return;
        }
        let Some(name) = src.file_name() else {
            self.set_status(format!("Cannot paste {}", src.display()), now);
            return;
        };

        match clip.mode() {
            ClipboardMode::Move => {
                if src.parent() == Some(self.current_dir.as_path()) {
                    self.set_status("File is already in this directory", now);
                    return;
                }
                let dst = get_unused_path(&self.current_dir.join(name));
                match fm::move_entry(src, &dst) {
                    Ok(()) => {
                        log::info!("moved {} to {}", src.display(), dst.display());
                        self.actions.clear_clipboard();
                        self.set_status("File moved successfully", now);
                        self.reload(dst.file_name());
                    }
                    Err(e) => {
                        log::warn!("move {} failed: {}", src.display(), e);
                        self.set_status(format!("Error moving file: {}", e), now);
                    }
                }
            }
            ClipboardMode::Copy => {
                let dst = get_unused_path(&self.current_dir.join(name));
                let res = if src.is_dir() {
                    fm::copy_recursive(src, &dst)
                } else {
                    fm::copy(src, &dst)
                };
                match res {
                    Ok(()) => {
                        log::info!("copied {} to {}", src.display(), dst.display());
                        self.set_status("File copied successfully", now);
                        self.reload(dst.file_name());
                    }
                    Err(e) => {
                        log::warn!("copy {} failed: {}", src.display(), e);
                        self.set_status(format!("Error copying file: {}", e), now);
                        self.reload(None);
                    }
                }
            }
        }
    }

    /// Runs the operation a modal prompt was opened for.
    ///
    /// The typed name always resolves under the current directory, a leading `/` included.
    fn submit_input(&mut self, pending: PendingInput, text: &str, now: Instant) {
        let Some(target) = join_under(&self.current_dir, text) else {
            self.set_status(format!("Invalid name: {}", text), now);
            return;
        };
        match pending {
            PendingInput::CreateFile => match fm::create_file(&target) {
                Ok(()) => {
                    log::info!("created file {}", target.display());
                    self.set_status(format!("File created: {}", text), now);
                    self.reload(target.file_name());
                }
                Err(e) => {
                    log::warn!("create file {} failed: {}", target.display(), e);
                    self.set_status(format!("Error creating file: {}", e), now);
                }
            },
            PendingInput::CreateFolder => match fm::create_directory(&target) {
                Ok(()) => {
                    log::info!("created folder {}", target.display());
                    self.set_status(format!("Folder created: {}", text), now);
                    self.reload(target.file_name());
                }
                Err(e) => {
                    log::warn!("create folder {} failed: {}", target.display(), e);
                    self.set_status(format!("Error creating folder: {}", e), now);
                }
            },
            PendingInput::RenameFrom(old) => {
                let from = self.current_dir.join(&old);
                match fm::rename(&from, &target) {
                    Ok(()) => {
                        log::info!("renamed {} to {}", from.display(), target.display());
                        let msg = format!("Renamed {} to {}", old.to_string_lossy(), text);
                        self.set_status(msg, now);
                        self.reload(target.file_name());
                    }
                    Err(e) => {
                        log::warn!("rename {} failed: {}", from.display(), e);
                        self.set_status(format!("Error renaming: {}", e), now);
                    }
                }
            }
        }
        // A nested name like "a/b" lands outside the listing.
        self.clamp_cursor();
    }

    /// Two-press delete. The first press arms, a second press inside the window deletes,
    /// a second press after it disarms and reports the timeout.
    fn handle_delete(&mut self, now: Instant) {
        let Some(armed_at) = self.delete_armed else {
            if let Some(name) = self.selected_name_or_refuse("delete", now) {
                self.delete_armed = Some(now);
                let msg = format!(
                    "Press d again to confirm deletion of: {}",
                    name.to_string_lossy()
                );
                self.set_status(msg, now);
            }
            return;
        };
        self.delete_armed = None;

        if now.saturating_duration_since(armed_at) > self.config.general().delete_timeout() {
            self.set_status("Delete timeout - press delete again to start over", now);
            return;
        }

        let Some(path) = self.selected_path() else {
            return;
        };
        let name = self
            .selected_entry()
            .map(|e| e.display_name().into_owned())
            .unwrap_or_default();

        match fm::delete(&path) {
            Ok(()) => {
                log::info!("deleted {}", path.display());
                self.set_status(format!("Deleted: {}", name), now);
            }
            Err(e) => {
                log::warn!("delete {} failed: {}", path.display(), e);
                self.set_status(format!("Error deleting: {}", e), now);
            }
        }
        self.reload(None);
    }

    fn handle_set_work_dir(&mut self, now: Instant) {
        match std::env::set_current_dir(&self.current_dir) {
            Ok(()) => {
                log::info!("working directory set to {}", self.current_dir.display());
                let msg = format!("Working directory changed to: {}", self.current_dir.display());
                self.set_status(msg, now);
            }
            Err(e) => {
                self.set_status(format!("Error changing working directory: {}", e), now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::actions::ClipboardMode;
    use crate::app::keymap::Key;
    use crate::app::state::{KeypressResult, Session};
    use crate::config::Config;
    use crate::core::fm::Entry;

    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn select(session: &mut Session, name: &str) {
        let idx = session
            .entries()
            .iter()
            .position(|e| e.name().is_some_and(|n| n == name))
            .expect("entry is listed");
        session.cursor = idx;
    }

    fn type_text(session: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            session.handle_key_at(Key::Char(c), now);
        }
    }

    fn listed(session: &Session, name: &str) -> bool {
        session
            .entries()
            .iter()
            .any(|e| e.name().is_some_and(|n| n == name))
    }

    #[test]
    fn cursor_is_clamped_at_both_ends() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("only.txt"), "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        session.handle_key(Key::Up);
        assert_eq!(session.cursor(), 0);
        session.handle_key(Key::Down);
        session.handle_key(Key::Down);
        session.handle_key(Key::Down);
        assert_eq!(session.cursor(), 1);
        Ok(())
    }

    #[test]
    fn enter_descends_and_parent_returns_focused() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;
        fs::write(dir.path().join("sub/inner.txt"), "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "sub");
        session.handle_key(Key::Enter);
        assert_eq!(session.current_dir(), dir.path().join("sub"));
        assert_eq!(session.cursor(), 0);
        assert!(listed(&session, "inner.txt"));

        session.handle_key(Key::Enter);
        assert_eq!(session.current_dir(), dir.path());
        assert_eq!(session.selected_entry(), Some(&Entry::Named("sub".into())));
        Ok(())
    }

    #[test]
    fn enter_on_file_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("file.txt"), "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "file.txt");
        let before = session.cursor();
        assert_eq!(session.handle_key(Key::Enter), KeypressResult::Continue);
        assert_eq!(session.current_dir(), dir.path());
        assert_eq!(session.cursor(), before);
        Ok(())
    }

    #[test]
    fn open_directory_descends() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "sub");
        assert_eq!(session.handle_key(Key::Char('o')), KeypressResult::Continue);
        assert_eq!(session.current_dir(), dir.path().join("sub"));
        Ok(())
    }

    #[test]
    fn missing_opener_is_a_status() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("doc.txt"), "")?;
        let config_path = dir.path().join("navi.toml");
        fs::write(&config_path, "[opener]\ncmd = \"navi-no-such-opener\"\n")?;
        let config = Config::load_from(&config_path);
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "doc.txt");
        assert_eq!(session.handle_key(Key::Char('o')), KeypressResult::Continue);
        let status = session.status().unwrap_or_default();
        assert!(status.contains("navi-no-such-opener"), "status was {:?}", status);
        Ok(())
    }

    #[test]
    fn delete_needs_two_presses_in_window() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let victim = dir.path().join("victim.txt");
        fs::write(&victim, "bye")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        select(&mut session, "victim.txt");

        let t0 = Instant::now();
        session.handle_key_at(Key::Char('d'), t0);
        assert!(session.is_delete_armed());
        assert!(victim.exists());

        session.handle_key_at(Key::Char('d'), t0 + Duration::from_secs(1));
        assert!(!victim.exists());
        assert!(!session.is_delete_armed());
        assert!(!listed(&session, "victim.txt"));
        Ok(())
    }

    #[test]
    fn other_key_disarms_delete() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let victim = dir.path().join("victim.txt");
        fs::write(&victim, "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        select(&mut session, "victim.txt");

        let t0 = Instant::now();
        session.handle_key_at(Key::Char('d'), t0);
        session.handle_key_at(Key::Char('z'), t0);
        assert!(!session.is_delete_armed());

        session.handle_key_at(Key::Char('d'), t0);
        assert!(session.is_delete_armed(), "a fresh press only re-arms");
        assert!(victim.exists());
        Ok(())
    }

    #[test]
    fn late_second_press_times_out() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let victim = dir.path().join("victim.txt");
        fs::write(&victim, "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        select(&mut session, "victim.txt");

        let t0 = Instant::now();
        session.handle_key_at(Key::Char('d'), t0);
        let late = t0 + Duration::from_secs(4);
        session.handle_key_at(Key::Char('d'), late);

        assert!(victim.exists());
        assert!(!session.is_delete_armed());
        assert_eq!(
            session.status_at(late),
            Some("Delete timeout - press delete again to start over")
        );
        Ok(())
    }

    #[test]
    fn deleting_last_entry_reclamps_cursor() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("only.txt"), "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        select(&mut session, "only.txt");
        assert_eq!(session.cursor(), 1);

        let t0 = Instant::now();
        session.handle_key_at(Key::Char('d'), t0);
        session.handle_key_at(Key::Char('d'), t0);

        assert_eq!(session.entries(), &[Entry::Parent]);
        assert_eq!(session.cursor(), 0);
        Ok(())
    }

    #[test]
    fn parent_marker_is_protected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        let t0 = Instant::now();
        for key in ['c', 'x', 'r', 'd'] {
            session.handle_key_at(Key::Char(key), t0);
        }
        assert!(session.actions().clipboard().is_none());
        assert!(!session.actions().is_input_mode());
        assert!(!session.is_delete_armed());
        assert_eq!(session.status_at(t0), Some("Cannot delete ../"));
        Ok(())
    }

    #[test]
    fn copy_paste_is_repeatable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "data")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "a.txt");
        session.handle_key(Key::Char('c'));
        session.handle_key(Key::Char('v'));
        assert_eq!(fs::read_to_string(dir.path().join("a_1.txt"))?, "data");
        assert!(session.actions().clipboard().is_some());
        assert_eq!(session.selected_entry(), Some(&Entry::Named("a_1.txt".into())));

        session.handle_key(Key::Char('v'));
        assert!(dir.path().join("a_2.txt").exists());
        assert!(session.actions().clipboard().is_some());
        Ok(())
    }

    #[test]
    fn move_paste_clears_clipboard() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("m.txt"), "m")?;
        fs::create_dir(dir.path().join("dest"))?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "m.txt");
        session.handle_key(Key::Char('x'));
        let clip = session.actions().clipboard().cloned().expect("clipboard set");
        assert_eq!(clip.mode(), ClipboardMode::Move);

        select(&mut session, "dest");
        session.handle_key(Key::Enter);
        session.handle_key(Key::Char('v'));

        assert!(!dir.path().join("m.txt").exists());
        assert!(dir.path().join("dest/m.txt").exists());
        assert!(session.actions().clipboard().is_none());
        assert_eq!(session.status(), Some("File moved successfully"));
        Ok(())
    }

    #[test]
    fn move_into_same_directory_does_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("m.txt"), "m")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "m.txt");
        session.handle_key(Key::Char('x'));
        session.handle_key(Key::Char('v'));

        assert!(dir.path().join("m.txt").exists());
        assert!(!dir.path().join("m_1.txt").exists());
        assert!(session.actions().clipboard().is_some());
        Ok(())
    }

    #[test]
    fn empty_clipboard_paste_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        session.handle_key(Key::Char('v'));
        assert_eq!(session.status(), Some("No file in buffer to paste"));
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn vanished_source_keeps_clipboard() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let src = dir.path().join("gone.txt");
        fs::write(&src, "")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "gone.txt");
        session.handle_key(Key::Char('c'));
        fs::remove_file(&src)?;
        session.handle_key(Key::Char('v'));

        assert_eq!(session.status(), Some("Source file no longer exists"));
        let clip = session.actions().clipboard().expect("clipboard kept");
        assert_eq!(clip.path(), src.as_path());
        Ok(())
    }

    #[test]
    fn copy_paste_of_directory_is_recursive() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("tree/inner"))?;
        fs::write(dir.path().join("tree/inner/leaf"), "leaf")?;
        fs::create_dir(dir.path().join("dest"))?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        select(&mut session, "tree");
        session.handle_key(Key::Char('c'));
        select(&mut session, "dest");
        session.handle_key(Key::Enter);
        session.handle_key(Key::Char('v'));

        assert_eq!(
            fs::read_to_string(dir.path().join("dest/tree/inner/leaf"))?,
            "leaf"
        );
        Ok(())
    }

    #[test]
    fn new_file_prompt_creates_one_empty_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        session.handle_key_at(Key::Char('n'), now);
        assert!(session.actions().is_input_mode());
        assert_eq!(session.actions().prompt(), Some("Enter new file name: "));

        type_text(&mut session, "foo.txt", now);
        session.handle_key_at(Key::Enter, now);

        let created = dir.path().join("foo.txt");
        assert!(created.is_file());
        assert_eq!(fs::metadata(&created)?.len(), 0);
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        assert!(!session.actions().is_input_mode());
        assert_eq!(session.status_at(now), Some("File created: foo.txt"));
        assert_eq!(session.selected_entry(), Some(&Entry::Named("foo.txt".into())));
        Ok(())
    }

    #[test]
    fn empty_submission_cancels() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        session.handle_key_at(Key::Char('N'), now);
        session.handle_key_at(Key::Enter, now);

        assert!(!session.actions().is_input_mode());
        assert_eq!(session.status_at(now), Some("Operation cancelled"));
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn escape_cancels_and_keys_are_captured() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        session.handle_key(Key::Char('n'));
        type_text(&mut session, "qd", Instant::now());
        assert_eq!(session.actions().input_buffer(), "qd");
        session.handle_key(Key::Backspace);
        assert_eq!(session.actions().input_buffer(), "q");

        assert_eq!(session.handle_key(Key::Esc), KeypressResult::Continue);
        assert!(!session.actions().is_input_mode());
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn new_folder_is_recursive() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        session.handle_key_at(Key::Char('N'), now);
        type_text(&mut session, "a/b", now);
        session.handle_key_at(Key::Enter, now);

        assert!(dir.path().join("a/b").is_dir());
        assert_eq!(session.status_at(now), Some("Folder created: a/b"));
        assert!(session.cursor() < session.entries().len());
        Ok(())
    }

    #[test]
    fn rename_replaces_listing_entry() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "a")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        select(&mut session, "a.txt");
        session.handle_key_at(Key::Char('r'), now);
        assert_eq!(session.actions().input_buffer(), "");
        type_text(&mut session, "b.txt", now);
        session.handle_key_at(Key::Enter, now);

        assert!(!listed(&session, "a.txt"));
        assert!(listed(&session, "b.txt"));
        assert_eq!(session.status_at(now), Some("Renamed a.txt to b.txt"));
        Ok(())
    }

    #[test]
    fn absolute_name_creates_file_inside_browsed_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let elsewhere = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        session.handle_key_at(Key::Char('n'), now);
        type_text(&mut session, "/escaped.txt", now);
        session.handle_key_at(Key::Enter, now);
        assert!(dir.path().join("escaped.txt").is_file());
        assert_eq!(session.status_at(now), Some("File created: /escaped.txt"));

        // The parents of a full path do not exist under the browsed dir.
        let typed = elsewhere.path().join("escaped.txt");
        session.handle_key_at(Key::Char('n'), now);
        type_text(&mut session, &typed.to_string_lossy(), now);
        session.handle_key_at(Key::Enter, now);

        assert!(!typed.exists());
        assert!(session.status_at(now).is_some_and(|s| s.starts_with("Error creating file")));
        assert_eq!(fs::read_dir(elsewhere.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn absolute_name_renames_inside_browsed_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let elsewhere = tempdir()?;
        fs::write(dir.path().join("a.txt"), "a")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        select(&mut session, "a.txt");
        session.handle_key_at(Key::Char('r'), now);
        type_text(&mut session, "/b.txt", now);
        session.handle_key_at(Key::Enter, now);
        assert!(dir.path().join("b.txt").is_file());
        assert_eq!(session.status_at(now), Some("Renamed a.txt to /b.txt"));

        // A directory that does not exist under the browsed dir makes the rename fail.
        select(&mut session, "b.txt");
        let typed = elsewhere.path().join("c.txt");
        session.handle_key_at(Key::Char('r'), now);
        type_text(&mut session, &typed.to_string_lossy(), now);
        session.handle_key_at(Key::Enter, now);

        assert!(!typed.exists());
        assert!(dir.path().join("b.txt").is_file());
        assert!(session.status_at(now).is_some_and(|s| s.starts_with("Error renaming")));
        Ok(())
    }

    #[test]
    fn bare_root_is_not_a_name() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        session.handle_key_at(Key::Char('N'), now);
        type_text(&mut session, "/", now);
        session.handle_key_at(Key::Enter, now);

        assert!(!session.actions().is_input_mode());
        assert_eq!(session.status_at(now), Some("Invalid name: /"));
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn rename_onto_existing_name_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(dir.path().join("b.txt"), "b")?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        let now = Instant::now();

        select(&mut session, "a.txt");
        session.handle_key_at(Key::Char('r'), now);
        type_text(&mut session, "b.txt", now);
        session.handle_key_at(Key::Enter, now);

        assert_eq!(fs::read_to_string(dir.path().join("b.txt"))?, "b");
        assert!(dir.path().join("a.txt").exists());
        let status = session.status_at(now).unwrap_or_default();
        assert!(status.starts_with("Error renaming:"), "status was {:?}", status);
        assert!(status.contains("already exists"));
        Ok(())
    }

    #[test]
    fn preview_toggle_reports_state() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        session.handle_key(Key::Char('p'));
        assert!(session.is_preview_enabled());
        assert_eq!(session.status(), Some("Preview enabled"));
        session.handle_key(Key::Char('p'));
        assert!(!session.is_preview_enabled());
        assert_eq!(session.status(), Some("Preview disabled"));
        Ok(())
    }

    #[test]
    fn quit_ends_session() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;
        assert_eq!(session.handle_key(Key::Char('q')), KeypressResult::Quit);
        Ok(())
    }

    #[test]
    fn unreadable_directory_is_not_entered() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::default();
        let mut session = Session::from_dir(&config, dir.path())?;

        let missing = dir.path().join("vanished");
        session.go_into(missing, Instant::now());
        assert_eq!(session.current_dir(), dir.path());
        assert!(session.status().is_some_and(|s| s.starts_with("Cannot open")));
        Ok(())
    }
}
