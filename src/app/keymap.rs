//! Key mapping and action dispatch system for navi
//!
//! Defines the decoded [Key] units read from the terminal, the [Action] variants they
//! trigger, and the fixed [Keymap] between the two.

use std::collections::HashMap;

/// One decoded input unit.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Char(char),
    /// Anything navi has no use for (function keys, modified chords, ...).
    Other,
}

/// Represents any action in the app: navigation, file, or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    System(SystemAction),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    GoUp,
    GoDown,
    GoIntoDir,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileAction {
    Open,
    CreateFile,
    CreateFolder,
    Rename,
    Copy,
    Cut,
    Paste,
    SetWorkDir,
    Delete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    TogglePreview,
    Quit,
}

/// Stores the mapping from [Key] to [Action].
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the bindings. `p` only exists when preview support is on.
    #[rustfmt::skip]
    pub fn new(preview_support: bool) -> Self {
        use NavAction as N;
        use FileAction as F;
        use SystemAction as S;

        let mut map = HashMap::new();

        map.insert(Key::Up,          Action::Nav(N::GoUp));
        map.insert(Key::Down,        Action::Nav(N::GoDown));
        map.insert(Key::Enter,       Action::Nav(N::GoIntoDir));

        map.insert(Key::Char('o'),   Action::File(F::Open));
        map.insert(Key::Char('n'),   Action::File(F::CreateFile));
        map.insert(Key::Char('N'),   Action::File(F::CreateFolder));
        map.insert(Key::Char('r'),   Action::File(F::Rename));
        map.insert(Key::Char('c'),   Action::File(F::Copy));
        map.insert(Key::Char('x'),   Action::File(F::Cut));
        map.insert(Key::Char('v'),   Action::File(F::Paste));
        map.insert(Key::Char('w'),   Action::File(F::SetWorkDir));
        map.insert(Key::Char('d'),   Action::File(F::Delete));

        if preview_support {
            map.insert(Key::Char('p'), Action::System(S::TogglePreview));
        }
        map.insert(Key::Char('q'),   Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key
    pub fn lookup(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }
}
