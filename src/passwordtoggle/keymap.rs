//! Key bindings for the password toggle.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Keyboard activation of the toggle button.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Flip visibility while the input is focused.
    pub toggle: Binding,
}

/// `ctrl+r` or `alt+r` toggles visibility.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle: new_binding(vec![
            with_keys_str(&["ctrl+r", "alt+r"]),
            with_help("ctrl+r", "show/hide password"),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle]]
    }
}
