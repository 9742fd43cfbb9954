//! Core methods for the Model struct.

use super::model::{paste, Model};
use super::types::{EchoMode, InputRef, PasteErrMsg, PasteMsg};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Replaces the value.
    ///
    /// The caret is kept where it was unless it would fall past the end of
    /// the new value, or the input was empty, in which case it moves to the
    /// end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_password_toggle::textinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("Hello, world!");
    /// assert_eq!(input.value(), "Hello, world!");
    /// assert_eq!(input.position(), 13);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        self.set_value_internal(s.chars().collect());
    }

    pub(super) fn set_value_internal(&mut self, runes: Vec<char>) {
        let empty = self.value.is_empty();

        if self.char_limit > 0 && runes.len() > self.char_limit as usize {
            self.value = runes[..self.char_limit as usize].to_vec();
        } else {
            self.value = runes;
        }

        if (self.pos == 0 && empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        } else {
            self.anchor = self.anchor.min(self.value.len());
        }

        self.handle_overflow();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Length of the value in characters.
    pub fn value_len(&self) -> usize {
        self.value.len()
    }

    /// Caret position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the caret, clamped to the end of the value, and collapses any
    /// selection onto it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_password_toggle::textinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("hello");
    /// input.set_cursor(100);
    /// assert_eq!(input.position(), 5);
    /// ```
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.anchor = self.pos;
        self.handle_overflow();
    }

    /// Moves the caret to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the caret to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Selects `start..end`; the caret sits at `end`. Both ends are clamped
    /// to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_password_toggle::textinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("secret");
    /// input.set_selection_range(0, 3);
    /// assert_eq!(input.selection_range(), (0, 3));
    ///
    /// let len = input.value_len();
    /// input.set_selection_range(len, len);
    /// assert_eq!(input.selection_range(), (6, 6));
    /// ```
    pub fn set_selection_range(&mut self, start: usize, end: usize) {
        let len = self.value.len();
        self.pos = end.min(len);
        self.anchor = start.min(len);
        self.handle_overflow();
    }

    /// Selection as `(start, end)` with `start <= end`.
    pub fn selection_range(&self) -> (usize, usize) {
        (self.anchor.min(self.pos), self.anchor.max(self.pos))
    }

    /// Whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input; the returned command starts caret blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.cursor.focus().unwrap_or_else(|| Box::pin(async { None }))
    }

    /// Removes focus; key messages are ignored until focused again.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Clears the value and moves the caret to the start.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width in columns. 0 disables scrolling.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the echo mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_password_toggle::textinput::{new, EchoMode};
    ///
    /// let mut input = new();
    /// input.set_echo_mode(EchoMode::EchoPassword);
    /// input.set_value("secret");
    /// assert!(input.view().contains("******"));
    /// ```
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Sets the character limit. 0 means no limit.
    pub fn set_char_limit(&mut self, limit: i32) {
        self.char_limit = limit;
    }

    /// Class names attached to this input element.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Replaces the class names attached to this input element.
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    /// Attaches this input to `r`, replacing any previous binding.
    pub fn bind(&mut self, r: InputRef) {
        self.bound = Some(r);
    }

    /// Detaches this input from its ref.
    pub fn unbind(&mut self) {
        self.bound = None;
    }

    /// Whether this input is currently attached to `r`.
    pub fn is_bound_to(&self, r: InputRef) -> bool {
        self.bound == Some(r)
    }

    /// Processes key and paste messages while focused; always forwards the
    /// message to the caret.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_password_toggle::textinput::new;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut input = new();
    /// let _ = input.focus();
    /// input.update(Box::new(KeyMsg {
    ///     key: KeyCode::Char('h'),
    ///     modifiers: KeyModifiers::NONE,
    /// }));
    /// assert_eq!(input.value(), "h");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }

            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let chars: Vec<char> = paste_msg.0.chars().collect();
            self.insert_runes_from_user_input(chars);
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if self.delete_selection_on(key_msg) {
            return;
        }

        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if !self.value.is_empty() && self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                self.set_cursor(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    /// Single-character deletes remove the whole selection when one exists.
    fn delete_selection_on(&mut self, key_msg: &KeyMsg) -> bool {
        let (start, end) = self.selection_range();
        if start == end {
            return false;
        }
        if matches_binding(key_msg, &self.key_map.delete_character_backward)
            || matches_binding(key_msg, &self.key_map.delete_character_forward)
        {
            self.value.drain(start..end);
            self.set_cursor(start);
            return true;
        }
        false
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes_from_user_input(vec![ch]);
            }
        }
    }

    /// Inserts at the caret, replacing the selection and honouring the
    /// character limit.
    pub(super) fn insert_runes_from_user_input(&mut self, runes: Vec<char>) {
        let (start, end) = self.selection_range();
        if start != end {
            self.value.drain(start..end);
            self.set_cursor(start);
        }

        let avail = if self.char_limit > 0 {
            let space = self.char_limit - self.value.len() as i32;
            if space <= 0 {
                return;
            }
            space as usize
        } else {
            usize::MAX
        };

        let inserted: Vec<char> = runes.into_iter().take(avail).collect();
        let count = inserted.len();
        let mut new_value = self.value[..self.pos].to_vec();
        new_value.extend(inserted);
        new_value.extend_from_slice(&self.value[self.pos..]);

        let new_pos = self.pos + count;
        self.set_value_internal(new_value);
        self.set_cursor(new_pos);
    }

    /// Keeps the caret inside the visible window.
    pub(super) fn handle_overflow(&mut self) {
        use unicode_width::UnicodeWidthChar;

        let width = self.width.max(0) as usize;
        let char_width = |c: &char| c.width().unwrap_or(0).max(1);
        let total: usize = self.value.iter().map(char_width).sum();

        if width == 0 || total <= width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());
        self.offset = self.offset.min(self.offset_right);

        if self.pos < self.offset {
            self.offset = self.pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < self.value.len() && w + char_width(&self.value[i]) <= width {
                w += char_width(&self.value[i]);
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + char_width(&self.value[i - 1]) <= width {
                w += char_width(&self.value[i - 1]);
                i -= 1;
            }
            self.offset = i;
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(Model::focus(self))
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
