//! Word-wise movement and range deletion.
//!
//! Word operations only look at word boundaries in [`EchoMode::EchoNormal`].
//! In the masked modes they act on the whole line instead, so the shape of a
//! hidden value is never revealed by how far the caret jumps.

use super::model::Model;
use super::types::EchoMode;

impl Model {
    fn word_boundaries_visible(&self) -> bool {
        self.echo_mode == EchoMode::EchoNormal
    }

    /// Index of the start of the word left of the caret.
    fn word_start_before(&self, from: usize) -> usize {
        let mut i = from;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    /// Index just past the end of the word right of the caret.
    fn word_end_after(&self, from: usize) -> usize {
        let mut i = from;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    pub(super) fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.offset = 0;
        self.set_cursor(0);
    }

    pub(super) fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.set_cursor(self.value.len());
    }

    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        if !self.word_boundaries_visible() {
            self.delete_before_cursor();
            return;
        }
        let start = self.word_start_before(self.pos);
        self.value.drain(start..self.pos);
        self.set_cursor(start);
    }

    pub(super) fn delete_word_forward(&mut self) {
        if self.pos >= self.value.len() {
            return;
        }
        if !self.word_boundaries_visible() {
            self.delete_after_cursor();
            return;
        }
        let end = self.word_end_after(self.pos);
        self.value.drain(self.pos..end);
        self.set_cursor(self.pos);
    }

    pub(super) fn word_backward(&mut self) {
        if !self.word_boundaries_visible() {
            self.cursor_start();
            return;
        }
        let start = self.word_start_before(self.pos);
        self.set_cursor(start);
    }

    pub(super) fn word_forward(&mut self) {
        if !self.word_boundaries_visible() {
            self.cursor_end();
            return;
        }
        let end = self.word_end_after(self.pos);
        self.set_cursor(end);
    }
}
