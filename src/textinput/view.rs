//! Rendering for the textinput component.

use super::model::Model;
use super::types::EchoMode;

impl Model {
    /// Renders the prompt, the visible window of the value and the caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let visible = self.echo_transform(&self.value[start..end]);
        let pos = self.pos.saturating_sub(start);

        let mut v = String::new();
        if pos < visible.len() {
            let before: String = visible[..pos].iter().collect();
            let after: String = visible[pos + 1..].iter().collect();
            v.push_str(&self.text_style.render(&before));
            v.push_str(&self.caret_over(&visible[pos].to_string()));
            v.push_str(&self.text_style.render(&after));
        } else {
            let text: String = visible.iter().collect();
            v.push_str(&self.text_style.render(&text));
            v.push_str(&self.caret_over(" "));
        }

        if self.width > 0 {
            let padding = (self.width as usize).saturating_sub(visible.len());
            v.push_str(&self.text_style.render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn caret_over(&self, ch: &str) -> String {
        if !self.focus {
            return self.text_style.render(ch);
        }
        let mut cur = self.cursor.clone();
        cur.set_char(ch);
        cur.view()
    }

    pub(super) fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();

        let mut v = self.caret_over(&first);
        v.push_str(&self.placeholder_style.render(&rest));

        if self.width > 0 {
            let used = self.placeholder.chars().count();
            let padding = (self.width as usize).saturating_sub(used);
            v.push_str(&self.placeholder_style.render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    /// Applies the echo mode to a run of characters.
    pub(super) fn echo_transform(&self, v: &[char]) -> Vec<char> {
        match self.echo_mode {
            EchoMode::EchoPassword => vec![self.echo_character; v.len()],
            EchoMode::EchoNone => Vec::new(),
            EchoMode::EchoNormal => v.to_vec(),
        }
    }
}
