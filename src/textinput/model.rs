//! Core model for the textinput component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{EchoMode, InputRef, PasteErrMsg};
use crate::cursor::{new as cursor_new, Model as Cursor};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// A single-line text input.
///
/// Supports caret movement and editing, a selection range, echo modes for
/// masked entry, horizontal scrolling and an optional element binding used
/// by components that restore focus to the input.
///
/// # Examples
///
/// ```rust
/// use bubbletea_password_toggle::textinput::{new, EchoMode};
///
/// let mut input = new();
/// let _ = input.focus();
/// input.set_width(20);
/// input.set_char_limit(64);
/// input.set_echo_mode(EchoMode::EchoPassword);
/// ```
pub struct Model {
    /// Error reported by the last paste attempt.
    pub err: Option<String>,

    /// Prompt drawn before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the text.
    pub text_style: Style,

    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,

    /// Caret model.
    pub cursor: Cursor,

    /// Value as characters.
    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    /// Caret position, also the selection end.
    pub(super) pos: usize,
    /// Selection anchor; equals `pos` when nothing is selected.
    pub(super) anchor: usize,

    /// Maximum number of visible columns. 0 means unbounded.
    pub width: i32,

    /// Key bindings.
    pub key_map: KeyMap,

    /// Maximum number of characters accepted. 0 means no limit.
    pub char_limit: i32,

    /// Echo mode.
    pub echo_mode: EchoMode,
    /// Mask character used by [`EchoMode::EchoPassword`].
    pub echo_character: char,

    /// Class names attached to the input element.
    pub(super) class_name: String,
    /// Element binding, see [`InputRef`].
    pub(super) bound: Option<InputRef>,

    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates an unfocused, empty input with a `"> "` prompt.
///
/// # Examples
///
/// ```rust
/// use bubbletea_password_toggle::textinput::new;
///
/// let input = new();
/// assert_eq!(input.value(), "");
/// assert!(!input.focused());
/// ```
pub fn new() -> Model {
    let mut m = Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor: cursor_new(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        anchor: 0,
        width: 0,
        key_map: default_key_map(),
        char_limit: 0,
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        class_name: String::new(),
        bound: None,
        offset: 0,
        offset_right: 0,
    };

    let _ = m.cursor.set_mode(crate::cursor::Mode::Blink);
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Command that starts caret blinking.
pub fn blink() -> Cmd {
    crate::cursor::blink()
}

/// Command that reads the system clipboard and yields a
/// [`PasteMsg`](super::PasteMsg) or a [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
