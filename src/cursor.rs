//! Caret model for text inputs.
//!
//! The caret is embedded in [`crate::textinput::Model`] and driven by
//! forwarding messages to [`Model::update`]. Blink messages carry the id of
//! the caret that scheduled them and a tag, so a caret only reacts to its own,
//! most recent blink.
//!
//! ```rust
//! use bubbletea_password_toggle::cursor;
//!
//! let mut caret = cursor::new();
//! let _blink = caret.focus();
//! caret.set_char("x");
//! assert!(!caret.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Sent once to kick off blinking for whichever caret is focused.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Flips the blink state of the caret with the matching id and tag.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Caret the message is addressed to.
    pub id: usize,
    /// Blink sequence number; older tags are ignored.
    pub tag: usize,
}

/// How the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Alternates between block and plain character.
    #[default]
    Blink,
    /// Always drawn as a block.
    Static,
    /// Never drawn.
    Hide,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Blink => "blink",
            Mode::Static => "static",
            Mode::Hide => "hidden",
        })
    }
}

/// Caret state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Interval between blinks.
    pub blink_speed: Duration,
    /// Style of the block when the caret is shown.
    pub style: Style,
    /// Style of the character under the caret while the block is off.
    pub text_style: Style,

    char: String,
    id: usize,
    focus: bool,
    // true while the block is *not* drawn
    off: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            char: " ".to_string(),
            id: next_id(),
            focus: false,
            off: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates an unfocused blinking caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier used to route blink messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Handles blink messages addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.off = !self.off;
            return self.blink_cmd();
        }

        None
    }

    /// Current drawing mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the drawing mode; switching to blink returns the first blink.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.off = mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink {
            return Some(blink());
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }
        self.blink_tag += 1;
        let (id, tag) = (self.id, self.blink_tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Shows the caret and, in blink mode, schedules the next blink.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.off = self.mode == Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Hides the caret.
    pub fn blur(&mut self) {
        self.focus = false;
        self.off = true;
    }

    /// Whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character drawn under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// Renders the caret over its character.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.off {
            return self.text_style.clone().inline(true).render(&self.char);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.char)
    }
}

/// Command that starts blinking on the focused caret.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| Box::new(InitialBlinkMsg) as Msg)
}

/// Creates a caret. Same as [`Model::new`].
pub fn new() -> Model {
    Model::new()
}
