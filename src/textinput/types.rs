//! Core types for the textinput component.

use bubbletea_rs::Msg;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Clipboard contents read by [`paste`](super::paste).
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// How typed characters are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Characters are shown as typed.
    #[default]
    EchoNormal,
    /// Every character is replaced by the echo character.
    EchoPassword,
    /// Nothing is shown.
    EchoNone,
}

/// The field type requested by input props: masked or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Plain text.
    Text,
    /// Masked password characters.
    Password,
}

impl From<InputType> for EchoMode {
    fn from(t: InputType) -> Self {
        match t {
            InputType::Text => EchoMode::EchoNormal,
            InputType::Password => EchoMode::EchoPassword,
        }
    }
}

static NEXT_REF: AtomicUsize = AtomicUsize::new(1);

/// Handle identifying the input element a component wants to control.
///
/// An input is attached to a ref by [`Model::bind`](super::Model::bind) and
/// detached by [`Model::unbind`](super::Model::unbind). Whoever holds the ref
/// checks [`Model::is_bound_to`](super::Model::is_bound_to) before touching
/// focus or caret, so a detached input is simply left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputRef(usize);

impl InputRef {
    /// Allocates a fresh ref that no input is attached to yet.
    pub fn new() -> Self {
        Self(NEXT_REF.fetch_add(1, Ordering::Relaxed))
    }

    /// Numeric id of the ref.
    pub fn id(&self) -> usize {
        self.0
    }
}

impl Default for InputRef {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
