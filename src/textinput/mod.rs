//! Single-line text input.
//!
//! The input a password toggle binds to. It owns the editing state (value,
//! caret, selection, focus) and the echo mode; a
//! [`PasswordToggle`](crate::passwordtoggle::PasswordToggle) drives the echo
//! mode and value through [`InputProps`](crate::passwordtoggle::InputProps).
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_password_toggle::textinput::{new, EchoMode};
//!
//! let mut input = new();
//! let _blink = input.focus();
//! input.set_placeholder("Password");
//! input.set_echo_mode(EchoMode::EchoPassword);
//! input.set_value("hunter2");
//! assert_eq!(input.selection_range(), (7, 7));
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
pub mod movement;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{blink, new, paste, Model};
pub use types::{EchoMode, InputRef, InputType, PasteErrMsg, PasteMsg};
