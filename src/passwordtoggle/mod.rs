//! Show/hide password toggle.
//!
//! Two pieces work together:
//!
//! - [`PasswordToggle`] (created with [`use_password_toggle`]) owns the
//!   visibility flag and the input value. It hands out [`InputProps`] for the
//!   text input and [`WrapperProps`] for the wrapper, and restores focus and
//!   caret after each toggle.
//! - [`InputWrapper`] is stateless. It renders the input inside a container
//!   and, in password mode, adds a button that flips visibility and shows the
//!   matching icon.
//!
//! # Usage in an application
//!
//! ```rust
//! use bubbletea_password_toggle::element::StyleSheet;
//! use bubbletea_password_toggle::passwordtoggle::{use_password_toggle, PasswordToggle, PasswordToggleOptions};
//! use bubbletea_password_toggle::textinput::{self, Model as TextInput};
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Login {
//!     toggle: PasswordToggle,
//!     input: TextInput,
//!     sheet: StyleSheet,
//! }
//!
//! impl Model for Login {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let toggle = use_password_toggle(PasswordToggleOptions::new().password(true));
//!         let mut input = textinput::new();
//!         toggle.input_props().apply(&mut input);
//!         let focus = input.focus();
//!         (Self { toggle, input, sheet: StyleSheet::default() }, Some(focus))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.toggle.update(msg, Some(&mut self.input))
//!     }
//!
//!     fn view(&self) -> String {
//!         self.toggle
//!             .input_wrapper()
//!             .view(&self.toggle.wrapper_props(), &self.input, &self.sheet)
//!     }
//! }
//! ```
//!
//! Toggling happens through the button's click message ([`ToggleMsg`]) or
//! the toggle key binding (`ctrl+r` by default). Either way the provider
//! returns a command delivering a [`RestoreFocusMsg`] after the current
//! update, which puts focus back on the input with the caret at the end.

pub mod keymap;
pub mod memoization;
pub mod options;
pub mod provider;
pub mod wrapper;


pub use keymap::{default_key_map, KeyMap};
pub use memoization::MemoizedWrapper;
pub use options::{PasswordConfig, PasswordMode, PasswordToggleOptions};
pub use provider::{
    use_password_toggle, InputProps, PasswordToggle, RestoreFocusMsg, ToggleMsg, Visibility,
    WrapperProps, INPUT_PADDING_CLASS,
};
pub use wrapper::{
    InputWrapper, DEFAULT_BUTTON_CLASS, DEFAULT_SUFFIX_CLASS, DEFAULT_WRAPPER_CLASS,
    HIDE_PASSWORD_LABEL, SHOW_PASSWORD_LABEL,
};
