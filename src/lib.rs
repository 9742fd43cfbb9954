#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-password-toggle/")]

//! # bubbletea-password-toggle
//!
//! A show/hide toggle for password inputs in [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The crate pairs a state provider with a stateless wrapper view:
//!
//! - [`PasswordToggle`] owns the visibility flag and the input value and
//!   produces the props for the text input and the wrapper.
//! - [`InputWrapper`] renders the input inside a container and, in password
//!   mode, adds a button that flips visibility.
//!
//! After every toggle the provider returns a command that puts focus back on
//! the input with the caret at the end of the value.
//!
//! ## Components
//!
//! - **Password toggle**: `PasswordToggle`, `InputWrapper`, `MemoizedWrapper`
//! - **Input**: `TextInput`, a single-line input with masking and selection
//! - **Utilities**: `Cursor`, key bindings, icons, class-name merging, an
//!   element tree rendered through a `StyleSheet`
//!
//! ## Focus Management
//!
//! The text input implements the `Component` trait:
//!
//! ```rust
//! use bubbletea_password_toggle::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = textinput_new();
//! handle_focus(&mut input);
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_password_toggle::prelude::*;
//!
//! let mut toggle = use_password_toggle(PasswordToggleOptions::new().password(true));
//! let mut input = textinput_new();
//! toggle.input_props().apply(&mut input);
//! assert_eq!(input.echo_mode, EchoMode::EchoPassword);
//!
//! let _restore_focus = toggle.toggle();
//! toggle.input_props().apply(&mut input);
//! assert_eq!(input.echo_mode, EchoMode::EchoNormal);
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `clipboard-support` | yes | System clipboard paste in the text input |
//! | `serde` | no | Deserialize options and class names from config |

pub mod classnames;
pub mod cursor;
pub mod element;
pub mod icons;
pub mod key;
pub mod passwordtoggle;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// ## Implementation Guidelines
///
/// - `focus()` sets the focused state and may return a command, such as a
///   caret blink
/// - `blur()` clears the focused state
/// - `focused()` reports the current state
///
/// ## Examples
///
/// ```rust
/// use bubbletea_password_toggle::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!Component::focused(&input));
///
/// let _ = Component::focus(&mut input);
/// assert!(Component::focused(&input));
///
/// Component::blur(&mut input);
/// assert!(!Component::focused(&input));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns whether the component is focused.
    fn focused(&self) -> bool;
}

pub use classnames::{class_name_fn, join_classes, ClassNameFn, ClassNames};
pub use cursor::Model as Cursor;
pub use element::{Attributes, Button, Callback, Element, StyleSheet};
pub use icons::{eye, eye_off, Icon, IconOverrides, IconSet};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
    Help as KeyHelp, KeyMap, KeyParseError, KeyPress,
};
pub use passwordtoggle::{
    use_password_toggle, InputProps, InputWrapper, MemoizedWrapper, PasswordConfig, PasswordMode,
    PasswordToggle, PasswordToggleOptions, RestoreFocusMsg, ToggleMsg, Visibility, WrapperProps,
};
pub use textinput::{
    blink, default_key_map as textinput_default_key_map, new as textinput_new, paste, EchoMode,
    InputRef, InputType, KeyMap as TextInputKeyMap, Model as TextInput, PasteErrMsg, PasteMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_password_toggle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Component;

    pub use crate::classnames::{class_name_fn, ClassNames};
    pub use crate::element::{Attributes, Element, StyleSheet};
    pub use crate::icons::{eye, eye_off, Icon};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::passwordtoggle::{
        use_password_toggle, InputWrapper, MemoizedWrapper, PasswordMode, PasswordToggle,
        PasswordToggleOptions, Visibility,
    };
    pub use crate::textinput::{new as textinput_new, EchoMode, Model as TextInput};
    pub use crate::Cursor;
}
