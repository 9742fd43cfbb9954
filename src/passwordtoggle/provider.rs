//! The password toggle state provider.

use super::keymap::{default_key_map, KeyMap};
use super::options::{PasswordMode, PasswordToggleOptions};
use super::wrapper::InputWrapper;
use crate::classnames::{ClassNameFn, ClassNames, DebugFn};
use crate::element::Callback;
use crate::textinput::{InputRef, InputType, Model as TextInput};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Class added to the input to leave room for the toggle button.
pub const INPUT_PADDING_CLASS: &str = "pr-10";

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Whether the password is drawn masked or as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Characters are masked.
    #[default]
    Masked,
    /// Characters are shown.
    Revealed,
}

impl Visibility {
    /// The other state.
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    /// Whether characters are shown.
    pub fn is_revealed(self) -> bool {
        self == Visibility::Revealed
    }
}

/// Asks the provider with `id` to flip visibility. Produced by the toggle
/// button's click handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMsg {
    /// Provider the message is addressed to.
    pub id: usize,
}

/// Deferred follow-up of a toggle: focus the bound input and put the caret
/// at the end. Delivered after the update that flipped visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreFocusMsg {
    /// Provider the message is addressed to.
    pub id: usize,
    /// Toggle sequence number; only the latest toggle restores.
    pub tag: usize,
}

/// Props to apply to the text input.
///
/// Empty when password mode is off, in which case [`InputProps::apply`]
/// leaves the input exactly as the caller configured it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    /// Masked or plain text.
    pub input_type: Option<InputType>,
    /// Controlled value.
    pub value: Option<String>,
    /// Padding class reserving room for the button.
    pub class_name: Option<String>,
    /// Element binding used to restore focus after a toggle.
    pub input_ref: Option<InputRef>,
}

impl InputProps {
    /// Whether no prop is set.
    pub fn is_empty(&self) -> bool {
        self.input_type.is_none()
            && self.value.is_none()
            && self.class_name.is_none()
            && self.input_ref.is_none()
    }

    /// Applies every set prop to `input`.
    ///
    /// The value is only written when it differs, so the caret stays put
    /// while the input and the provider agree.
    pub fn apply(&self, input: &mut TextInput) {
        if let Some(input_type) = self.input_type {
            input.set_echo_mode(input_type.into());
        }
        if let Some(value) = &self.value {
            if input.value() != *value {
                input.set_value(value);
            }
        }
        if let Some(class_name) = &self.class_name {
            input.set_class_name(class_name.clone());
        }
        if let Some(r) = self.input_ref {
            input.bind(r);
        }
    }
}

/// Everything [`InputWrapper`] needs to render.
#[derive(Clone, Default)]
pub struct WrapperProps {
    /// Password mode.
    pub password: PasswordMode,
    /// Current visibility.
    pub show_password: bool,
    /// Click handler of the toggle button.
    pub on_toggle: Option<Callback>,
    /// Class overrides.
    pub class_names: ClassNames,
    /// Class-name combinator.
    pub cn: Option<ClassNameFn>,
}

impl fmt::Debug for WrapperProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperProps")
            .field("password", &self.password)
            .field("show_password", &self.show_password)
            .field("on_toggle", &self.on_toggle.as_ref().map(|_| "<fn>"))
            .field("class_names", &self.class_names)
            .field("cn", &DebugFn(self.cn.as_ref()))
            .finish()
    }
}

/// Show/hide password state for one input.
///
/// Owns the visibility flag and the input value, hands out the props for
/// the input and the wrapper, and restores focus and caret after each
/// toggle. Each instance has its own state; messages carry the instance id
/// so several toggles can share one update loop.
///
/// # Examples
///
/// ```rust
/// use bubbletea_password_toggle::passwordtoggle::{use_password_toggle, PasswordToggleOptions};
/// use bubbletea_password_toggle::element::Element;
/// use bubbletea_password_toggle::textinput;
///
/// let mut toggle = use_password_toggle(PasswordToggleOptions::new().password(true));
/// let mut input = textinput::new();
/// toggle.input_props().apply(&mut input);
///
/// let tree = toggle.input_wrapper().render(
///     &toggle.wrapper_props(),
///     None,
///     &Default::default(),
///     vec![Element::input(&input)],
/// );
/// let button = tree.find_button().expect("toggle button");
/// assert_eq!(button.aria_label, "Show password");
///
/// let _restore = toggle.toggle();
/// assert!(toggle.show_password());
/// ```
pub struct PasswordToggle {
    id: usize,
    password: PasswordMode,
    class_names: ClassNames,
    cn: Option<ClassNameFn>,
    visibility: Visibility,
    value: String,
    input_ref: InputRef,
    mounted: bool,
    restore_tag: usize,
    on_toggle: Callback,
    /// Keyboard bindings for the toggle button.
    pub key_map: KeyMap,
}

/// Creates a password toggle from options.
pub fn use_password_toggle(options: PasswordToggleOptions) -> PasswordToggle {
    PasswordToggle::new(options)
}

impl PasswordToggle {
    /// Creates a password toggle. Visibility starts masked, value empty.
    pub fn new(options: PasswordToggleOptions) -> Self {
        let id = next_id();
        let on_toggle: Callback = Arc::new(move || Box::new(ToggleMsg { id }) as Msg);
        Self {
            id,
            password: options.password,
            class_names: options.class_names,
            cn: options.cn,
            visibility: Visibility::Masked,
            value: String::new(),
            input_ref: InputRef::new(),
            mounted: true,
            restore_tag: 0,
            on_toggle,
            key_map: default_key_map(),
        }
    }

    /// Instance id carried by this toggle's messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether password mode is on.
    pub fn password_enabled(&self) -> bool {
        self.password.is_enabled()
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the password is shown as plain text.
    pub fn show_password(&self) -> bool {
        self.visibility.is_revealed()
    }

    /// The input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the input value. Apply [`input_props`](Self::input_props)
    /// afterwards to push it into the input.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Change handler: stores the input's new value as is.
    pub fn handle_change(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    /// The element binding handed to the input.
    pub fn input_ref(&self) -> InputRef {
        self.input_ref
    }

    /// Props for the text input; empty when password mode is off.
    pub fn input_props(&self) -> InputProps {
        if !self.password.is_enabled() {
            return InputProps::default();
        }
        InputProps {
            input_type: Some(if self.show_password() {
                InputType::Text
            } else {
                InputType::Password
            }),
            value: Some(self.value.clone()),
            class_name: Some(INPUT_PADDING_CLASS.to_string()),
            input_ref: Some(self.input_ref),
        }
    }

    /// Props for [`InputWrapper`].
    pub fn wrapper_props(&self) -> WrapperProps {
        WrapperProps {
            password: self.password.clone(),
            show_password: self.show_password(),
            on_toggle: self
                .password
                .is_enabled()
                .then(|| Arc::clone(&self.on_toggle)),
            class_names: self.class_names.clone(),
            cn: self.cn.clone(),
        }
    }

    /// The wrapper view.
    pub fn input_wrapper(&self) -> InputWrapper {
        InputWrapper
    }

    /// Flips visibility and returns the command that later delivers the
    /// focus and caret restoration for this toggle.
    pub fn toggle(&mut self) -> Cmd {
        self.visibility = self.visibility.flipped();
        self.restore_tag += 1;
        debug!(
            id = self.id,
            revealed = self.show_password(),
            "password visibility toggled"
        );

        let msg = RestoreFocusMsg {
            id: self.id,
            tag: self.restore_tag,
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Marks the owning view as gone; pending restorations become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Marks the owning view as present again.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Whether the owning view is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Routes a message.
    ///
    /// Handles this toggle's [`ToggleMsg`] and [`RestoreFocusMsg`] and the
    /// toggle key binding. With password mode off, clicks and the key
    /// binding are ignored.
    /// Anything else goes to `input`, whose new value is then passed to
    /// [`handle_change`](Self::handle_change). `input` is `None` when the
    /// input is not mounted.
    ///
    /// The input is bound once, when the host first applies
    /// [`input_props`](Self::input_props); `update` never re-binds it.
    pub fn update(&mut self, msg: Msg, input: Option<&mut TextInput>) -> Option<Cmd> {
        if let Some(toggle) = msg.downcast_ref::<ToggleMsg>() {
            if toggle.id != self.id || !self.password.is_enabled() {
                return None;
            }
            return Some(self.toggle_and_apply(input));
        }

        if let Some(restore) = msg.downcast_ref::<RestoreFocusMsg>() {
            if restore.id != self.id {
                return None;
            }
            return self.restore_focus(restore.tag, input);
        }

        if self.password.is_enabled() {
            if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
                let focused = input.as_ref().is_some_and(|i| i.focused());
                if focused && self.key_map.toggle.matches(key_msg) {
                    return Some(self.toggle_and_apply(input));
                }
            }
        }

        let input = input?;
        let cmd = input.update(msg);
        if self.password.is_enabled() {
            let current = input.value();
            if current != self.value {
                self.handle_change(&current);
            }
            self.sync_input(input);
        }
        cmd
    }

    fn toggle_and_apply(&mut self, input: Option<&mut TextInput>) -> Cmd {
        let cmd = self.toggle();
        if let Some(input) = input {
            self.sync_input(input);
        }
        cmd
    }

    /// Re-applies type and value. The binding is left as the host set it,
    /// so an input detached with `unbind` stays detached.
    fn sync_input(&self, input: &mut TextInput) {
        InputProps {
            input_ref: None,
            ..self.input_props()
        }
        .apply(input);
    }

    fn restore_focus(&mut self, tag: usize, input: Option<&mut TextInput>) -> Option<Cmd> {
        if tag != self.restore_tag {
            trace!(id = self.id, tag, "stale focus restore skipped");
            return None;
        }
        if !self.mounted {
            trace!(id = self.id, "focus restore skipped, unmounted");
            return None;
        }
        let input = match input {
            Some(input) if input.is_bound_to(self.input_ref) => input,
            _ => {
                trace!(id = self.id, "focus restore skipped, input detached");
                return None;
            }
        };

        let cmd = input.focus();
        let len = input.value_len();
        input.set_selection_range(len, len);
        debug!(id = self.id, caret = len, "focus restored after toggle");
        Some(cmd)
    }
}

impl fmt::Debug for PasswordToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordToggle")
            .field("id", &self.id)
            .field("password", &self.password)
            .field("visibility", &self.visibility)
            .field("value_len", &self.value.chars().count())
            .field("mounted", &self.mounted)
            .field("cn", &DebugFn(self.cn.as_ref()))
            .finish_non_exhaustive()
    }
}
