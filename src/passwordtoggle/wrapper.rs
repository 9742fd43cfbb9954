//! The wrapper view around a password input.

use super::provider::WrapperProps;
use crate::classnames::combine;
use crate::element::{Attributes, Button, Container, Element, StyleSheet};
use crate::icons::IconSet;
use crate::textinput::Model as TextInput;

/// Built-in wrapper class.
pub const DEFAULT_WRAPPER_CLASS: &str = "relative";
/// Built-in class of the container holding the button.
pub const DEFAULT_SUFFIX_CLASS: &str = "absolute inset-y-0 right-0 flex items-center pr-3";
/// Built-in button class.
pub const DEFAULT_BUTTON_CLASS: &str =
    "text-muted-foreground hover:text-foreground focus:outline-none";

/// Button label while masked.
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
/// Button label while revealed.
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// Stateless container for a password input.
///
/// With password mode off it is a plain container. With it on, the children
/// are followed by a suffix container holding the toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputWrapper;

impl InputWrapper {
    /// Renders `children` inside the wrapper.
    ///
    /// `class_name` and `attrs` are the caller's own container class and
    /// attributes; attributes are passed through unchanged.
    pub fn render(
        &self,
        props: &WrapperProps,
        class_name: Option<&str>,
        attrs: &Attributes,
        children: Vec<Element>,
    ) -> Element {
        if !props.password.is_enabled() {
            return Element::Container(Container {
                class_name: class_name.unwrap_or_default().to_string(),
                attrs: attrs.clone(),
                children,
            });
        }

        let cn = props.cn.as_ref();
        let overrides = &props.class_names;
        let wrapper_class = combine(
            cn,
            &[Some(DEFAULT_WRAPPER_CLASS), overrides.wrapper.as_deref()],
        );
        let suffix_class = combine(
            cn,
            &[Some(DEFAULT_SUFFIX_CLASS), overrides.suffix.as_deref()],
        );
        let button_class = combine(
            cn,
            &[Some(DEFAULT_BUTTON_CLASS), overrides.button.as_deref()],
        );
        let outer_class = combine(cn, &[Some(wrapper_class.as_str()), class_name]);

        let icons = IconSet::resolve(props.password.icon_overrides());
        let label = if props.show_password {
            HIDE_PASSWORD_LABEL
        } else {
            SHOW_PASSWORD_LABEL
        };
        let button = Button {
            class_name: button_class,
            aria_label: label.to_string(),
            icon: icons.for_visibility(props.show_password).clone(),
            on_click: props.on_toggle.clone(),
        };

        let mut all = children;
        all.push(Element::container(suffix_class, vec![Element::Button(button)]));
        Element::Container(Container {
            class_name: outer_class,
            attrs: attrs.clone(),
            children: all,
        })
    }

    /// Renders `input` inside the wrapper straight to terminal output.
    pub fn view(&self, props: &WrapperProps, input: &TextInput, sheet: &StyleSheet) -> String {
        self.render(props, None, &Attributes::new(), vec![Element::input(input)])
            .render(sheet)
    }
}
