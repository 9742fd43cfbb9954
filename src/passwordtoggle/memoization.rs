//! Render cache for [`InputWrapper`].
//!
//! The wrapper is re-rendered on every keystroke of its input even though
//! its own output rarely changes. [`MemoizedWrapper`] keeps the last tree and
//! returns it while the props are shallowly equal.

use super::provider::WrapperProps;
use super::wrapper::InputWrapper;
use crate::classnames::{same_fn, ClassNameFn, ClassNames};
use crate::element::{Attributes, Callback, Element};
use crate::icons::IconOverrides;
use std::sync::Arc;

struct RenderKey {
    enabled: bool,
    icons: Option<IconOverrides>,
    show_password: bool,
    class_names: ClassNames,
    class_name: Option<String>,
    attrs: Attributes,
    children: Vec<Element>,
    on_toggle: Option<Callback>,
    cn: Option<ClassNameFn>,
}

impl RenderKey {
    fn new(
        props: &WrapperProps,
        class_name: Option<&str>,
        attrs: &Attributes,
        children: &[Element],
    ) -> Self {
        Self {
            enabled: props.password.is_enabled(),
            icons: props.password.icon_overrides().cloned(),
            show_password: props.show_password,
            class_names: props.class_names.clone(),
            class_name: class_name.map(str::to_string),
            attrs: attrs.clone(),
            children: children.to_vec(),
            on_toggle: props.on_toggle.clone(),
            cn: props.cn.clone(),
        }
    }

    fn same_as(&self, other: &RenderKey) -> bool {
        self.enabled == other.enabled
            && self.show_password == other.show_password
            && self.icons == other.icons
            && self.class_names == other.class_names
            && self.class_name == other.class_name
            && self.attrs == other.attrs
            && self.children == other.children
            && same_fn(self.cn.as_ref(), other.cn.as_ref())
            && match (&self.on_toggle, &other.on_toggle) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

/// An [`InputWrapper`] that skips rendering when nothing changed.
#[derive(Default)]
pub struct MemoizedWrapper {
    wrapper: InputWrapper,
    last: Option<(RenderKey, Element)>,
    renders: usize,
}

impl MemoizedWrapper {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders through the cache.
    pub fn render(
        &mut self,
        props: &WrapperProps,
        class_name: Option<&str>,
        attrs: &Attributes,
        children: Vec<Element>,
    ) -> Element {
        let key = RenderKey::new(props, class_name, attrs, &children);

        if let Some((last_key, element)) = &self.last {
            if last_key.same_as(&key) {
                return element.clone();
            }
        }

        let element = self.wrapper.render(props, class_name, attrs, children);
        self.renders += 1;
        self.last = Some((key, element.clone()));
        element
    }

    /// How many times the wrapper actually rendered.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Drops the cached tree.
    pub fn clear_cache(&mut self) {
        self.last = None;
    }
}
