//! Class-name composition.
//!
//! Every place that merges class names goes through a combinator (`cn`).
//! Callers may inject their own, for example one that resolves conflicting
//! utility classes; without one, [`join_classes`] is used.
//!
//! ```rust
//! use bubbletea_password_toggle::classnames::{class_name_fn, combine, join_classes};
//!
//! assert_eq!(join_classes(&[Some("relative"), None, Some(""), Some("w-full")]), "relative w-full");
//!
//! let upper = class_name_fn(|parts| join_classes(parts).to_uppercase());
//! assert_eq!(combine(Some(&upper), &[Some("a"), Some("b")]), "A B");
//! ```

use std::fmt;
use std::sync::Arc;

/// A class-name combinator: merges fragments, skipping missing ones, into a
/// single class string.
pub type ClassNameFn = Arc<dyn Fn(&[Option<&str>]) -> String + Send + Sync>;

/// Wraps a closure as a [`ClassNameFn`].
pub fn class_name_fn<F>(f: F) -> ClassNameFn
where
    F: Fn(&[Option<&str>]) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Default combinator: joins present, non-blank fragments with one space.
pub fn join_classes(fragments: &[Option<&str>]) -> String {
    fragments
        .iter()
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merges `fragments` with `cn` when given, otherwise with [`join_classes`].
pub fn combine(cn: Option<&ClassNameFn>, fragments: &[Option<&str>]) -> String {
    match cn {
        Some(cn) => cn(fragments),
        None => join_classes(fragments),
    }
}

/// Caller overrides for the three class strings of the password wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Added to the outer container.
    pub wrapper: Option<String>,
    /// Added to the container holding the toggle button.
    pub suffix: Option<String>,
    /// Added to the toggle button.
    pub button: Option<String>,
}

impl ClassNames {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrapper override.
    pub fn wrapper(mut self, class: impl Into<String>) -> Self {
        self.wrapper = Some(class.into());
        self
    }

    /// Sets the suffix override.
    pub fn suffix(mut self, class: impl Into<String>) -> Self {
        self.suffix = Some(class.into());
        self
    }

    /// Sets the button override.
    pub fn button(mut self, class: impl Into<String>) -> Self {
        self.button = Some(class.into());
        self
    }
}

/// Identity of an optional combinator, for shallow prop comparison.
pub(crate) fn same_fn(a: Option<&ClassNameFn>, b: Option<&ClassNameFn>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

pub(crate) struct DebugFn<'a>(pub Option<&'a ClassNameFn>);

impl fmt::Debug for DebugFn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0.is_some() { "Some(<fn>)" } else { "None" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_missing_and_blank_fragments() {
        assert_eq!(join_classes(&[]), "");
        assert_eq!(join_classes(&[None, Some("  ")]), "");
        assert_eq!(join_classes(&[Some("a"), None, Some("b")]), "a b");
        assert_eq!(join_classes(&[Some(" a "), Some("b ")]), "a b");
    }

    #[test]
    fn test_join_never_doubles_separators() {
        let joined = join_classes(&[Some("btn"), Some("")]);
        assert_eq!(joined, "btn");
        assert!(!joined.contains("  "));
        assert!(!joined.ends_with(' '));
    }

    #[test]
    fn test_combine_prefers_injected_fn() {
        let sentinel = class_name_fn(|_| "SENTINEL".to_string());
        assert_eq!(combine(Some(&sentinel), &[Some("a")]), "SENTINEL");
        assert_eq!(combine(None, &[Some("a"), Some("b")]), "a b");
    }

    #[test]
    fn test_injected_fn_sees_missing_fragments() {
        let count = class_name_fn(|parts| parts.len().to_string());
        assert_eq!(combine(Some(&count), &[Some("a"), None]), "2");
    }

    #[test]
    fn test_same_fn_compares_identity() {
        let a = class_name_fn(join_classes);
        let b = class_name_fn(join_classes);
        assert!(same_fn(Some(&a), Some(&a.clone())));
        assert!(!same_fn(Some(&a), Some(&b)));
        assert!(same_fn(None, None));
        assert!(!same_fn(Some(&a), None));
    }

    #[test]
    fn test_class_names_builder() {
        let names = ClassNames::new().button("extra").wrapper("w-64");
        assert_eq!(names.button.as_deref(), Some("extra"));
        assert_eq!(names.wrapper.as_deref(), Some("w-64"));
        assert_eq!(names.suffix, None);
    }
}
