//! Rendered element tree.
//!
//! Views in this crate produce an [`Element`] tree instead of a string so
//! that structure (class names, attributes, accessible labels, click
//! handlers) can be inspected and compared. [`Element::render`] turns a tree
//! into terminal output, resolving class tokens through a [`StyleSheet`].
//!
//! ```rust
//! use bubbletea_password_toggle::element::{Element, StyleSheet};
//!
//! let tree = Element::container("relative", vec![Element::text("hello")]);
//! assert_eq!(tree.class_name(), Some("relative"));
//! assert!(tree.render(&StyleSheet::default()).contains("hello"));
//! ```

use crate::icons::Icon;
use crate::textinput::Model as TextInput;
use bubbletea_rs::Msg;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Pass-through container attributes such as `data-*` or `id`.
pub type Attributes = BTreeMap<String, String>;

/// Click handler: produces the message the click stands for.
pub type Callback = Arc<dyn Fn() -> Msg + Send + Sync>;

/// A node of the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A styled group of children laid out left to right.
    Container(Container),
    /// An interactive button.
    Button(Button),
    /// A text input, already rendered.
    Input(InputNode),
    /// Plain text.
    Text(String),
}

/// A container node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    /// Class names.
    pub class_name: String,
    /// Pass-through attributes.
    pub attrs: Attributes,
    /// Child nodes.
    pub children: Vec<Element>,
}

/// A button node.
#[derive(Clone)]
pub struct Button {
    /// Class names.
    pub class_name: String,
    /// Accessible label; names the action a click performs.
    pub aria_label: String,
    /// Icon drawn inside the button.
    pub icon: Icon,
    /// Click handler.
    pub on_click: Option<Callback>,
}

impl Button {
    /// Invokes the click handler, returning its message.
    pub fn click(&self) -> Option<Msg> {
        self.on_click.as_ref().map(|f| f())
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("class_name", &self.class_name)
            .field("aria_label", &self.aria_label)
            .field("icon", &self.icon.name())
            .field("on_click", &self.on_click.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl PartialEq for Button {
    // Handlers compare by identity.
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.aria_label == other.aria_label
            && self.icon == other.icon
            && match (&self.on_click, &other.on_click) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

/// A text input node: its class names and its rendered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputNode {
    /// Class names of the input.
    pub class_name: String,
    /// Rendered input.
    pub content: String,
}

impl Element {
    /// A container with class names and children.
    pub fn container(class_name: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Container(Container {
            class_name: class_name.into(),
            attrs: Attributes::new(),
            children,
        })
    }

    /// Plain text.
    pub fn text(s: impl Into<String>) -> Self {
        Element::Text(s.into())
    }

    /// Snapshot of a text input.
    pub fn input(input: &TextInput) -> Self {
        Element::Input(InputNode {
            class_name: input.class_name().to_string(),
            content: input.view(),
        })
    }

    /// Class names of this node, if it carries any.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Element::Container(c) => Some(&c.class_name),
            Element::Button(b) => Some(&b.class_name),
            Element::Input(i) => Some(&i.class_name),
            Element::Text(_) => None,
        }
    }

    /// Child nodes of a container; empty for everything else.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Container(c) => &c.children,
            _ => &[],
        }
    }

    /// Attributes of a container.
    pub fn attrs(&self) -> Option<&Attributes> {
        match self {
            Element::Container(c) => Some(&c.attrs),
            _ => None,
        }
    }

    /// First button in the tree, depth first.
    pub fn find_button(&self) -> Option<&Button> {
        match self {
            Element::Button(b) => Some(b),
            Element::Container(c) => c.children.iter().find_map(Element::find_button),
            _ => None,
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Element::count).sum::<usize>()
    }

    /// Renders the tree for a terminal.
    pub fn render(&self, sheet: &StyleSheet) -> String {
        match self {
            Element::Text(s) => s.clone(),
            Element::Input(i) => sheet.apply(&i.class_name, &i.content),
            Element::Button(b) => sheet.apply(&b.class_name, b.icon.glyph()),
            Element::Container(c) => {
                let parts: Vec<String> = c.children.iter().map(|e| e.render(sheet)).collect();
                let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
                let joined = match refs.len() {
                    0 => String::new(),
                    1 => parts[0].clone(),
                    _ => lipgloss::join_horizontal(lipgloss::TOP, &refs),
                };
                sheet.apply(&c.class_name, &joined)
            }
        }
    }
}

/// Maps class tokens to terminal styles.
///
/// Tokens without a rule are ignored, so web-oriented class names can be
/// passed through untouched.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    rules: HashMap<String, Style>,
}

impl StyleSheet {
    /// A sheet with no rules.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds or replaces the rule for `token`.
    pub fn with_rule(mut self, token: impl Into<String>, style: Style) -> Self {
        self.rules.insert(token.into(), style);
        self
    }

    /// The rule for `token`.
    pub fn rule(&self, token: &str) -> Option<&Style> {
        self.rules.get(token)
    }

    /// Renders `content` with the rules of every known token, in order.
    pub fn apply(&self, class_name: &str, content: &str) -> String {
        class_name
            .split_whitespace()
            .filter_map(|token| self.rules.get(token))
            .fold(content.to_string(), |acc, style| style.render(&acc))
    }
}

impl Default for StyleSheet {
    /// Rules for the classes the password wrapper uses by default.
    fn default() -> Self {
        Self::empty()
            .with_rule("pr-10", Style::new().padding(0, 1, 0, 0))
            .with_rule("pr-3", Style::new().padding(0, 1, 0, 0))
            .with_rule("text-muted-foreground", Style::new().foreground("#666666"))
            .with_rule("text-foreground", Style::new().foreground("#dddddd"))
            .with_rule("text-destructive", Style::new().foreground("#ff5f56"))
            .with_rule("font-bold", Style::new().bold(true))
            .with_rule("underline", Style::new().underline(true))
            .with_rule("faint", Style::new().faint(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::eye;

    fn plain(s: &str) -> String {
        lipgloss::strip_ansi(s)
    }

    fn button(on_click: Option<Callback>) -> Button {
        Button {
            class_name: "btn".to_string(),
            aria_label: "Show password".to_string(),
            icon: eye(),
            on_click,
        }
    }

    #[test]
    fn test_find_button_searches_depth_first() {
        let tree = Element::container(
            "outer",
            vec![
                Element::text("a"),
                Element::container("inner", vec![Element::Button(button(None))]),
            ],
        );
        assert_eq!(tree.find_button().map(|b| b.aria_label.as_str()), Some("Show password"));
        assert_eq!(tree.count(), 4);
        assert!(Element::text("x").find_button().is_none());
    }

    #[test]
    fn test_button_click_yields_message() {
        #[derive(Debug)]
        struct Clicked;
        let b = button(Some(Arc::new(|| Box::new(Clicked) as Msg)));
        let msg = b.click().expect("click handler");
        assert!(msg.downcast_ref::<Clicked>().is_some());
        assert!(button(None).click().is_none());
    }

    #[test]
    fn test_button_equality_uses_handler_identity() {
        let handler: Callback = Arc::new(|| Box::new(()) as Msg);
        let a = button(Some(handler.clone()));
        let b = button(Some(handler));
        let c = button(Some(Arc::new(|| Box::new(()) as Msg)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_render_joins_children_and_draws_glyphs() {
        let tree = Element::container(
            "relative",
            vec![Element::text("****"), Element::Button(button(None))],
        );
        let out = plain(&tree.render(&StyleSheet::empty()));
        assert!(out.contains("****"));
        assert!(out.contains(eye().glyph()));
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let sheet = StyleSheet::empty();
        assert_eq!(sheet.apply("hover:text-foreground absolute", "x"), "x");
    }

    #[test]
    fn test_known_tokens_apply() {
        let sheet = StyleSheet::default();
        assert!(sheet.rule("pr-10").is_some());
        let out = plain(&sheet.apply("pr-10", "x"));
        assert!(out.starts_with('x'));
        assert!(out.len() > 1);
    }

    #[test]
    fn test_input_snapshot_carries_class() {
        let mut input = crate::textinput::new();
        input.set_class_name("pr-10");
        input.set_value("abc");
        match Element::input(&input) {
            Element::Input(node) => {
                assert_eq!(node.class_name, "pr-10");
                assert!(plain(&node.content).contains("abc"));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }
}
