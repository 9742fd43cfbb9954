//! Icons for the toggle button.
//!
//! An [`Icon`] is a small vector drawing (a list of [`Shape`]s on a square
//! view box) plus the glyph used when it is drawn in a terminal cell. The
//! two built-ins are [`eye`] (reveal) and [`eye_off`] (mask).

use std::borrow::Cow;

/// Default icon edge length.
pub const ICON_SIZE: u16 = 16;
/// Side of the coordinate space shapes are drawn in.
pub const VIEW_BOX: u16 = 24;

/// A drawing primitive, in view-box coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// Path data in SVG path syntax.
    Path(Cow<'static, str>),
    /// A circle.
    Circle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        r: f32,
    },
    /// A straight stroke.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
    },
}

impl Shape {
    fn write_svg(&self, out: &mut String) {
        use std::fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = match self {
            Shape::Path(d) => write!(out, r#"<path d="{}"/>"#, d),
            Shape::Circle { cx, cy, r } => {
                write!(out, r#"<circle cx="{}" cy="{}" r="{}"/>"#, cx, cy, r)
            }
            Shape::Line { x1, y1, x2, y2 } => write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                x1, y1, x2, y2
            ),
        };
    }
}

/// A renderable icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    name: Cow<'static, str>,
    glyph: Cow<'static, str>,
    size: u16,
    shapes: Vec<Shape>,
}

impl Icon {
    /// Creates an icon with no shapes that renders as `glyph` in a terminal.
    ///
    /// ```rust
    /// use bubbletea_password_toggle::icons::Icon;
    ///
    /// let show = Icon::new("show", "S");
    /// assert_eq!(show.glyph(), "S");
    /// assert!(show.shapes().is_empty());
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>, glyph: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            size: ICON_SIZE,
            shapes: Vec::new(),
        }
    }

    /// Adds a shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Sets the rendered edge length.
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    /// Icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terminal glyph.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Rendered edge length.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Drawing primitives.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Complete SVG markup at the icon's size, stroked in `currentColor`.
    ///
    /// ```rust
    /// use bubbletea_password_toggle::icons::eye;
    ///
    /// let svg = eye().with_size(20).to_svg();
    /// assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24""#));
    /// assert!(svg.contains(r#"<circle cx="12" cy="12" r="3"/>"#));
    /// ```
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            size = self.size,
            vb = VIEW_BOX,
        );
        for shape in &self.shapes {
            shape.write_svg(&mut svg);
        }
        svg.push_str("</svg>");
        svg
    }

    /// Looks up a built-in icon by name: `"eye"` or `"eye-off"`.
    pub fn named(name: &str) -> Option<Icon> {
        match name {
            "eye" => Some(eye()),
            "eye-off" => Some(eye_off()),
            _ => None,
        }
    }
}

/// Open eye, shown while the password is masked.
pub fn eye() -> Icon {
    Icon::new("eye", "◉")
        .with_shape(Shape::Path(Cow::Borrowed(
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
        )))
        .with_shape(Shape::Circle {
            cx: 12.0,
            cy: 12.0,
            r: 3.0,
        })
}

/// Slashed eye, shown while the password is revealed.
pub fn eye_off() -> Icon {
    Icon::new("eye-off", "⊘")
        .with_shape(Shape::Path(Cow::Borrowed("M9.88 9.88a3 3 0 1 0 4.24 4.24")))
        .with_shape(Shape::Path(Cow::Borrowed(
            "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
        )))
        .with_shape(Shape::Path(Cow::Borrowed(
            "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
        )))
        .with_shape(Shape::Line {
            x1: 2.0,
            y1: 2.0,
            x2: 22.0,
            y2: 22.0,
        })
}

/// Caller-supplied icons; each missing entry falls back to the built-in.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IconOverrides {
    /// Icon shown while masked.
    pub show: Option<Icon>,
    /// Icon shown while revealed.
    pub hide: Option<Icon>,
}

/// The pair of icons a toggle button switches between.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    /// Shown while masked; clicking reveals.
    pub show: Icon,
    /// Shown while revealed; clicking masks.
    pub hide: Icon,
}

impl IconSet {
    /// Resolves overrides against the built-ins.
    pub fn resolve(overrides: Option<&IconOverrides>) -> Self {
        let pick = |o: Option<&Icon>, fallback: fn() -> Icon| o.cloned().unwrap_or_else(fallback);
        Self {
            show: pick(overrides.and_then(|o| o.show.as_ref()), eye),
            hide: pick(overrides.and_then(|o| o.hide.as_ref()), eye_off),
        }
    }

    /// The icon for the current visibility.
    pub fn for_visibility(&self, revealed: bool) -> &Icon {
        if revealed {
            &self.hide
        } else {
            &self.show
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Built-in icons are written by name; any other icon is written out in
    //! full so it reads back unchanged.

    use super::{Icon, Shape, ICON_SIZE};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::borrow::Cow;

    #[derive(Serialize)]
    struct IconRef<'a> {
        name: &'a str,
        glyph: &'a str,
        size: u16,
        shapes: &'a [Shape],
    }

    #[derive(Deserialize)]
    struct IconData {
        name: String,
        glyph: String,
        #[serde(default = "default_size")]
        size: u16,
        #[serde(default)]
        shapes: Vec<Shape>,
    }

    fn default_size() -> u16 {
        ICON_SIZE
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Name(String),
        Full(IconData),
    }

    impl Serialize for Icon {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if Icon::named(self.name()).as_ref() == Some(self) {
                return serializer.serialize_str(self.name());
            }
            IconRef {
                name: self.name(),
                glyph: self.glyph(),
                size: self.size(),
                shapes: self.shapes(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Icon {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Repr::deserialize(deserializer)? {
                Repr::Name(name) => Icon::named(&name)
                    .ok_or_else(|| D::Error::custom(format!("unknown icon `{}`", name))),
                Repr::Full(data) => Ok(Icon {
                    name: Cow::Owned(data.name),
                    glyph: Cow::Owned(data.glyph),
                    size: data.size,
                    shapes: data.shapes,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_distinct_vector_icons() {
        let (open, slashed) = (eye(), eye_off());
        assert_ne!(open, slashed);
        assert_eq!(open.size(), ICON_SIZE);
        assert!(!open.shapes().is_empty());
        assert!(slashed
            .shapes()
            .iter()
            .any(|s| matches!(s, Shape::Line { .. })));
    }

    #[test]
    fn test_resolve_defaults() {
        let set = IconSet::resolve(None);
        assert_eq!(set.show, eye());
        assert_eq!(set.hide, eye_off());
    }

    #[test]
    fn test_resolve_partial_override() {
        let overrides = IconOverrides {
            show: Some(Icon::new("a", "A")),
            hide: None,
        };
        let set = IconSet::resolve(Some(&overrides));
        assert_eq!(set.show.name(), "a");
        assert_eq!(set.hide, eye_off());
    }

    #[test]
    fn test_for_visibility() {
        let set = IconSet::default();
        assert_eq!(set.for_visibility(false).name(), "eye");
        assert_eq!(set.for_visibility(true).name(), "eye-off");
    }

    #[test]
    fn test_svg_uses_size_and_shapes() {
        let svg = eye_off().to_svg();
        assert!(svg.contains(r#"width="16" height="16" viewBox="0 0 24 24""#));
        assert!(svg.contains(r#"<line x1="2" y1="2" x2="22" y2="22"/>"#));
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.ends_with("</svg>"));

        let custom = Icon::new("dot", ".").with_size(12).to_svg();
        assert!(custom.contains(r#"width="12" height="12""#));
        assert!(!custom.contains("<path"));
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(Icon::named("eye"), Some(eye()));
        assert_eq!(Icon::named("eye-off"), Some(eye_off()));
        assert_eq!(Icon::named("lock"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_builtin_icons_serialize_by_name() {
        assert_eq!(serde_json::to_string(&eye()).unwrap(), r#""eye""#);
        let renamed = Icon::new("eye", "E");
        let json = serde_json::to_string(&renamed).unwrap();
        assert!(json.starts_with('{'));
        assert_eq!(serde_json::from_str::<Icon>(&json).unwrap(), renamed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_custom_icon_round_trips() {
        let icon = Icon::new("key", "K")
            .with_size(20)
            .with_shape(Shape::Path(Cow::Borrowed("M2 2h20")))
            .with_shape(Shape::Circle {
                cx: 7.5,
                cy: 15.5,
                r: 5.5,
            });
        let json = serde_json::to_string(&icon).unwrap();
        assert_eq!(serde_json::from_str::<Icon>(&json).unwrap(), icon);

        let short: Icon = serde_json::from_str(r#"{"name":"k","glyph":"K"}"#).unwrap();
        assert_eq!(short.size(), ICON_SIZE);
        assert!(short.shapes().is_empty());
    }
}
