//! Configuration for [`use_password_toggle`](super::use_password_toggle).

use crate::classnames::{ClassNameFn, ClassNames, DebugFn};
use crate::icons::{Icon, IconOverrides};
use std::fmt;

/// Settings for an enabled password mode.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PasswordConfig {
    /// Icon overrides for the toggle button.
    pub icons: IconOverrides,
}

/// Whether password mode is on, and how it is configured.
///
/// `true`/`false` convert into [`PasswordMode::Enabled`] and
/// [`PasswordMode::Disabled`]; a [`PasswordConfig`] converts into
/// [`PasswordMode::Configured`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PasswordMode {
    /// No toggle, no extra structure.
    #[default]
    Disabled,
    /// Toggle with the built-in icons.
    Enabled,
    /// Toggle with custom settings.
    Configured(PasswordConfig),
}

impl PasswordMode {
    /// Whether password mode is on.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, PasswordMode::Disabled)
    }

    /// Icon overrides, when configured.
    pub fn icon_overrides(&self) -> Option<&IconOverrides> {
        match self {
            PasswordMode::Configured(config) => Some(&config.icons),
            _ => None,
        }
    }
}

impl From<bool> for PasswordMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            PasswordMode::Enabled
        } else {
            PasswordMode::Disabled
        }
    }
}

impl From<PasswordConfig> for PasswordMode {
    fn from(config: PasswordConfig) -> Self {
        PasswordMode::Configured(config)
    }
}

impl From<IconOverrides> for PasswordMode {
    fn from(icons: IconOverrides) -> Self {
        PasswordMode::Configured(PasswordConfig { icons })
    }
}

/// Options accepted by [`use_password_toggle`](super::use_password_toggle).
/// Every field is optional.
///
/// ```rust
/// use bubbletea_password_toggle::classnames::ClassNames;
/// use bubbletea_password_toggle::passwordtoggle::PasswordToggleOptions;
///
/// let options = PasswordToggleOptions::new()
///     .password(true)
///     .class_names(ClassNames::new().button("text-foreground"));
/// assert!(options.password.is_enabled());
/// ```
#[derive(Clone, Default)]
pub struct PasswordToggleOptions {
    /// Password mode.
    pub password: PasswordMode,
    /// Class overrides.
    pub class_names: ClassNames,
    /// Class-name combinator used at every merge site.
    pub cn: Option<ClassNameFn>,
}

impl PasswordToggleOptions {
    /// Password mode off, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the password mode from a flag or a config.
    pub fn password(mut self, password: impl Into<PasswordMode>) -> Self {
        self.password = password.into();
        self
    }

    /// Enables password mode with custom icons.
    pub fn icons(mut self, show: Option<Icon>, hide: Option<Icon>) -> Self {
        self.password = IconOverrides { show, hide }.into();
        self
    }

    /// Sets the class overrides.
    pub fn class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    /// Sets the combinator.
    pub fn cn(mut self, cn: ClassNameFn) -> Self {
        self.cn = Some(cn);
        self
    }
}

impl fmt::Debug for PasswordToggleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordToggleOptions")
            .field("password", &self.password)
            .field("class_names", &self.class_names)
            .field("cn", &DebugFn(self.cn.as_ref()))
            .finish()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{PasswordConfig, PasswordMode};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Config(PasswordConfig),
    }

    impl Serialize for PasswordMode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                PasswordMode::Disabled => serializer.serialize_bool(false),
                PasswordMode::Enabled => serializer.serialize_bool(true),
                PasswordMode::Configured(config) => config.serialize(serializer),
            }
        }
    }

    impl<'de> Deserialize<'de> for PasswordMode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(match Option::<Repr>::deserialize(deserializer)? {
                None => PasswordMode::Disabled,
                Some(Repr::Flag(flag)) => flag.into(),
                Some(Repr::Config(config)) => config.into(),
            })
        }
    }
}
