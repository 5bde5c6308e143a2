//! Theme provider
//!
//! The provider owns the current [`ThemeProps`] and pushes them onto a
//! [`ThemeRoot`]: `data-variant` and `data-mode` attributes, the `dark`
//! marker class, then the token overrides. Every sync is a full re-apply of
//! the current props; nothing is remembered about the root between calls.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::apply::{OverrideApplier, OverrideMode, StyleTarget, TokenOverrides};
use crate::error::{ConfigError, InvalidTokenValue};

/// Attribute carrying the visual variant id
pub const VARIANT_ATTRIBUTE: &str = "data-variant";
/// Attribute carrying `light` or `dark`
pub const MODE_ATTRIBUTE: &str = "data-mode";
/// Class present on the root while the dark scheme is active
pub const DARK_CLASS: &str = "dark";

/// A style target that also carries theme-selection attributes and classes
pub trait ThemeRoot: StyleTarget {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn toggle_class(&mut self, class: &str, on: bool);
}

/// Light or dark mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual variant selector consumed by component stylesheets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Flat surfaces
    #[default]
    Default,
    /// Translucent, blurred surfaces driven by the `effect.glass.*` tokens
    Glass,
    /// High-contrast borders and text
    Contrast,
}

impl ThemeVariant {
    /// Stable id written to `data-variant`
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Glass => "glass",
            Self::Contrast => "contrast",
        }
    }

    /// Full variant list
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 3] = [
            ThemeVariant::Default,
            ThemeVariant::Glass,
            ThemeVariant::Contrast,
        ];
        &VARIANTS
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.id() == s)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

/// Inputs the provider reacts to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeProps {
    pub variant: ThemeVariant,
    pub scheme: ColorScheme,
    pub overrides: Option<TokenOverrides>,
    pub override_mode: OverrideMode,
}

impl ThemeProps {
    pub fn new(variant: ThemeVariant, scheme: ColorScheme) -> Self {
        Self {
            variant,
            scheme,
            ..Self::default()
        }
    }

    pub fn with_overrides(mut self, overrides: TokenOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_override_mode(mut self, mode: OverrideMode) -> Self {
        self.override_mode = mode;
        self
    }
}

/// Applies the current theme props to a root element
#[derive(Debug, Default)]
pub struct ThemeProvider {
    props: ThemeProps,
    applier: OverrideApplier,
    mounted: bool,
}

impl ThemeProvider {
    pub fn new(applier: OverrideApplier) -> Self {
        Self {
            props: ThemeProps::default(),
            applier,
            mounted: false,
        }
    }

    /// Take `props` and apply them to `root`
    pub fn mount<R: ThemeRoot + ?Sized>(
        &mut self,
        props: ThemeProps,
        root: &mut R,
    ) -> Result<(), InvalidTokenValue> {
        self.props = props;
        self.mounted = true;
        self.sync(root)
    }

    /// Apply `props` if they differ from the current ones, or if nothing
    /// has been applied yet
    pub fn update<R: ThemeRoot + ?Sized>(
        &mut self,
        props: ThemeProps,
        root: &mut R,
    ) -> Result<(), InvalidTokenValue> {
        if self.mounted && props == self.props {
            return Ok(());
        }
        self.props = props;
        self.mounted = true;
        self.sync(root)
    }

    /// Re-apply the current props unconditionally
    pub fn sync<R: ThemeRoot + ?Sized>(&self, root: &mut R) -> Result<(), InvalidTokenValue> {
        let props = &self.props;
        tracing::debug!(
            variant = props.variant.id(),
            scheme = props.scheme.as_str(),
            overrides = props.overrides.as_ref().map_or(0, TokenOverrides::len),
            "syncing theme root"
        );

        root.set_attribute(VARIANT_ATTRIBUTE, props.variant.id());
        root.set_attribute(MODE_ATTRIBUTE, props.scheme.as_str());
        root.toggle_class(DARK_CLASS, props.scheme.is_dark());

        self.applier
            .apply(root, props.overrides.as_ref(), props.override_mode)
    }

    pub fn props(&self) -> &ThemeProps {
        &self.props
    }
}
