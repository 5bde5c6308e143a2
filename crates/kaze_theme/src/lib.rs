//! Kaze Theme System
//!
//! Design-token overrides for the Kaze component library, validated and
//! materialized as CSS custom properties on a theme root.
//!
//! # Overview
//!
//! The pipeline is:
//!
//! - **Token catalog**: [`TokenKey`] is the closed set of themeable keys,
//!   each mapped to one `--kz-*` CSS variable
//! - **Classification**: [`classify`] derives a [`TokenCategory`] from a
//!   key's structure
//! - **Validation**: [`ValueValidator`] checks a value against its
//!   category's grammar
//! - **Application**: [`OverrideApplier`] writes valid values to a
//!   [`StyleTarget`], in [`OverrideMode::Safe`] or [`OverrideMode::Strict`]
//! - **Provider**: [`ThemeProvider`] sets `data-variant`, `data-mode` and the
//!   `dark` class on a [`ThemeRoot`], then applies overrides
//!
//! # Quick Start
//!
//! ```rust
//! use kaze_theme::{
//!     ColorScheme, DocumentRoot, ThemeProps, ThemeProvider, ThemeVariant, TokenKey,
//!     TokenOverrides,
//! };
//!
//! let overrides = TokenOverrides::new()
//!     .with(TokenKey::BrandPrimary, "#ff5500")
//!     .with(TokenKey::RadiusMd, "not-a-length");
//!
//! let mut root = DocumentRoot::new();
//! let mut provider = ThemeProvider::default();
//! provider
//!     .mount(
//!         ThemeProps::new(ThemeVariant::Glass, ColorScheme::Dark).with_overrides(overrides),
//!         &mut root,
//!     )
//!     .unwrap();
//!
//! assert_eq!(root.attribute("data-mode"), Some("dark"));
//! assert_eq!(root.style().get_property("--kz-color-brand-primary"), Some("#ff5500"));
//! // Safe mode skips the invalid radius
//! assert_eq!(root.style().get_property("--kz-radius-md"), None);
//! ```
//!
//! # Browser
//!
//! With the `web` feature, `web_sys::HtmlElement` implements [`ThemeRoot`]
//! and [`ValueValidator::detect`] validates colors and shadows with the
//! browser's `CSS.supports()`.

pub mod apply;
pub mod config;
pub mod error;
pub mod provider;
pub mod target;
pub mod tokens;
pub mod validate;

#[cfg(feature = "web")]
pub mod dom;

// Re-export commonly used types
pub use apply::{apply_overrides, OverrideApplier, OverrideMode, StyleTarget, TokenOverrides};
pub use config::ThemeConfig;
pub use error::{ConfigError, InvalidTokenValue, Result, ThemeError, UnknownTokenKey};
pub use provider::{ColorScheme, ThemeProps, ThemeProvider, ThemeRoot, ThemeVariant};
pub use target::{DocumentRoot, InlineStyle};
pub use tokens::*;
pub use validate::{CssParser, CssSupports, RegexFallback, ValidationResult, ValueValidator};

#[cfg(feature = "web")]
pub use dom::{document_root, BrowserCss};
