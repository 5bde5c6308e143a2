//! Applying token overrides as CSS custom properties
//!
//! The applier walks a [`TokenOverrides`] map in insertion order, validates
//! each value, and writes the valid ones to a [`StyleTarget`] as
//! `--kz-*` properties. What happens to an invalid value depends on the
//! [`OverrideMode`]:
//!
//! - **Safe** (default): the entry is skipped and logged; the rest apply.
//! - **Strict**: the call returns the first failure. Entries applied before
//!   it stay applied and entries after it are never touched.
//!
//! ```rust
//! use kaze_theme::{InlineStyle, OverrideApplier, OverrideMode, TokenKey, TokenOverrides};
//!
//! let overrides = TokenOverrides::new()
//!     .with(TokenKey::BrandPrimary, "#ff5500")
//!     .with(TokenKey::RadiusMd, "12px");
//!
//! let mut style = InlineStyle::new();
//! OverrideApplier::default()
//!     .apply(&mut style, Some(&overrides), OverrideMode::Safe)
//!     .unwrap();
//!
//! assert_eq!(style.get_property("--kz-radius-md"), Some("12px"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::InvalidTokenValue;
use crate::tokens::TokenKey;
use crate::validate::ValueValidator;

/// Failure policy for invalid override values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// Skip invalid entries and keep going
    #[default]
    Safe,
    /// Abort on the first invalid entry
    Strict,
}

impl OverrideMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Strict => "strict",
        }
    }
}

/// Something inline custom properties can be written to
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Caller-supplied token values, kept in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenOverrides {
    entries: IndexMap<TokenKey, String>,
}

impl TokenOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: TokenKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, keeping its original position if it was already present
    pub fn insert(&mut self, key: TokenKey, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key, value.into())
    }

    pub fn remove(&mut self, key: TokenKey) -> Option<String> {
        self.entries.shift_remove(&key)
    }

    pub fn get(&self, key: TokenKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(TokenKey, V)> for TokenOverrides {
    fn from_iter<I: IntoIterator<Item = (TokenKey, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}

impl<V: Into<String>> Extend<(TokenKey, V)> for TokenOverrides {
    fn extend<I: IntoIterator<Item = (TokenKey, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Validates overrides and materializes them on a target
#[derive(Debug, Default)]
pub struct OverrideApplier {
    validator: ValueValidator,
}

impl OverrideApplier {
    pub fn new(validator: ValueValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &ValueValidator {
        &self.validator
    }

    /// Apply `overrides` to `target`.
    ///
    /// `None` or an empty map is a no-op. In strict mode the first invalid
    /// entry is returned as the error; nothing is rolled back.
    pub fn apply<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        overrides: Option<&TokenOverrides>,
        mode: OverrideMode,
    ) -> Result<(), InvalidTokenValue> {
        let Some(overrides) = overrides else {
            return Ok(());
        };

        for (key, raw) in overrides.iter() {
            match self.validator.validate(key, raw) {
                Ok(()) => {
                    let value = raw.trim();
                    tracing::debug!(token = %key, var = key.css_var(), value, "applying token override");
                    target.set_property(key.css_var(), value);
                }
                Err(err) => match mode {
                    OverrideMode::Safe => {
                        tracing::warn!(token = %key, "skipping token override: {err}");
                    }
                    OverrideMode::Strict => return Err(err),
                },
            }
        }
        Ok(())
    }
}

/// Apply overrides with a validator detected for the current host
pub fn apply_overrides<T: StyleTarget + ?Sized>(
    target: &mut T,
    overrides: Option<&TokenOverrides>,
    mode: OverrideMode,
) -> Result<(), InvalidTokenValue> {
    OverrideApplier::default().apply(target, overrides, mode)
}
