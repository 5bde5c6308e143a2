//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::{TokenCategory, TokenKey};

/// An override value that does not satisfy its token's grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {}: {:?}", .category.label(), .value)]
pub struct InvalidTokenValue {
    /// Token the value was supplied for, if validated against a key
    pub key: Option<TokenKey>,
    /// Grammar that rejected the value
    pub category: TokenCategory,
    /// The raw value as supplied
    pub value: String,
}

impl InvalidTokenValue {
    pub fn new(category: TokenCategory, value: impl Into<String>) -> Self {
        Self {
            key: None,
            category,
            value: value.into(),
        }
    }

    pub fn for_key(key: TokenKey, value: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            category: key.category(),
            value: value.into(),
        }
    }

    /// Human-readable failure reason
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A token key string that is not part of the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown token key: {0:?}")]
pub struct UnknownTokenKey(pub String);

/// Theme configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read theme config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize a config back to TOML
    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The variant selector is not a known variant
    #[error("unknown theme variant: {0:?}")]
    UnknownVariant(String),
}

/// Any error raised by this crate
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error(transparent)]
    InvalidValue(#[from] InvalidTokenValue),

    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenKey),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for theme operations
pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
