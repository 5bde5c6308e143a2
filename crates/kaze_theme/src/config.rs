//! Theme configuration file handling
//!
//! ```toml
//! variant = "glass"
//! mode = "dark"
//! override_mode = "strict"
//!
//! [overrides]
//! "color.brand.primary" = "#ff5500"
//! "radius.md" = "12px"
//! ```
//!
//! Override keys must name catalog tokens; they are kept in file order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::apply::{OverrideMode, TokenOverrides};
use crate::error::ConfigError;
use crate::provider::{ColorScheme, ThemeProps, ThemeVariant};

/// Top-level theme configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub variant: ThemeVariant,
    #[serde(default)]
    pub mode: ColorScheme,
    #[serde(default)]
    pub override_mode: OverrideMode,
    #[serde(default)]
    pub overrides: TokenOverrides,
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            overrides = config.overrides.len(),
            "loaded theme config"
        );
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Provider inputs described by this config
    pub fn props(&self) -> ThemeProps {
        let props = ThemeProps::new(self.variant, self.mode).with_override_mode(self.override_mode);
        if self.overrides.is_empty() {
            props
        } else {
            props.with_overrides(self.overrides.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.props(), ThemeProps::default());
    }

    #[test]
    fn parses_all_fields_in_order() {
        let config = ThemeConfig::from_toml_str(
            r##"
            variant = "glass"
            mode = "dark"
            override_mode = "strict"

            [overrides]
            "radius.md" = "12px"
            "color.brand.primary" = "#ff5500"
            "motion.easing.standard" = "cubic-bezier(0.2, 0, 0, 1)"
            "##,
        )
        .unwrap();

        assert_eq!(config.variant, ThemeVariant::Glass);
        assert_eq!(config.mode, ColorScheme::Dark);
        assert_eq!(config.override_mode, OverrideMode::Strict);
        let keys: Vec<_> = config.overrides.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                TokenKey::RadiusMd,
                TokenKey::BrandPrimary,
                TokenKey::MotionEasingStandard
            ]
        );
    }

    #[test]
    fn unknown_override_key_names_the_key() {
        let err = ThemeConfig::from_toml_str("[overrides]\n\"color.brand.neon\" = \"#fff\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("color.brand.neon"), "{err}");
    }

    #[test]
    fn unknown_variant_and_fields_are_rejected() {
        assert!(ThemeConfig::from_toml_str("variant = \"neon\"").is_err());
        assert!(ThemeConfig::from_toml_str("colour = \"dark\"").is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = ThemeConfig {
            variant: ThemeVariant::Contrast,
            mode: ColorScheme::Dark,
            override_mode: OverrideMode::Safe,
            overrides: TokenOverrides::new()
                .with(TokenKey::Space4, "18px")
                .with(TokenKey::FontFamilySans, "Inter, sans-serif"),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ThemeConfig::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/theme.toml"));
    }
}
