//! Token value validation
//!
//! [`ValueValidator`] classifies a key, trims the raw value, and checks it
//! against the grammar of the key's [`TokenCategory`]. Colors and shadows
//! are delegated to an injected [`CssSupports`] capability: the browser's
//! `CSS.supports()` when available, [`CssParser`] for headless hosts that
//! want full syntax checks, or the loose [`RegexFallback`].

mod css;
mod grammar;

pub use css::CssParser;
pub use grammar::RegexFallback;

use std::fmt;

use crate::apply::TokenOverrides;
use crate::error::InvalidTokenValue;
use crate::tokens::{TokenCategory, TokenKey};

/// Outcome of validating one value
pub type ValidationResult = Result<(), InvalidTokenValue>;

/// A host facility that can tell whether a value is valid for a CSS property
pub trait CssSupports {
    /// Whether `value` parses for `property` (`"color"` or `"box-shadow"`)
    fn supports(&self, property: &str, value: &str) -> bool;

    /// Whether this is a real CSS parser rather than the regex fallback
    fn is_native(&self) -> bool {
        true
    }
}

/// Checks override values against their token's grammar
pub struct ValueValidator {
    css: Box<dyn CssSupports>,
}

impl ValueValidator {
    /// Validator for hosts without a CSS parser
    pub fn fallback() -> Self {
        Self {
            css: Box::new(RegexFallback),
        }
    }

    /// Validator using `css` for color and shadow values
    pub fn with_native(css: impl CssSupports + 'static) -> Self {
        Self { css: Box::new(css) }
    }

    /// Use the browser's CSS parser when running in one, otherwise the
    /// regex fallback
    pub fn detect() -> Self {
        #[cfg(feature = "web")]
        if let Some(browser) = crate::dom::BrowserCss::detect() {
            return Self::with_native(browser);
        }
        Self::fallback()
    }

    /// Whether color and shadow checks go through a real CSS parser
    pub fn is_native(&self) -> bool {
        self.css.is_native()
    }

    /// Validate `raw` as an override for `key`
    pub fn validate(&self, key: TokenKey, raw: &str) -> ValidationResult {
        if self.accepts(key.category(), raw) {
            Ok(())
        } else {
            Err(InvalidTokenValue::for_key(key, raw))
        }
    }

    /// Validate `raw` against a category's grammar directly
    pub fn validate_as(&self, category: TokenCategory, raw: &str) -> ValidationResult {
        if self.accepts(category, raw) {
            Ok(())
        } else {
            Err(InvalidTokenValue::new(category, raw))
        }
    }

    /// Validate every entry without applying anything, in map order
    pub fn check_all(&self, overrides: &TokenOverrides) -> Vec<InvalidTokenValue> {
        overrides
            .iter()
            .filter_map(|(key, raw)| self.validate(key, raw).err())
            .collect()
    }

    fn accepts(&self, category: TokenCategory, raw: &str) -> bool {
        let value = raw.trim();
        match category {
            TokenCategory::Color => self.css.supports("color", value),
            TokenCategory::Shadow => value == "none" || self.css.supports("box-shadow", value),
            TokenCategory::Length => grammar::is_length(value),
            TokenCategory::Number => grammar::is_number(value),
            TokenCategory::FontFamily => !value.is_empty(),
            TokenCategory::FontWeight => grammar::is_font_weight(value),
            TokenCategory::Duration => grammar::is_duration(value),
            TokenCategory::Easing => grammar::is_easing(value),
            TokenCategory::LineHeight => grammar::is_line_height(value),
        }
    }
}

impl Default for ValueValidator {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Debug for ValueValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueValidator")
            .field("native", &self.is_native())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn validators() -> [ValueValidator; 2] {
        [
            ValueValidator::fallback(),
            ValueValidator::with_native(CssParser::new()),
        ]
    }

    fn keys_of(category: TokenCategory) -> impl Iterator<Item = TokenKey> {
        TokenKey::ALL
            .iter()
            .copied()
            .filter(move |k| k.category() == category)
    }

    #[test]
    fn colors() {
        for validator in validators() {
            for key in keys_of(TokenCategory::Color) {
                for ok in ["#fff", "#ffffff", "#ffffffff", "rgb(0,0,0)", "hsl(0,0%,0%)", "var(--x)"] {
                    assert!(validator.validate(key, ok).is_ok(), "{key} {ok}");
                }
                for bad in ["not-a-color", ""] {
                    let err = validator.validate(key, bad).unwrap_err();
                    assert!(err.reason().contains("color"), "{}", err.reason());
                }
            }
        }
    }

    #[test]
    fn color_failure_reason() {
        let err = ValueValidator::fallback()
            .validate(TokenKey::BrandPrimary, "not-a-color")
            .unwrap_err();
        assert_eq!(err.reason(), r#"Invalid color: "not-a-color""#);
        assert_eq!(err.key, Some(TokenKey::BrandPrimary));
    }

    #[test]
    fn native_is_stricter_than_fallback_for_colors() {
        let fallback = ValueValidator::fallback();
        let native = ValueValidator::with_native(CssParser::new());
        assert!(fallback.validate(TokenKey::BrandPrimary, "rgb(banana)").is_ok());
        assert!(native.validate(TokenKey::BrandPrimary, "rgb(banana)").is_err());
        assert!(native.validate(TokenKey::BrandPrimary, "tomato").is_ok());
        assert!(fallback.validate(TokenKey::BrandPrimary, "tomato").is_err());
    }

    #[test]
    fn shadows() {
        let fallback = ValueValidator::fallback();
        let native = ValueValidator::with_native(CssParser::new());
        for v in [&fallback, &native] {
            assert!(v.validate(TokenKey::ShadowElevation2, "none").is_ok());
            assert!(v.validate(TokenKey::ShadowElevation2, "0 1px 2px rgba(0,0,0,0.2)").is_ok());
            assert!(v.validate(TokenKey::ButtonFocusRing, "var(--kz-shadow-focus)").is_ok());
            assert!(v.validate(TokenKey::MenuShadow, "soft").is_err());
        }
        assert!(fallback.validate(TokenKey::CardShadow, "px").is_ok());
        assert!(native.validate(TokenKey::CardShadow, "px").is_err());
    }

    #[test]
    fn lengths() {
        let validator = ValueValidator::fallback();
        for key in keys_of(TokenCategory::Length) {
            for ok in ["0", "4px", "1.5rem", "var(--x)", " 12px "] {
                assert!(validator.validate(key, ok).is_ok(), "{key} {ok}");
            }
            for bad in ["4", "4xyz"] {
                assert!(validator.validate(key, bad).is_err(), "{key} {bad}");
            }
        }
    }

    #[test]
    fn font_weights() {
        let validator = ValueValidator::fallback();
        for key in keys_of(TokenCategory::FontWeight) {
            for weight in (100..=900).step_by(100) {
                assert!(validator.validate(key, &weight.to_string()).is_ok());
            }
            for bad in ["450", "bold", "1000", "0", ""] {
                let err = validator.validate(key, bad).unwrap_err();
                assert!(err.reason().starts_with("Invalid font weight"));
            }
        }
    }

    #[test]
    fn easings() {
        let validator = ValueValidator::fallback();
        for key in keys_of(TokenCategory::Easing) {
            assert!(validator.validate(key, "cubic-bezier(0.4, 0, 0.2, 1)").is_ok());
            assert!(validator.validate(key, "cubic-bezier(.4,0,.2,1)").is_ok());
            assert!(validator.validate(key, "var(--kz-motion-easing-standard)").is_ok());
            // Keywords are rejected; only explicit curves or references
            assert!(validator.validate(key, "ease-in-out").is_err());
            assert!(validator.validate(key, "cubic-bezier(0.4, 0, 0.2)").is_err());
        }
    }

    #[test]
    fn durations_numbers_line_heights_families() {
        let validator = ValueValidator::fallback();
        assert!(validator.validate(TokenKey::MotionDurationFast, "150ms").is_ok());
        assert!(validator.validate(TokenKey::MotionDurationSlow, "0.5s").is_ok());
        assert!(validator.validate(TokenKey::MotionDurationSlow, "500").is_err());
        assert!(validator.validate(TokenKey::EffectGlassOpacity, "0.72").is_ok());
        assert!(validator.validate(TokenKey::EffectGlassOpacity, "72%").is_err());
        assert!(validator.validate(TokenKey::ButtonDisabledOpacity, "-1").is_ok());
        assert!(validator.validate(TokenKey::LineHeightNormal, "1.5").is_ok());
        assert!(validator.validate(TokenKey::LineHeightNormal, "var(--lh)").is_ok());
        assert!(validator.validate(TokenKey::LineHeightNormal, "24px").is_err());
        assert!(validator.validate(TokenKey::FontFamilyMono, "\"JetBrains Mono\", monospace").is_ok());
        assert!(validator.validate(TokenKey::FontFamilyMono, "   ").is_err());
    }

    #[test]
    fn duration_and_length_grammars_do_not_overlap() {
        let validator = ValueValidator::fallback();
        assert!(validator.validate_as(TokenCategory::Duration, "300ms").is_ok());
        assert!(validator.validate_as(TokenCategory::Length, "300ms").is_err());
        assert!(validator.validate_as(TokenCategory::Length, "300px").is_ok());
        assert!(validator.validate_as(TokenCategory::Duration, "300px").is_err());
    }

    #[test]
    fn check_all_reports_every_failure_in_order() {
        let overrides: TokenOverrides = [
            (TokenKey::BrandPrimary, "#ff5500"),
            (TokenKey::RadiusMd, "4"),
            (TokenKey::FontWeightBold, "bold"),
        ]
        .into_iter()
        .collect();
        let failures = ValueValidator::fallback().check_all(&overrides);
        let keys: Vec<_> = failures.iter().filter_map(|f| f.key).collect();
        assert_eq!(keys, vec![TokenKey::RadiusMd, TokenKey::FontWeightBold]);
    }

    /// Records every question asked of the host facility
    #[derive(Clone, Default)]
    struct Recording {
        calls: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl CssSupports for Recording {
        fn supports(&self, property: &str, value: &str) -> bool {
            self.calls
                .borrow_mut()
                .push((property.to_string(), value.to_string()));
            false
        }
    }

    #[test]
    fn native_capability_decides_colors_and_shadows() {
        let host = Recording::default();
        let validator = ValueValidator::with_native(host.clone());
        assert!(validator.is_native());
        assert!(!ValueValidator::fallback().is_native());

        // The host's answer wins even for values the fallback would accept
        assert!(validator.validate(TokenKey::BrandPrimary, " #fff ").is_err());
        // "none" and non-CSS grammars never reach the host
        assert!(validator.validate(TokenKey::ShadowInner, "none").is_ok());
        assert!(validator.validate(TokenKey::RadiusMd, "4px").is_ok());

        assert_eq!(
            *host.calls.borrow(),
            vec![("color".to_string(), "#fff".to_string())]
        );
    }
}
