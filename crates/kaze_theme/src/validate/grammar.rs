//! Regex grammars for token values
//!
//! Lengths, numbers, durations, easings and line heights are always checked
//! here. Colors and shadows only fall back to [`RegexFallback`] when no
//! native CSS facility was injected; those two checks are intentionally
//! loose.

use std::sync::OnceLock;

use regex::Regex;

use super::CssSupports;

/// Unsigned or signed decimal, no exponent
const NUMBER: &str = r"[+-]?(?:\d+(?:\.\d+)?|\.\d+)";

pub(crate) struct Patterns {
    pub number: Regex,
    pub length: Regex,
    pub duration: Regex,
    pub cubic_bezier: Regex,
    pub var_ref: Regex,
    pub hex_color: Regex,
    pub color_function: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid token value pattern")
}

pub(crate) fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        number: compile(&format!("^{NUMBER}$")),
        length: compile(&format!(
            "^{NUMBER}(?:px|rem|em|%|vh|vw|vmin|vmax|ch|ex)$"
        )),
        duration: compile(&format!("^{NUMBER}(?:ms|s)$")),
        cubic_bezier: compile(&format!(
            r"^cubic-bezier\(\s*{NUMBER}\s*,\s*{NUMBER}\s*,\s*{NUMBER}\s*,\s*{NUMBER}\s*\)$"
        )),
        var_ref: compile(r"^var\(\s*--[A-Za-z0-9_-]+\s*(?:,[^;{}]*)?\)$"),
        hex_color: compile(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$"),
        color_function: compile(r"^(?:rgba?|hsla?|oklch)\(.+\)$"),
    })
}

/// `var(--name)` or `var(--name, fallback)`
pub(crate) fn is_var_ref(value: &str) -> bool {
    patterns().var_ref.is_match(value)
}

pub(crate) fn is_number(value: &str) -> bool {
    patterns().number.is_match(value)
}

pub(crate) fn is_length(value: &str) -> bool {
    value == "0" || patterns().length.is_match(value) || is_var_ref(value)
}

pub(crate) fn is_duration(value: &str) -> bool {
    patterns().duration.is_match(value) || is_var_ref(value)
}

pub(crate) fn is_easing(value: &str) -> bool {
    patterns().cubic_bezier.is_match(value) || is_var_ref(value)
}

pub(crate) fn is_line_height(value: &str) -> bool {
    is_number(value) || is_var_ref(value)
}

pub(crate) fn is_font_weight(value: &str) -> bool {
    matches!(
        value,
        "100" | "200" | "300" | "400" | "500" | "600" | "700" | "800" | "900"
    )
}

/// Color and box-shadow checks for hosts without a CSS parser
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexFallback;

impl CssSupports for RegexFallback {
    fn supports(&self, property: &str, value: &str) -> bool {
        let value = value.trim();
        match property {
            "color" => {
                let p = patterns();
                p.hex_color.is_match(value) || p.color_function.is_match(value) || is_var_ref(value)
            }
            "box-shadow" => is_var_ref(value) || value.contains("px"),
            _ => false,
        }
    }

    fn is_native(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for ok in ["0", "1", "-1", "+2", "1.5", ".5", "-0.25"] {
            assert!(is_number(ok), "{ok}");
        }
        for bad in ["", "1.", "1e3", "1px", "one", "--1"] {
            assert!(!is_number(bad), "{bad}");
        }
    }

    #[test]
    fn lengths() {
        for ok in ["0", "4px", "1.5rem", "-2em", "50%", "100vh", "10vmin", "3ch", "var(--x)"] {
            assert!(is_length(ok), "{ok}");
        }
        for bad in ["4", "4xyz", "px", "300ms", "1.5 rem", ""] {
            assert!(!is_length(bad), "{bad}");
        }
    }

    #[test]
    fn var_references() {
        assert!(is_var_ref("var(--x)"));
        assert!(is_var_ref("var( --kz-space-4 )"));
        assert!(is_var_ref("var(--a, 4px)"));
        assert!(!is_var_ref("var(x)"));
        assert!(!is_var_ref("var(--)"));
        assert!(!is_var_ref("calc(var(--x) * 2)"));
    }

    #[test]
    fn var_fallback_cannot_close_the_declaration() {
        assert!(is_var_ref("var(--a, rgb(0 0 0 / 0.5))"));
        assert!(!is_var_ref("var(--a, red); } body { color: var(--b)"));
        assert!(!is_var_ref("var(--a, {x})"));
        let fallback = RegexFallback;
        assert!(!fallback.supports("color", "var(--a, red; color: blue)"));
    }

    #[test]
    fn fallback_color_is_loose() {
        let fallback = RegexFallback;
        assert!(fallback.supports("color", "#abc"));
        assert!(fallback.supports("color", "rgb(nonsense)"));
        assert!(!fallback.supports("color", "red"));
        assert!(!fallback.supports("color", "#abcd"));
    }

    #[test]
    fn fallback_shadow_accepts_anything_with_px() {
        let fallback = RegexFallback;
        assert!(fallback.supports("box-shadow", "0 1px 2px black"));
        assert!(fallback.supports("box-shadow", "px"));
        assert!(fallback.supports("box-shadow", "var(--kz-shadow-elevation-1)"));
        assert!(!fallback.supports("box-shadow", "0 1em 2em black"));
        assert!(!fallback.supports("width", "4px"));
    }
}
