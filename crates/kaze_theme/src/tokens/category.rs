//! Value categories and the key classifier
//!
//! Token keys carry their category in their structure (`color.*`,
//! `motion.duration.*`, `component.*.radius`, ...). [`classify`] walks
//! [`CLASSIFICATION_RULES`] top to bottom and returns the category of the
//! first matching rule, falling back to [`TokenCategory::Length`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammar family an override value is checked against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Color,
    Shadow,
    Length,
    Number,
    FontFamily,
    FontWeight,
    Duration,
    Easing,
    LineHeight,
}

impl TokenCategory {
    /// Every category
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Color,
        TokenCategory::Shadow,
        TokenCategory::Length,
        TokenCategory::Number,
        TokenCategory::FontFamily,
        TokenCategory::FontWeight,
        TokenCategory::Duration,
        TokenCategory::Easing,
        TokenCategory::LineHeight,
    ];

    /// Lower-case name used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Shadow => "shadow",
            Self::Length => "length",
            Self::Number => "number",
            Self::FontFamily => "font family",
            Self::FontWeight => "font weight",
            Self::Duration => "duration",
            Self::Easing => "easing",
            Self::LineHeight => "line height",
        }
    }

    /// Stable id for config files and the CLI
    pub fn id(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Shadow => "shadow",
            Self::Length => "length",
            Self::Number => "number",
            Self::FontFamily => "font-family",
            Self::FontWeight => "font-weight",
            Self::Duration => "duration",
            Self::Easing => "easing",
            Self::LineHeight => "line-height",
        }
    }

    /// Parse a category from its [`id`](Self::id)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the classifier table
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    /// Short description of what the rule matches
    pub pattern: &'static str,
    pub matches: fn(&str) -> bool,
    pub category: TokenCategory,
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("pattern", &self.pattern)
            .field("category", &self.category)
            .finish()
    }
}

const fn rule(
    pattern: &'static str,
    matches: fn(&str) -> bool,
    category: TokenCategory,
) -> ClassificationRule {
    ClassificationRule {
        pattern,
        matches,
        category,
    }
}

/// Ordered classifier rules; the first match wins
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    rule("color.*", |k| k.starts_with("color."), TokenCategory::Color),
    rule(
        "typography.*.color",
        |k| k.starts_with("typography.") && k.ends_with(".color"),
        TokenCategory::Color,
    ),
    rule("shadow.*", |k| k.starts_with("shadow."), TokenCategory::Shadow),
    rule(
        "radius.* | space.* | effect.blur.*",
        |k| k.starts_with("radius.") || k.starts_with("space.") || k.starts_with("effect.blur."),
        TokenCategory::Length,
    ),
    rule(
        "effect.glass.*",
        |k| k.starts_with("effect.glass."),
        TokenCategory::Number,
    ),
    rule(
        "font.family.*",
        |k| k.starts_with("font.family."),
        TokenCategory::FontFamily,
    ),
    rule(
        "font.weight.*",
        |k| k.starts_with("font.weight."),
        TokenCategory::FontWeight,
    ),
    rule(
        "line.height.*",
        |k| k.starts_with("line.height."),
        TokenCategory::LineHeight,
    ),
    rule(
        "motion.duration.*",
        |k| k.starts_with("motion.duration."),
        TokenCategory::Duration,
    ),
    rule(
        "motion.easing.*",
        |k| k.starts_with("motion.easing."),
        TokenCategory::Easing,
    ),
    // component.* sub-rules, in their own priority order
    rule(
        "component.* containing .shadow | .focus.ring",
        |k| k.starts_with("component.") && (k.contains(".shadow") || k.contains(".focus.ring")),
        TokenCategory::Shadow,
    ),
    rule(
        "component.* containing .radius | .blur | .gap | .width",
        |k| {
            k.starts_with("component.")
                && [".radius", ".blur", ".gap", ".width"]
                    .iter()
                    .any(|part| k.contains(part))
        },
        TokenCategory::Length,
    ),
    rule(
        "component.* containing opacity",
        |k| k.starts_with("component.") && k.contains("opacity"),
        TokenCategory::Number,
    ),
    rule(
        "component.*",
        |k| k.starts_with("component."),
        TokenCategory::Color,
    ),
];

/// Category used when no rule matches
pub const FALLBACK_CATEGORY: TokenCategory = TokenCategory::Length;

/// Classify a token key. Total: unmatched keys are [`FALLBACK_CATEGORY`].
pub fn classify(key: &str) -> TokenCategory {
    match CLASSIFICATION_RULES.iter().find(|r| (r.matches)(key)) {
        Some(r) => {
            tracing::trace!(key, pattern = r.pattern, category = ?r.category, "classified token key");
            r.category
        }
        None => FALLBACK_CATEGORY,
    }
}
