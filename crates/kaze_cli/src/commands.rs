//! Command implementations, kept free of I/O so they can be tested directly

use std::fmt::Write as _;

use kaze_theme::{
    DocumentRoot, InvalidTokenValue, OverrideApplier, ThemeConfig, ThemeProvider, TokenCategory,
    TokenKey, ValueValidator,
};

/// Catalog listing: `key  --kz-var  category`, one token per line
pub fn tokens(category: Option<TokenCategory>) -> String {
    let selected: Vec<TokenKey> = TokenKey::ALL
        .iter()
        .copied()
        .filter(|key| category.map_or(true, |c| key.category() == c))
        .collect();

    let key_width = selected.iter().map(|k| k.as_str().len()).max().unwrap_or(0);
    let var_width = selected.iter().map(|k| k.css_var().len()).max().unwrap_or(0);

    let mut out = String::new();
    for key in &selected {
        let _ = writeln!(
            out,
            "{:key_width$}  {:var_width$}  {}",
            key.as_str(),
            key.css_var(),
            key.category().id()
        );
    }
    tracing::info!(count = selected.len(), "listed tokens");
    out
}

/// Outcome of validating a theme file
#[derive(Debug)]
pub struct CheckReport {
    pub checked: usize,
    pub failures: Vec<InvalidTokenValue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            let key = failure.key.map_or("<value>", |k| k.as_str());
            let _ = writeln!(out, "{key}: {failure}");
        }
        if self.is_clean() {
            let _ = writeln!(out, "{} overrides ok", self.checked);
        }
        out
    }
}

pub fn check(config: &ThemeConfig, validator: &ValueValidator) -> CheckReport {
    tracing::info!(native = validator.is_native(), "checking overrides");
    CheckReport {
        checked: config.overrides.len(),
        failures: validator.check_all(&config.overrides),
    }
}

/// Apply `config` to a fresh root and render it as a CSS rule
///
/// Strict-mode failures are returned; safe-mode skips are only logged.
pub fn css(
    config: &ThemeConfig,
    selector: &str,
    validator: ValueValidator,
) -> Result<String, InvalidTokenValue> {
    let mut root = DocumentRoot::new();
    let mut provider = ThemeProvider::new(OverrideApplier::new(validator));
    provider.mount(config.props(), &mut root)?;

    let mut header: Vec<String> = root
        .attributes()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    let classes: Vec<&str> = root.classes().collect();
    if !classes.is_empty() {
        header.push(format!("class=\"{}\"", classes.join(" ")));
    }

    let mut out = format!("/* {} */\n", header.join(" "));
    out.push_str(&root.style().to_css(selector));
    Ok(out)
}
