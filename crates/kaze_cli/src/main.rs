//! Kaze CLI
//!
//! Offline tooling over the theme pipeline:
//! - `kaze tokens` lists the token catalog
//! - `kaze check` validates a theme file's overrides
//! - `kaze css` renders a theme file to a CSS declaration block

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaze_theme::{CssParser, ThemeConfig, TokenCategory, ValueValidator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kaze")]
#[command(about = "Inspect, check and render Kaze theme overrides")]
#[command(version)]
struct Cli {
    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List themeable tokens with their CSS variables and categories
    Tokens {
        /// Only list tokens of this category (e.g. color, font-weight)
        #[arg(long, value_parser = parse_category)]
        category: Option<TokenCategory>,
    },

    /// Validate every override in a theme file
    Check {
        /// Theme file (TOML)
        file: PathBuf,

        /// Use the loose regex checks for colors and shadows
        #[arg(long)]
        fallback: bool,
    },

    /// Apply a theme file to an empty root and print the CSS
    Css {
        /// Theme file (TOML)
        file: PathBuf,

        /// Selector for the emitted rule
        #[arg(long, default_value = ":root")]
        selector: String,

        /// Use the loose regex checks for colors and shadows
        #[arg(long)]
        fallback: bool,
    },
}

fn parse_category(id: &str) -> Result<TokenCategory, String> {
    TokenCategory::from_id(id).ok_or_else(|| {
        let known: Vec<_> = TokenCategory::ALL.iter().map(|c| c.id()).collect();
        format!("unknown category `{id}` (expected one of: {})", known.join(", "))
    })
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validator(fallback: bool) -> ValueValidator {
    if fallback {
        ValueValidator::fallback()
    } else {
        ValueValidator::with_native(CssParser::new())
    }
}

fn load(file: &Path) -> Result<ThemeConfig> {
    ThemeConfig::load(file).with_context(|| format!("Failed to load theme {}", file.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Tokens { category } => {
            print!("{}", commands::tokens(category));
        }
        Command::Check { file, fallback } => {
            let config = load(&file)?;
            let report = commands::check(&config, &validator(fallback));
            print!("{}", report.render());
            if !report.is_clean() {
                anyhow::bail!(
                    "{} of {} overrides in {} are invalid",
                    report.failures.len(),
                    report.checked,
                    file.display()
                );
            }
        }
        Command::Css {
            file,
            selector,
            fallback,
        } => {
            let config = load(&file)?;
            let css = commands::css(&config, &selector, validator(fallback))
                .with_context(|| format!("Failed to apply {}", file.display()))?;
            print!("{css}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_tokens_with_category() {
        let cli = Cli::try_parse_from(["kaze", "tokens", "--category", "font-weight"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Command::Tokens {
                category: Some(TokenCategory::FontWeight)
            }
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = Cli::try_parse_from(["kaze", "tokens", "--category", "gradient"]).unwrap_err();
        assert!(err.to_string().contains("unknown category `gradient`"));
    }

    #[test]
    fn css_defaults_to_root_selector() {
        let cli = Cli::try_parse_from(["kaze", "-vv", "css", "theme.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Css {
                file,
                selector,
                fallback,
            } => {
                assert_eq!(file, PathBuf::from("theme.toml"));
                assert_eq!(selector, ":root");
                assert!(!fallback);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_accepts_fallback_flag() {
        let cli = Cli::try_parse_from(["kaze", "check", "theme.toml", "--fallback", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Check { fallback: true, .. }));
        assert!(!validator(true).is_native());
        assert!(validator(false).is_native());
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["kaze", "check"]).is_err());
    }
}
