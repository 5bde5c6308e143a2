//! Pure-Rust CSS value parser
//!
//! [`CssParser`] answers the same question as the browser's `CSS.supports()`
//! for the two properties token validation needs, `color` and `box-shadow`,
//! so hosts without a DOM still get full syntax checking.
//!
//! # Supported Syntax
//!
//! - Colors: hex (#rgb, #rgba, #rrggbb, #rrggbbaa), `rgb()`/`rgba()`,
//!   `hsl()`/`hsla()`, `hwb()`, `lab()`, `lch()`, `oklab()`, `oklch()`
//!   in legacy comma or modern space syntax, named colors, `transparent`,
//!   `currentcolor`
//! - Shadows: `none`, or comma-separated layers of optional `inset`, two to
//!   four lengths and an optional color
//! - Any `var(--name)` reference or CSS-wide keyword

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value, verify},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use super::CssSupports;

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Native-grade CSS syntax checks without a browser
#[derive(Clone, Copy, Debug, Default)]
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Whether `value` is a complete CSS color
    pub fn is_color(&self, value: &str) -> bool {
        all_consuming(delimited(ws, color, ws))(value).is_ok()
    }

    /// Whether `value` is a complete `box-shadow` value
    pub fn is_box_shadow(&self, value: &str) -> bool {
        if value.trim().eq_ignore_ascii_case("none") {
            return true;
        }
        all_consuming(delimited(
            ws,
            separated_list1(delimited(ws, char(','), ws), shadow_layer),
            ws,
        ))(value)
        .is_ok()
    }
}

impl CssSupports for CssParser {
    fn supports(&self, property: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let known = property == "box-shadow" || property == "color" || property.ends_with("-color");
        if !known {
            return false;
        }
        if !is_balanced(value) {
            return false;
        }
        // Values with var() are only checked once substituted
        if has_var_reference(value) || is_css_wide_keyword(value) {
            return true;
        }
        if property == "box-shadow" {
            self.is_box_shadow(value)
        } else {
            self.is_color(value)
        }
    }
}

fn is_css_wide_keyword(value: &str) -> bool {
    ["inherit", "initial", "unset", "revert", "revert-layer"]
        .iter()
        .any(|kw| value.eq_ignore_ascii_case(kw))
}

/// Brackets and quotes close in order, and no `;`, `!`, `{` or `}` appears
/// outside a string
fn is_balanced(value: &str) -> bool {
    let mut open = Vec::new();
    let mut quote = None;
    let mut escaped = false;
    for c in value.chars() {
        if let Some(q) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => open.push(')'),
            '[' => open.push(']'),
            ')' | ']' => {
                if open.pop() != Some(c) {
                    return false;
                }
            }
            ';' | '!' | '{' | '}' => return false,
            _ => {}
        }
    }
    open.is_empty() && quote.is_none()
}

fn has_var_reference(value: &str) -> bool {
    value.match_indices("var(").any(|(at, _)| {
        let standalone = value[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '-' || c == '_'));
        let rest = value[at + 4..].trim_start();
        standalone && rest.starts_with("--") && rest.contains(')')
    })
}

fn ws(input: &str) -> ParseResult<'_, ()> {
    value((), multispace0)(input)
}

/// CSS number: optional sign, digits with optional fraction, optional exponent
fn number(input: &str) -> ParseResult<'_, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

// ============================================================================
// Colors
// ============================================================================

fn color(input: &str) -> ParseResult<'_, ()> {
    alt((hex_color, color_function, named_color))(input)
}

/// #RGB, #RGBA, #RRGGBB, or #RRGGBBAA
fn hex_color(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        preceded(
            char('#'),
            verify(take_while1(|c: char| c.is_ascii_hexdigit()), |hex: &str| {
                matches!(hex.len(), 3 | 4 | 6 | 8)
            }),
        ),
    )(input)
}

fn named_color(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        verify(take_while1(|c: char| c.is_ascii_alphabetic()), |name: &str| {
            is_named_color(name)
        }),
    )(input)
}

/// Kind of a single color function argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Number,
    Percent,
    Angle,
    /// The `none` keyword
    Missing,
}

fn channel(input: &str) -> ParseResult<'_, Channel> {
    alt((
        value(Channel::Missing, tag_no_case("none")),
        map(
            pair(
                number,
                opt(alt((
                    value(Channel::Percent, tag("%")),
                    value(
                        Channel::Angle,
                        alt((
                            tag_no_case("deg"),
                            tag_no_case("grad"),
                            tag_no_case("rad"),
                            tag_no_case("turn"),
                        )),
                    ),
                ))),
            ),
            |(_, unit)| unit.unwrap_or(Channel::Number),
        ),
    ))(input)
}

/// Parsed argument list of a color function
#[derive(Debug)]
struct ColorArgs {
    channels: Vec<Channel>,
    alpha: Option<Channel>,
    legacy: bool,
}

/// Legacy syntax: `a, b, c[, alpha]`
fn comma_args(input: &str) -> ParseResult<'_, ColorArgs> {
    map(
        verify(
            separated_list1(delimited(ws, char(','), ws), channel),
            |chans: &Vec<Channel>| chans.len() == 3 || chans.len() == 4,
        ),
        |mut channels| {
            let alpha = if channels.len() == 4 {
                channels.pop()
            } else {
                None
            };
            ColorArgs {
                channels,
                alpha,
                legacy: true,
            }
        },
    )(input)
}

/// Modern syntax: `a b c[ / alpha]`
fn space_args(input: &str) -> ParseResult<'_, ColorArgs> {
    map(
        pair(
            verify(
                separated_list1(multispace1, channel),
                |chans: &Vec<Channel>| chans.len() == 3,
            ),
            opt(preceded(delimited(ws, char('/'), ws), channel)),
        ),
        |(channels, alpha)| ColorArgs {
            channels,
            alpha,
            legacy: false,
        },
    )(input)
}

fn color_function(input: &str) -> ParseResult<'_, ()> {
    let (input, name) = alt((
        tag_no_case("rgba"),
        tag_no_case("rgb"),
        tag_no_case("hsla"),
        tag_no_case("hsl"),
        tag_no_case("hwb"),
        tag_no_case("oklab"),
        tag_no_case("oklch"),
        tag_no_case("lab"),
        tag_no_case("lch"),
    ))(input)?;
    let (rest, args) = delimited(
        pair(char('('), ws),
        alt((comma_args, space_args)),
        pair(ws, char(')')),
    )(input)?;

    if color_args_valid(&name.to_ascii_lowercase(), &args) {
        Ok((rest, ()))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )))
    }
}

fn color_args_valid(function: &str, args: &ColorArgs) -> bool {
    use Channel::*;

    let alpha_ok = match args.alpha {
        Some(a) => matches!(a, Number | Percent) || (!args.legacy && a == Missing),
        None => true,
    };
    if !alpha_ok {
        return false;
    }
    // `none` is modern-syntax only
    if args.legacy && args.channels.contains(&Missing) {
        return false;
    }

    let c = &args.channels;
    let is = |ch: Channel, allowed: &[Channel]| allowed.contains(&ch) || ch == Missing;
    match function {
        "rgb" | "rgba" => {
            let numeric = c.iter().all(|&ch| is(ch, &[Number, Percent]));
            // Legacy syntax cannot mix numbers and percentages
            let uniform = !args.legacy || c.iter().all(|&ch| ch == c[0]);
            numeric && uniform
        }
        "hsl" | "hsla" => {
            let rest = if args.legacy { &[Percent][..] } else { &[Number, Percent][..] };
            is(c[0], &[Number, Angle]) && is(c[1], rest) && is(c[2], rest)
        }
        "hwb" => {
            !args.legacy
                && is(c[0], &[Number, Angle])
                && is(c[1], &[Number, Percent])
                && is(c[2], &[Number, Percent])
        }
        "lab" | "oklab" => !args.legacy && c.iter().all(|&ch| is(ch, &[Number, Percent])),
        "lch" | "oklch" => {
            !args.legacy
                && is(c[0], &[Number, Percent])
                && is(c[1], &[Number, Percent])
                && is(c[2], &[Number, Angle])
        }
        _ => false,
    }
}

fn is_named_color(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name == "transparent" || name == "currentcolor" || NAMED_COLORS.binary_search(&name.as_str()).is_ok()
}

/// CSS Color Module named colors, sorted for binary search
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

// ============================================================================
// Box shadows
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
enum ShadowPart {
    Inset,
    Length(f64),
    Color,
}

fn length_unit(input: &str) -> ParseResult<'_, &str> {
    alt((
        tag_no_case("px"),
        tag_no_case("rem"),
        tag_no_case("em"),
        tag_no_case("ex"),
        tag_no_case("ch"),
        tag_no_case("vmin"),
        tag_no_case("vmax"),
        tag_no_case("vh"),
        tag_no_case("vw"),
        tag_no_case("pt"),
        tag_no_case("pc"),
        tag_no_case("cm"),
        tag_no_case("mm"),
        tag_no_case("in"),
        tag_no_case("q"),
    ))(input)
}

/// Length with a unit, or a bare zero
fn shadow_length(input: &str) -> ParseResult<'_, f64> {
    alt((
        map(pair(number, length_unit), |(n, _)| n),
        verify(number, |n: &f64| *n == 0.0),
    ))(input)
}

fn shadow_part(input: &str) -> ParseResult<'_, ShadowPart> {
    alt((
        map(shadow_length, ShadowPart::Length),
        value(ShadowPart::Inset, tag_no_case("inset")),
        value(ShadowPart::Color, color),
    ))(input)
}

fn shadow_layer(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        verify(separated_list1(multispace1, shadow_part), |parts: &Vec<ShadowPart>| {
            shadow_layer_valid(parts)
        }),
    )(input)
}

/// Lengths must be contiguous, two to four of them, with a non-negative blur
fn shadow_layer_valid(parts: &[ShadowPart]) -> bool {
    let lengths: Vec<(usize, f64)> = parts
        .iter()
        .enumerate()
        .filter_map(|(i, p)| match p {
            ShadowPart::Length(v) => Some((i, *v)),
            _ => None,
        })
        .collect();
    let insets = parts.iter().filter(|p| **p == ShadowPart::Inset).count();
    let colors = parts.iter().filter(|p| **p == ShadowPart::Color).count();

    let (Some(first), Some(last)) = (lengths.first(), lengths.last()) else {
        return false;
    };
    let contiguous = last.0 - first.0 + 1 == lengths.len();
    let blur_ok = lengths.get(2).map_or(true, |(_, blur)| *blur >= 0.0);

    (2..=4).contains(&lengths.len()) && contiguous && blur_ok && insets <= 1 && colors <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hex_colors() {
        let css = CssParser::new();
        for ok in ["#fff", "#FFF8", "#ffffff", "#ffffffff", "  #1e66f5 "] {
            assert!(css.is_color(ok), "{ok}");
        }
        for bad in ["#ff", "#fffff", "#ggg", "fff", "#"] {
            assert!(!css.is_color(bad), "{bad}");
        }
    }

    #[test]
    fn rgb_and_hsl_functions() {
        let css = CssParser::new();
        for ok in [
            "rgb(0,0,0)",
            "rgb(255, 128, 0)",
            "rgba(255, 128, 0, 0.5)",
            "rgb(100% 50% 0%)",
            "rgb(255 128 0 / 50%)",
            "RGB(1, 2, 3)",
            "hsl(0,0%,0%)",
            "hsla(210deg, 40%, 50%, 0.3)",
            "hsl(210 40% 50% / 0.3)",
        ] {
            assert!(css.is_color(ok), "{ok}");
        }
        for bad in [
            "rgb(0,0)",
            "rgb(0, 0%, 0)",
            "rgb(0deg, 0, 0)",
            "rgb(0 0 0 0)",
            "hsl(0, 0, 0)",
            "rgb(0,0,0",
            "rgb(none, 0, 0)",
        ] {
            assert!(!css.is_color(bad), "{bad}");
        }
    }

    #[test]
    fn modern_color_spaces() {
        let css = CssParser::new();
        assert!(css.is_color("oklch(62.8% 0.25 29.23)"));
        assert!(css.is_color("oklch(0.7 0.1 120deg / 0.5)"));
        assert!(css.is_color("lab(52% 40 60)"));
        assert!(css.is_color("hwb(194 0% 0%)"));
        assert!(css.is_color("oklch(none 0.1 120)"));
        assert!(!css.is_color("oklch(0.7, 0.1, 120)"));
        assert!(!css.is_color("oklch(0.7 0.1 10%)"));
    }

    #[test]
    fn named_and_keyword_colors() {
        let css = CssParser::new();
        assert!(css.is_color("rebeccapurple"));
        assert!(css.is_color("Transparent"));
        assert!(css.is_color("currentColor"));
        assert!(!css.is_color("not-a-color"));
        assert!(!css.is_color("bluish"));
        assert!(!css.is_color(""));
    }

    #[test]
    fn box_shadows() {
        let css = CssParser::new();
        for ok in [
            "none",
            "0 1px 2px rgba(0, 0, 0, 0.1)",
            "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
            "inset 0 2px 4px #0000000d",
            "0 0 0 3px #1e66f5 inset",
            "2px 2px",
            "red 1rem 1rem 2rem",
        ] {
            assert!(css.is_box_shadow(ok), "{ok}");
        }
        for bad in [
            "",
            "1px",
            "4px 4px 4px 4px 4px",
            "0 1px -2px black",
            "0 1px black 2px",
            "inset inset 0 0",
            "0 1px 2px black white",
            "4pxx 4px",
            "0 4 2px black",
        ] {
            assert!(!css.is_box_shadow(bad), "{bad}");
        }
    }

    #[test]
    fn supports_matches_browser_semantics() {
        let css = CssParser::new();
        assert!(css.supports("color", "var(--kz-color-brand-primary)"));
        assert!(css.supports("box-shadow", "0 0 0 2px var(--ring)"));
        assert!(css.supports("color", "inherit"));
        assert!(css.supports("background-color", "#fff"));
        assert!(!css.supports("color", "   "));
        assert!(!css.supports("width", "4px"));
        assert!(!css.supports("color", "myvar(--x)"));
    }

    #[test]
    fn var_shortcut_requires_a_single_well_formed_value() {
        let css = CssParser::new();
        for bad in [
            "red; } body { display: none } .x { color: var(--a)",
            "var(--a); color: red",
            "var(--a) !important",
            "var(--a, {})",
            "var(--a))",
            "var(--a, rgb(0 0 0)",
            "0 0 2px var(--ring]",
            "var(--a, \"unclosed)",
        ] {
            assert!(!css.supports("color", bad), "{bad}");
            assert!(!css.supports("box-shadow", bad), "{bad}");
        }
        assert!(css.supports("color", "var(--a, rgb(0 0 0 / 50%))"));
        assert!(css.supports("color", "var(--a, \"x;}\")"));
        assert!(css.supports("box-shadow", "0 0 0 2px var(--ring, #000)"));
    }
}
