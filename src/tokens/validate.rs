//! Lenient value validators for resolved tokens.
//!
//! Validation is advisory only: a failed check is logged as a warning and
//! never blocks a successful resolution. The CSS validator in particular
//! accepts nearly any non-empty string; it exists to catch obviously
//! malformed empty/whitespace values, not to enforce CSS grammar.

use std::sync::OnceLock;

use regex::Regex;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
static RGB_COLOR: OnceLock<Regex> = OnceLock::new();
static HSL_COLOR: OnceLock<Regex> = OnceLock::new();
static CSS_VALUE: OnceLock<Regex> = OnceLock::new();

/// Named keywords accepted as colors, matched case-insensitively.
const NAMED_COLORS: [&str; 5] = ["transparent", "currentcolor", "inherit", "initial", "unset"];

fn hex_color() -> &'static Regex {
    HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap()
    })
}

fn rgb_color() -> &'static Regex {
    RGB_COLOR.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(,\s*[\d.]+)?\s*\)$").unwrap()
    })
}

fn hsl_color() -> &'static Regex {
    HSL_COLOR.get_or_init(|| {
        Regex::new(r"^hsla?\(\s*\d+\s*,\s*[\d.]+%\s*,\s*[\d.]+%\s*(,\s*[\d.]+)?\s*\)$").unwrap()
    })
}

fn css_value() -> &'static Regex {
    CSS_VALUE.get_or_init(|| {
        Regex::new(
            r"^([\d.]+(px|rem|em|%|vh|vw|ch|ex|cm|mm|in|pt|pc|deg|rad|grad|ms|s|Hz|kHz)|calc\([^)]+\)|var\([^)]+\)|[\w-]+|\s+)+$",
        )
        .unwrap()
    })
}

/// Returns `true` iff `value` looks like a well-formed CSS color.
///
/// Accepts hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()` with
/// integer channels, `hsl()`/`hsla()` with integer hue and percentage
/// saturation/lightness, and a fixed named-keyword set.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    if hex_color().is_match(value) || rgb_color().is_match(value) || hsl_color().is_match(value) {
        return true;
    }

    NAMED_COLORS.contains(&value.to_lowercase().as_str())
}

/// Returns `true` iff `value` looks like a plausible CSS value.
///
/// The empty string and the literal `"none"` are valid. Otherwise the
/// trimmed value is matched against a permissive grammar of number+unit
/// tokens, `calc(...)`, `var(...)`, and bare words; any non-empty trimmed
/// string passes. Only whitespace-only values fail.
#[must_use]
pub fn is_valid_css_value(value: &str) -> bool {
    if value.is_empty() || value == "none" {
        return true;
    }

    let trimmed = value.trim();
    css_value().is_match(trimmed) || !trimmed.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#ffffff"));
        assert!(is_valid_color("#FFFFFF"));
        assert!(is_valid_color("#3b82f6"));
        assert!(is_valid_color("#3b82f6cc"));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!is_valid_color("#ffff"));
        assert!(!is_valid_color("#gggggg"));
        assert!(!is_valid_color("3b82f6"));
    }

    #[test]
    fn accepts_rgb_and_rgba() {
        assert!(is_valid_color("rgb(0, 0, 0)"));
        assert!(is_valid_color("rgba(0,0,0,0.5)"));
        assert!(is_valid_color("rgba( 255 , 128 , 0 , 1 )"));
    }

    #[test]
    fn accepts_hsl_and_hsla() {
        assert!(is_valid_color("hsl(120, 50%, 50%)"));
        assert!(is_valid_color("hsla(120, 50%, 50%, 0.8)"));
    }

    #[test]
    fn rejects_hsl_without_percent() {
        assert!(!is_valid_color("hsl(120, 50, 50)"));
    }

    #[test]
    fn accepts_named_keywords_case_insensitively() {
        assert!(is_valid_color("transparent"));
        assert!(is_valid_color("currentColor"));
        assert!(is_valid_color("CURRENTCOLOR"));
        assert!(is_valid_color("inherit"));
        assert!(is_valid_color("initial"));
        assert!(is_valid_color("unset"));
    }

    #[test]
    fn rejects_arbitrary_words_as_colors() {
        assert!(!is_valid_color("notacolor"));
        assert!(!is_valid_color(""));
    }

    #[test]
    fn css_accepts_empty_and_none() {
        assert!(is_valid_css_value(""));
        assert!(is_valid_css_value("none"));
    }

    #[test]
    fn css_accepts_common_values() {
        assert!(is_valid_css_value("1rem"));
        assert!(is_valid_css_value("16px"));
        assert!(is_valid_css_value("calc(100% - 2rem)"));
        assert!(is_valid_css_value("var(--spacing-md)"));
        assert!(is_valid_css_value("0 4px 6px -1px rgb(0 0 0 / 0.1)"));
    }

    #[test]
    fn css_rejects_whitespace_only() {
        assert!(!is_valid_css_value("   "));
        assert!(!is_valid_css_value("\t\n"));
    }
}
