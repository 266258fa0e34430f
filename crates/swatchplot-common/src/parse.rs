//! Color string parsing and validation.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` / `rgba(r,g,b,a)`,
//! and CSS4 color names. In the `rgba()` format, the alpha component can be
//! either 0-255 (integer) or 0.0-1.0 (float), matching CSS conventions.

use crate::color::Color;
use crate::errors::ColorError;
use crate::named;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgba() color with float or int alpha.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
        .unwrap()
});

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RRGGBB` (e.g. `#00d4ff`), `#RRGGBBAA`, or shorthand `#RGB`
/// - `rgb(r,g,b)` / `rgba(r,g,b,a)` where `a` is 0.0-1.0 or 0-255
/// - a CSS4 color name (e.g. `rebeccapurple`), case-insensitive
///
/// Anything else fails with [`ColorError::InvalidColor`] carrying the
/// offending value.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s).ok_or_else(|| ColorError::InvalidColor(s.to_owned()));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s).ok_or_else(|| ColorError::InvalidColor(s.to_owned()));
    }

    named::lookup(s).ok_or_else(|| ColorError::InvalidColor(s.to_owned()))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    named::lookup(s).is_some()
}

/// Parse a hex color string (#RGB, #RRGGBB, or #RRGGBBAA).
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgba(r * 17, g * 17, b * 17, 255))
        }
        6 => Color::from_hex(s),
        8 => Color::from_hex(s),
        _ => None,
    }
}

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` color string.
/// A float alpha is interpreted as 0.0-1.0 (CSS convention) and scaled to 0-255.
fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a: u8 = match caps.get(4) {
        None => 255,
        Some(a_match) => {
            let a_str = a_match.as_str();
            if a_str.contains('.') {
                let a_float: f64 = a_str.parse().ok()?;
                if !(0.0..=1.0).contains(&a_float) {
                    return None;
                }
                (a_float * 255.0).round() as u8
            } else {
                let a_int: u32 = a_str.parse().ok()?;
                if a_int > 255 {
                    return None;
                }
                a_int as u8
            }
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(
            parse_color("#00d4ff").unwrap(),
            Color::from_rgb(0, 212, 255)
        );
        assert_eq!(
            parse_color("#00d4ff80").unwrap(),
            Color::from_rgba(0, 212, 255, 128)
        );
        // Shorthand expands each digit
        assert_eq!(parse_color("#f80").unwrap(), Color::from_rgb(255, 136, 0));
    }

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(
            parse_color("rgb(10, 20, 30)").unwrap(),
            Color::from_rgb(10, 20, 30)
        );
        assert_eq!(
            parse_color("rgba(0, 212, 255, 0.5)").unwrap(),
            Color::from_rgba(0, 212, 255, 128)
        );
        assert_eq!(
            parse_color("rgba(0,212,255,64)").unwrap(),
            Color::from_rgba(0, 212, 255, 64)
        );
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!(
            parse_color("  DodgerBlue  ").unwrap(),
            Color::from_rgb24(0x1e90ff)
        );
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["", "#12345", "#gghhii", "rgba(1,2)", "rgba(1,2,3,1.5)", "notacolor"] {
            let err = parse_color(bad).unwrap_err();
            assert!(matches!(err, ColorError::InvalidColor(_)), "{bad}");
        }
    }

    #[test]
    fn error_carries_offending_value() {
        let err = parse_color("blurple").unwrap_err();
        assert_eq!(err.to_string(), "invalid color: blurple");
    }

    #[test]
    fn validate_matches_parse() {
        for good in ["#fff", "#00d4ff", "#00d4ff80", "rgb(1,2,3)", "rgba(1,2,3,0.5)", "teal"] {
            assert!(validate_color(good), "{good}");
            assert!(parse_color(good).is_ok(), "{good}");
        }
        for bad in ["", "#12345", "rgba(1,2,3", "blurple"] {
            assert!(!validate_color(bad), "{bad}");
            assert!(parse_color(bad).is_err(), "{bad}");
        }
    }
}
