//! Hex color normalization

use once_cell::sync::Lazy;
use regex::Regex;
use sheetcraft_core::Color;

use crate::error::{ColorField, Error, Result};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid color pattern")
});

/// Expand `#abc`, `abc`, `#aabbcc` or `aabbcc` to six hex digits without `#`
///
/// Digit case is preserved. Returns `None` for anything else.
pub fn normalize_hex(value: &str) -> Option<String> {
    let digits = HEX_COLOR.captures(value)?.get(1)?.as_str();
    if digits.len() == 3 {
        Some(digits.chars().flat_map(|c| [c, c]).collect())
    } else {
        Some(digits.to_string())
    }
}

/// Normalize a declared color, reporting the field and column on failure
pub fn normalize_color(field: ColorField, column: u16, value: &str) -> Result<String> {
    normalize_hex(value).ok_or_else(|| Error::InvalidColor {
        field,
        column,
        value: value.to_string(),
    })
}

/// Parse a declared color into the document color, with a zero opacity byte
pub(crate) fn to_argb(field: ColorField, column: u16, value: &str) -> Result<Color> {
    let hex = normalize_color(field, column, value)?;
    Color::from_hex(&format!("00{}", hex)).ok_or(Error::InvalidColor {
        field,
        column,
        value: value.to_string(),
    })
}
