//! Colors

use std::fmt;

/// A color as stored in a style
///
/// `Auto` lets the application pick (black text, no border color). Colors
/// coming from report input are `Argb` with a zero alpha byte, matching how
/// the input's `#rrggbb` strings are widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Auto,
    Rgb { r: u8, g: u8, b: u8 },
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Parse `RRGGBB` or `AARRGGBB`, with or without `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// The RGB channels packed as `0xRRGGBB`; alpha is dropped and `Auto` is black
    pub fn to_rgb_u32(&self) -> u32 {
        match *self {
            Color::Auto => 0,
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => {
                u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
            }
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }
}
