//! Fonts

use std::hash::{Hash, Hasher};

use super::Color;

/// Font of a cell or of a rich text run
///
/// Sizes are in points. Equality and hashing compare the size bit-for-bit so
/// fonts can key the style pool.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::sized("Calibri", 11.0)
    }
}

impl FontStyle {
    /// A regular font of the given family and size
    pub fn sized<S: Into<String>>(name: S, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
            color: Color::Auto,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.color.hash(state);
    }
}

impl Eq for FontStyle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_font() {
        let font = FontStyle::sized("Arial", 8.0).with_bold(true);
        assert_eq!(font.name, "Arial");
        assert_eq!(font.size, 8.0);
        assert!(font.bold);
        assert!(font.color.is_auto());
        assert_eq!(FontStyle::default().size, 11.0);
    }
}
