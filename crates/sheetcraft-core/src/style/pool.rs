//! Interning of cell styles

use super::Style;
use ahash::AHashMap;

/// Distinct styles of one worksheet
///
/// Cells refer to styles by index. Index 0 is always the default style, so a
/// cell with `style_index == 0` is unstyled.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    indices: AHashMap<Style, u32>,
}

impl Default for StylePool {
    fn default() -> Self {
        let mut indices = AHashMap::new();
        indices.insert(Style::default(), 0);
        Self {
            styles: vec![Style::default()],
            indices,
        }
    }
}

impl StylePool {
    /// Index of `style`, adding it if it is new
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        if let Some(&index) = self.indices.get(&style) {
            return index;
        }
        let index = self.styles.len() as u32;
        self.indices.insert(style.clone(), index);
        self.styles.push(style);
        index
    }

    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Number of distinct styles, the default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_default_is_index_zero() {
        let mut pool = StylePool::default();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0), Some(&Style::default()));
        assert_eq!(pool.get_or_insert(Style::default()), 0);
    }

    #[test]
    fn test_equal_styles_share_an_index() {
        let mut pool = StylePool::default();

        let bold = pool.get_or_insert(Style::new().bold(true));
        let again = pool.get_or_insert(Style::new().bold(true));
        let red = pool.get_or_insert(Style::new().fill_color(Color::RED));

        assert_eq!(bold, again);
        assert_ne!(bold, red);
        assert_eq!(pool.len(), 3);
    }
}
