//! Cell borders

use super::Color;

/// Borders of a cell, one optional edge per side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// The same edge on all four sides
    pub fn outline(line: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge { style: line, color });
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
        }
    }

    pub fn is_empty(&self) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(Option::is_none)
    }
}

/// Line style and color of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    pub style: BorderLineStyle,
    pub color: Color,
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    Hair,
}
