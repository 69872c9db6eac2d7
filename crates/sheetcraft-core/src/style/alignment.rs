//! Horizontal and vertical placement of cell text

/// Placement of text within a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub wrap_text: bool,
}

impl Alignment {
    /// Top-aligned, word-wrapped text: the layout of report headers and data rows
    pub fn top_wrapped() -> Self {
        Self {
            horizontal: HorizontalAlignment::General,
            vertical: VerticalAlignment::Top,
            wrap_text: true,
        }
    }
}

/// Horizontal alignment
///
/// `General` leaves the choice to the application: text left, numbers right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Repeat the content across the cell width
    Fill,
    Justify,
    /// Center across the selection without merging
    CenterContinuous,
    Distributed,
}

/// Vertical alignment; `Bottom` is the application default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}
