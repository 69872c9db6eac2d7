//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::{Style, StylePool};

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell by row and column
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by row and column; missing cells read as [`CellValue::Empty`]
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Borrow a cell's value, if the cell exists
    pub fn value_ref_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col).map(|c| &c.value)
    }

    /// Get a style by its index in this worksheet's style pool.
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Get the effective style of a cell (the default style for missing cells)
    pub fn style_at(&self, row: u32, col: u16) -> &Style {
        let idx = self.cells.get(row, col).map(|c| c.style_index).unwrap_or(0);
        self.style_by_index(idx)
            .unwrap_or_else(|| self.cells.style_pool().default_style())
    }

    /// The worksheet's style pool
    pub fn style_pool(&self) -> &StylePool {
        self.cells.style_pool()
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column, keeping the cell's style
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        CellAddress::checked(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Edit a cell's current style in place
    ///
    /// A cell that does not exist yet starts from its row style.
    pub fn update_cell_style_at<F>(&mut self, row: u32, col: u16, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Style),
    {
        CellAddress::checked(row, col)?;
        let current = self.cells.get_or_create(row, col).style_index;
        let mut style = self
            .cells
            .style_pool()
            .get(current)
            .cloned()
            .unwrap_or_default();
        edit(&mut style);
        let style_index = self.cells.intern_style(style);
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    // === Rows and Columns ===

    /// Get a column's explicit width in characters, if one was set
    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.cells.column_widths().get(&col).copied()
    }

    /// Set a column's width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        CellAddress::checked(1, col)?;
        self.cells.set_column_width(col, width);
        Ok(())
    }

    /// All explicit column widths (column → width)
    pub fn column_widths(&self) -> &BTreeMap<u16, f64> {
        self.cells.column_widths()
    }

    /// Get the style applied to a whole row, if any
    pub fn row_style(&self, row: u32) -> Option<&Style> {
        self.cells
            .row_styles()
            .get(&row)
            .and_then(|idx| self.style_by_index(*idx))
    }

    /// Apply a style to a whole row
    ///
    /// Cells created later in the row start from this style. Cells that
    /// already exist take over its font and alignment and keep their own
    /// fill, border and number format.
    pub fn set_row_style(&mut self, row: u32, style: &Style) -> Result<()> {
        CellAddress::checked(row, 1)?;
        let row_index = self.cells.intern_style(style.clone());
        self.cells.set_row_style(row, row_index);

        let existing: Vec<(u16, u32)> = self
            .cells
            .row_cells(row)
            .map(|(col, cell)| (col, cell.style_index))
            .collect();
        for (col, style_index) in existing {
            let mut merged = self
                .cells
                .style_pool()
                .get(style_index)
                .cloned()
                .unwrap_or_default();
            merged.font = style.font.clone();
            merged.alignment = style.alignment;
            let merged_index = self.cells.intern_style(merged);
            self.cells.set_style(row, col, merged_index);
        }
        Ok(())
    }

    /// Iterate over rows that carry a row style
    pub fn row_styles(&self) -> impl Iterator<Item = (u32, &Style)> {
        self.cells.row_styles().iter().filter_map(|(row, idx)| {
            self.style_by_index(*idx).map(|style| (*row, style))
        })
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        self.cells.merged_regions()
    }

    /// Merge cells
    ///
    /// Fails with [`Error::MergeOverlap`] if the range intersects an existing
    /// merged region.
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        CellAddress::checked(range.start.row, range.start.col)?;
        CellAddress::checked(range.end.row, range.end.col)?;

        if let Some(existing) = self
            .cells
            .merged_regions()
            .iter()
            .find(|existing| range.overlaps(existing))
        {
            return Err(Error::MergeOverlap {
                range: range.to_string(),
                existing: existing.to_string(),
            });
        }
        self.cells.add_merged_region(*range);
        Ok(())
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all stored cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{
        Alignment, BorderLineStyle, Color, FillStyle, FontStyle, VerticalAlignment,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value("A1", "Hello").unwrap();
        ws.set_cell_value("B1", 42.0).unwrap();
        ws.set_cell_value_at(2, 3, true).unwrap();

        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("Hello"));
        assert_eq!(ws.get_value_at(1, 2).as_number(), Some(42.0));
        assert_eq!(ws.get_value("C2").unwrap().as_bool(), Some(true));
        assert_eq!(ws.get_value_at(9, 9), CellValue::Empty);
    }

    #[test]
    fn test_rejects_zero_coordinates() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.set_cell_value_at(0, 1, 1.0).is_err());
        assert!(ws.set_cell_value_at(1, 0, 1.0).is_err());
        assert!(ws.set_column_width(0, 10.0).is_err());
    }

    #[test]
    fn test_update_cell_style_keeps_value() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell_value_at(1, 1, "x").unwrap();
        ws.update_cell_style_at(1, 1, |s| s.fill = FillStyle::solid(Color::RED))
            .unwrap();
        ws.update_cell_style_at(1, 1, |s| {
            s.border = crate::style::BorderStyle::outline(BorderLineStyle::Thin, Color::Auto)
        })
        .unwrap();

        let style = ws.style_at(1, 1);
        assert_eq!(style.fill, FillStyle::solid(Color::RED));
        assert!(!style.border.is_empty());
        assert_eq!(ws.get_value_at(1, 1).as_string(), Some("x"));
    }

    #[test]
    fn test_row_style_propagates_font_and_alignment() {
        let mut ws = Worksheet::new("Test");
        ws.update_cell_style_at(2, 1, |s| s.fill = FillStyle::solid(Color::RED))
            .unwrap();

        let row_style = Style::new()
            .font(FontStyle::sized("Calibri", 8.0).with_bold(true))
            .alignment(Alignment::top_wrapped());
        ws.set_row_style(2, &row_style).unwrap();

        let existing = ws.style_at(2, 1);
        assert!(existing.font.bold);
        assert_eq!(existing.fill, FillStyle::solid(Color::RED));
        assert_eq!(existing.alignment.vertical, VerticalAlignment::Top);

        ws.set_cell_value_at(2, 5, "later").unwrap();
        assert_eq!(ws.style_at(2, 5), &row_style);
        assert_eq!(ws.row_style(2), Some(&row_style));
        assert_eq!(ws.style_at(3, 5), &Style::default());
    }

    #[test]
    fn test_merge_cells() {
        let mut ws = Worksheet::new("Test");

        let range = CellRange::parse("A1:C3").unwrap();
        ws.merge_cells(&range).unwrap();
        assert_eq!(ws.merged_regions(), &[range]);

        let err = ws
            .merge_cells(&CellRange::parse("C3:D4").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::MergeOverlap { .. }));
        assert_eq!(err.to_string(), "Range C3:D4 overlaps merged region A1:C3");

        ws.merge_cells(&CellRange::parse("D1:D3").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 2);
    }
}
