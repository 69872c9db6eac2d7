//! Cell storage implementation
//!
//! Sparse, row-major storage: only cells that carry a value or a non-default
//! style are kept.

use std::collections::BTreeMap;

use super::{CellRange, CellValue};
use crate::style::{Style, StylePool};

/// Complete data for a single cell
#[derive(Debug, Clone, Default)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Index into the worksheet's style pool (0 = default style)
    pub style_index: u32,
}

impl CellData {
    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }

    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row, BTreeMap<col, CellData>>`, so iteration is
/// always in row-major order.
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
    style_pool: StylePool,
    column_widths: BTreeMap<u16, f64>,
    row_styles: BTreeMap<u32, u32>,
    merged_regions: Vec<CellRange>,
}

impl CellStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a mutable cell, creating it with the row's style if absent
    pub fn get_or_create(&mut self, row: u32, col: u16) -> &mut CellData {
        let row_style = self.row_styles.get(&row).copied().unwrap_or(0);
        self.rows
            .entry(row)
            .or_default()
            .entry(col)
            .or_insert_with(|| CellData::with_style(CellValue::Empty, row_style))
    }

    /// Set a cell's value, keeping its style
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        self.get_or_create(row, col).value = value;
    }

    /// Set a cell's style index, keeping its value
    pub fn set_style(&mut self, row: u32, col: u16, style_index: u32) {
        self.get_or_create(row, col).style_index = style_index;
    }

    /// Iterate over the stored cells of one row, in column order
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u16, &CellData)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cells| cells.iter().map(|(col, cell)| (*col, cell)))
    }

    /// Iterate over all stored cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(row, cells)| cells.iter().map(move |(col, cell)| (*row, *col, cell)))
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    /// Intern a style and return its index
    pub fn intern_style(&mut self, style: Style) -> u32 {
        self.style_pool.get_or_insert(style)
    }

    pub fn column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn row_styles(&self) -> &BTreeMap<u32, u32> {
        &self.row_styles
    }

    pub fn set_row_style(&mut self, row: u32, style_index: u32) {
        self.row_styles.insert(row, style_index);
    }

    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    pub fn add_merged_region(&mut self, range: CellRange) {
        self.merged_regions.push(range);
    }
}
