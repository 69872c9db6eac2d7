//! Block writers and schema readers on worksheets

use sheetcraft_core::{CellAddress, Worksheet};

use crate::error::Result;
use crate::extract::{self, step, FieldValue, ReadDirection, Record};
use crate::input::CellInput;
use crate::normalize::assign_cell;

/// Extension trait for [`Worksheet`] to write blocks of inputs and read records
///
/// Coordinates are 1-based. Unrecognized inputs leave their cell untouched.
pub trait WorksheetExt {
    /// Write rows of inputs with the top-left cell at (`row`, `col`)
    fn set_values(&mut self, row: u32, col: u16, values: &[Vec<CellInput>]) -> Result<()>;

    /// Write rows of inputs with the top-left cell at an A1 address
    fn set_values_at(&mut self, address: &str, values: &[Vec<CellInput>]) -> Result<()>;

    /// Write inputs rightwards from (`row`, `col`)
    fn set_row_values(&mut self, row: u32, col: u16, values: &[CellInput]) -> Result<()>;

    /// Write inputs downwards from (`row`, `col`)
    fn set_column_values(&mut self, row: u32, col: u16, values: &[CellInput]) -> Result<()>;

    /// Read one normalized cell per schema field
    fn values_by_schema<S: AsRef<str>>(
        &self,
        row: u32,
        col: u16,
        direction: ReadDirection,
        schema: &[S],
    ) -> Result<Record>;

    /// Read one normalized cell
    fn value(&self, row: u32, col: u16) -> Result<FieldValue>;
}

impl WorksheetExt for Worksheet {
    fn set_values(&mut self, row: u32, col: u16, values: &[Vec<CellInput>]) -> Result<()> {
        for (offset, inputs) in values.iter().enumerate() {
            let (r, _) = step(row, col, ReadDirection::Column, offset)?;
            self.set_row_values(r, col, inputs)?;
        }
        Ok(())
    }

    fn set_values_at(&mut self, address: &str, values: &[Vec<CellInput>]) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_values(addr.row, addr.col, values)
    }

    fn set_row_values(&mut self, row: u32, col: u16, values: &[CellInput]) -> Result<()> {
        write_run(self, row, col, ReadDirection::Row, values)
    }

    fn set_column_values(&mut self, row: u32, col: u16, values: &[CellInput]) -> Result<()> {
        write_run(self, row, col, ReadDirection::Column, values)
    }

    fn values_by_schema<S: AsRef<str>>(
        &self,
        row: u32,
        col: u16,
        direction: ReadDirection,
        schema: &[S],
    ) -> Result<Record> {
        extract::values_by_schema(self, row, col, direction, schema)
    }

    fn value(&self, row: u32, col: u16) -> Result<FieldValue> {
        extract::value(self, row, col)
    }
}

fn write_run(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    direction: ReadDirection,
    values: &[CellInput],
) -> Result<()> {
    for (offset, input) in values.iter().enumerate() {
        let (r, c) = step(row, col, direction, offset)?;
        assign_cell(sheet, r, c, input, None)?;
    }
    Ok(())
}
