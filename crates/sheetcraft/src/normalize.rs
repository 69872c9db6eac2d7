//! Assignment of cell inputs to worksheet cells

use chrono::DateTime;
use sheetcraft_core::{
    CellValue, ExcelDate, FillStyle, NumberFormat, VerticalAlignment, Worksheet,
};

use crate::color::to_argb;
use crate::error::{ColorField, Error, Result};
use crate::input::{CellInput, Scalar, StyledCell};

/// What happened to a cell input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The cell was written
    Assigned,
    /// The input matched no known shape and the cell was left alone
    Skipped,
}

/// Write `input` to the cell at (`row`, `col`)
///
/// `default_format` is used for numeric styled cells that carry no number
/// format of their own.
pub fn assign_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    input: &CellInput,
    default_format: Option<&str>,
) -> Result<Assignment> {
    match input {
        CellInput::Scalar(scalar) => assign_scalar(sheet, row, col, scalar)?,
        CellInput::Styled(cell) => assign_styled(sheet, row, col, cell, default_format)?,
        CellInput::Unrecognized(_) => return Ok(Assignment::Skipped),
    }
    Ok(Assignment::Assigned)
}

/// Convert a scalar to the value stored in the document
pub fn to_cell_value(scalar: &Scalar) -> Result<CellValue> {
    let value = match scalar {
        Scalar::Empty => CellValue::Empty,
        Scalar::Boolean(b) => CellValue::Boolean(*b),
        Scalar::Number(n) if n.is_finite() => CellValue::Number(*n),
        Scalar::Number(_) => return Err(unrepresentable(scalar, "not a finite number")),
        Scalar::String(s) => CellValue::String(s.clone()),
        Scalar::DateTime(dt) => date_value(scalar, ExcelDate::from_datetime(*dt))?,
        Scalar::Timestamp(ts) => {
            let dt = DateTime::from_timestamp_millis(ts.utc_timestamp)
                .ok_or_else(|| unrepresentable(scalar, "timestamp out of range"))?;
            date_value(scalar, ExcelDate::from_datetime(dt.naive_utc()))?
        }
    };
    Ok(value)
}

fn date_value(scalar: &Scalar, date: ExcelDate) -> Result<CellValue> {
    if date.is_valid() {
        Ok(CellValue::DateTime(date))
    } else {
        Err(unrepresentable(scalar, "date outside 1900-01-01..=9999-12-31"))
    }
}

fn unrepresentable(scalar: &Scalar, reason: &'static str) -> Error {
    Error::UnrepresentableValue {
        value: scalar.to_string(),
        reason,
    }
}

fn assign_scalar(sheet: &mut Worksheet, row: u32, col: u16, scalar: &Scalar) -> Result<()> {
    let value = to_cell_value(scalar)?;
    sheet.set_cell_value_at(row, col, value)?;
    Ok(())
}

fn assign_styled(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &StyledCell,
    default_format: Option<&str>,
) -> Result<()> {
    let fill = cell
        .background_color
        .as_deref()
        .map(|value| to_argb(ColorField::Background, col, value))
        .transpose()?;
    let font_color = cell
        .color
        .as_deref()
        .map(|value| to_argb(ColorField::Foreground, col, value))
        .transpose()?;
    let number_format = match cell.value {
        Scalar::Number(_) => cell.number_format.as_deref().or(default_format),
        _ => None,
    };

    sheet.update_cell_style_at(row, col, |style| {
        if let Some(color) = fill {
            style.fill = FillStyle::solid(color);
        }
        if let Some(color) = font_color {
            style.font.color = color;
        }
        if let Some(format) = number_format {
            style.number_format = NumberFormat::from_string(format);
        }
        style.alignment.vertical = cell
            .vertical
            .map(Into::into)
            .unwrap_or(VerticalAlignment::Top);
        if let Some(horizontal) = cell.horizontal {
            style.alignment.horizontal = horizontal.into();
        }
        style.alignment.wrap_text = cell.wrap_text.unwrap_or(true);
    })?;

    assign_scalar(sheet, row, col, &cell.value).map_err(|source| Error::InvalidCellAssignment {
        row,
        col,
        value: cell.value.to_string(),
        source: Box::new(source),
    })
}
