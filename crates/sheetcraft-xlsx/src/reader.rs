//! XLSX reader

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use calamine::{CellErrorType, Data, Dimensions, Range, Reader, Xlsx};
use sheetcraft_core::{CellError, CellRange, CellValue, ExcelDate, Workbook, Worksheet};

use crate::error::{XlsxError, XlsxResult};

/// XLSX file reader
///
/// Cell values, cached formula results and merged regions are restored.
/// Cell styles, hyperlink targets and rich text run boundaries are not:
/// links and rich text come back as plain strings.
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a workbook from an in-memory XLSX file
    pub fn read_bytes(bytes: &[u8]) -> XlsxResult<Workbook> {
        Self::read(Cursor::new(bytes))
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        let mut xlsx: Xlsx<R> = Xlsx::new(reader)?;
        let mut workbook = Workbook::empty();

        for name in xlsx.sheet_names() {
            let values = xlsx.worksheet_range(&name)?;
            let formulas = xlsx.worksheet_formula(&name)?;
            let merges = match xlsx.worksheet_merge_cells(&name) {
                Some(merges) => merges?,
                None => Vec::new(),
            };

            let index = workbook.add_worksheet_with_name(&name)?;
            let sheet = workbook
                .worksheet_mut(index)
                .ok_or_else(|| XlsxError::InvalidFormat(format!("sheet '{}' vanished", name)))?;

            load_values(sheet, &values)?;
            load_formulas(sheet, &formulas)?;
            load_merges(sheet, &merges)?;

            log::debug!(
                "read sheet '{}' ({} cells, {} merges)",
                name,
                sheet.cell_count(),
                sheet.merged_regions().len()
            );
        }

        Ok(workbook)
    }
}

fn load_values(sheet: &mut Worksheet, range: &Range<Data>) -> XlsxResult<()> {
    let Some((start_row, start_col)) = range.start() else {
        return Ok(());
    };

    for (r, c, data) in range.used_cells() {
        let (row, col) = position(start_row, start_col, r, c)?;
        if let Some(value) = to_cell_value(data) {
            sheet.set_cell_value_at(row, col, value)?;
        }
    }
    Ok(())
}

/// Attach formula text to cells, keeping the value already read as the cached result
fn load_formulas(sheet: &mut Worksheet, formulas: &Range<String>) -> XlsxResult<()> {
    let Some((start_row, start_col)) = formulas.start() else {
        return Ok(());
    };

    for (r, c, text) in formulas.used_cells() {
        if text.is_empty() {
            continue;
        }
        let (row, col) = position(start_row, start_col, r, c)?;
        let result = match sheet.get_value_at(row, col) {
            CellValue::Empty => None,
            // Cached error results are stored as text by some writers
            CellValue::String(s) => Some(match CellError::parse(&s) {
                Some(err) => CellValue::Error(err),
                None => CellValue::String(s),
            }),
            other => Some(other),
        };
        sheet.set_cell_value_at(
            row,
            col,
            CellValue::Formula {
                text: text.clone(),
                result: result.map(Box::new),
            },
        )?;
    }
    Ok(())
}

fn load_merges(sheet: &mut Worksheet, merges: &[Dimensions]) -> XlsxResult<()> {
    for dims in merges {
        let (first_row, first_col) = position(dims.start.0, dims.start.1, 0, 0)?;
        let (last_row, last_col) = position(dims.end.0, dims.end.1, 0, 0)?;
        sheet.merge_cells(&CellRange::from_indices(
            first_row, first_col, last_row, last_col,
        ))?;
    }
    Ok(())
}

/// Absolute 1-based position of a cell given a 0-based range origin and offset
fn position(start_row: u32, start_col: u32, r: usize, c: usize) -> XlsxResult<(u32, u16)> {
    let row = start_row as usize + r + 1;
    let col = start_col as usize + c + 1;
    let row = u32::try_from(row)
        .map_err(|_| XlsxError::InvalidFormat(format!("row {} out of range", row)))?;
    let col = u16::try_from(col)
        .map_err(|_| XlsxError::InvalidFormat(format!("column {} out of range", col)))?;
    Ok((row, col))
}

fn to_cell_value(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => return None,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) if dt.is_datetime() => {
            CellValue::DateTime(ExcelDate::from_serial(dt.as_f64()))
        }
        // Durations keep their raw day count
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::DateTime(ExcelDate::parse_iso(s)),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(to_cell_error(e)),
    };
    Some(value)
}

fn to_cell_error(err: &CellErrorType) -> CellError {
    match err {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}
