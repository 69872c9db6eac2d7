//! XLSX writer

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Formula, Url};
use sheetcraft_core::{CellData, CellValue, NumberFormat, Style, Workbook, Worksheet};

use crate::error::XlsxResult;
use crate::styles::FormatCache;
use crate::DEFAULT_DATE_FORMAT;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let bytes = Self::to_buffer(workbook)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write a workbook to a writer
    pub fn write<W: Write>(workbook: &Workbook, mut writer: W) -> XlsxResult<()> {
        writer.write_all(&Self::to_buffer(workbook)?)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a workbook into an in-memory XLSX file
    pub fn to_buffer(workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        let mut book = rust_xlsxwriter::Workbook::new();
        let mut formats = FormatCache::default();

        for sheet in workbook.worksheets() {
            let target = book.add_worksheet();
            target.set_name(sheet.name())?;
            Self::write_worksheet(target, sheet, &mut formats)?;
        }

        Ok(book.save_to_buffer()?)
    }

    fn write_worksheet(
        target: &mut rust_xlsxwriter::Worksheet,
        sheet: &Worksheet,
        formats: &mut FormatCache,
    ) -> XlsxResult<()> {
        log::debug!(
            "writing sheet '{}' ({} cells, {} merges)",
            sheet.name(),
            sheet.cell_count(),
            sheet.merged_regions().len()
        );

        for (col, width) in sheet.column_widths() {
            target.set_column_width(col - 1, *width)?;
        }

        for (row, style) in sheet.row_styles() {
            target.set_row_format(row - 1, formats.format(style))?;
        }

        // Merges first: merge_range blanks the whole rectangle, the anchor
        // value is written over it below.
        for range in sheet.merged_regions() {
            if range.is_single_cell() {
                continue;
            }
            let style = sheet.style_at(range.start.row, range.start.col);
            target.merge_range(
                range.start.row - 1,
                range.start.col - 1,
                range.end.row - 1,
                range.end.col - 1,
                "",
                formats.format(style),
            )?;
        }

        for (row, col, cell) in sheet.iter_cells() {
            let style = sheet
                .style_by_index(cell.style_index)
                .cloned()
                .unwrap_or_default();
            Self::write_cell(target, row - 1, col - 1, cell, &style, formats)?;
        }

        Ok(())
    }

    fn write_cell(
        target: &mut rust_xlsxwriter::Worksheet,
        row: u32,
        col: u16,
        cell: &CellData,
        style: &Style,
        formats: &mut FormatCache,
    ) -> XlsxResult<()> {
        match &cell.value {
            CellValue::Empty => {
                if cell.style_index != 0 {
                    target.write_blank(row, col, formats.format(style))?;
                }
            }
            CellValue::Boolean(b) => {
                target.write_boolean_with_format(row, col, *b, formats.format(style))?;
            }
            CellValue::Number(n) => {
                if n.is_finite() {
                    target.write_number_with_format(row, col, *n, formats.format(style))?;
                } else {
                    log::warn!(
                        "cell ({}, {}) holds non-finite number {}; left blank",
                        row + 1,
                        col + 1,
                        n
                    );
                    target.write_blank(row, col, formats.format(style))?;
                }
            }
            CellValue::String(s) => {
                target.write_string_with_format(row, col, s, formats.format(style))?;
            }
            CellValue::DateTime(date) => {
                let style = date_style(style);
                if date.is_valid() {
                    target.write_number_with_format(
                        row,
                        col,
                        date.serial(),
                        formats.format(&style),
                    )?;
                } else {
                    log::warn!(
                        "cell ({}, {}) holds invalid date {}; left blank",
                        row + 1,
                        col + 1,
                        date
                    );
                    target.write_blank(row, col, formats.format(&style))?;
                }
            }
            CellValue::Error(e) => {
                let formula = Formula::new(format!("={}", e.as_str())).set_result(e.as_str());
                target.write_formula_with_format(row, col, formula, formats.format(style))?;
            }
            CellValue::Formula { text, result } => {
                let mut formula = Formula::new(text.as_str());
                let mut style = style.clone();
                if let Some(result) = result {
                    formula = formula.set_result(formula_result_text(result));
                    if matches!(result.as_ref(), CellValue::DateTime(_)) {
                        style = date_style(&style);
                    }
                }
                target.write_formula_with_format(row, col, formula, formats.format(&style))?;
            }
            CellValue::Hyperlink { text, target: link } => {
                let url = Url::new(link.as_str()).set_text(text.as_str());
                target.write_url_with_format(row, col, url, formats.format(style))?;
            }
            CellValue::RichText(runs) => {
                let run_formats: Vec<Format> = runs
                    .iter()
                    .map(|run| match &run.font {
                        Some(font) => formats.font_format(font).clone(),
                        None => formats.font_format(&style.font).clone(),
                    })
                    .collect();
                let segments: Vec<(&Format, &str)> = run_formats
                    .iter()
                    .zip(runs)
                    .filter(|(_, run)| !run.text.is_empty())
                    .map(|(format, run)| (format, run.text.as_str()))
                    .collect();

                if segments.is_empty() {
                    target.write_blank(row, col, formats.format(style))?;
                } else {
                    target.write_rich_string_with_format(
                        row,
                        col,
                        &segments,
                        formats.format(style),
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Dates without an explicit format would display as bare serials
fn date_style(style: &Style) -> Style {
    let mut style = style.clone();
    if style.number_format.is_general() {
        style.number_format = NumberFormat::from_string(DEFAULT_DATE_FORMAT);
    }
    style
}

/// Text form of a cached formula result, as stored in the file
fn formula_result_text(result: &CellValue) -> String {
    match result {
        CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        CellValue::DateTime(date) => date.serial().to_string(),
        CellValue::Formula {
            result: Some(inner),
            ..
        } => formula_result_text(inner),
        other => other.to_string(),
    }
}
