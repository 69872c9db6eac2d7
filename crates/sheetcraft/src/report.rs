//! Report builder: pages in, XLSX out

use std::io::Cursor;

use sheetcraft_core::{
    Alignment, CellValue, FontStyle, NumberFormat, Style, Workbook, Worksheet,
};
use sheetcraft_xlsx::XlsxWriter;

use crate::error::{Error, Result};
use crate::extract::{step, ReadDirection};
use crate::layout::lay_out_headers;
use crate::normalize::assign_cell;
use crate::options::ReportOptions;
use crate::page::Page;

/// Build an XLSX document with one sheet per page, in order
pub fn report(pages: &[Page]) -> Result<Cursor<Vec<u8>>> {
    report_with_options(pages, &ReportOptions::default())
}

/// Build an XLSX document with custom options
pub fn report_with_options(pages: &[Page], options: &ReportOptions) -> Result<Cursor<Vec<u8>>> {
    let workbook = build_workbook_with_options(pages, options)?;
    Ok(Cursor::new(XlsxWriter::to_buffer(&workbook)?))
}

/// Build the in-memory workbook for `pages`
pub fn build_workbook(pages: &[Page]) -> Result<Workbook> {
    build_workbook_with_options(pages, &ReportOptions::default())
}

/// Build the in-memory workbook for `pages` with custom options
pub fn build_workbook_with_options(pages: &[Page], options: &ReportOptions) -> Result<Workbook> {
    let mut workbook = Workbook::empty();
    for page in pages {
        let index = workbook.add_worksheet_with_name(&page.name)?;
        let sheet = workbook
            .worksheet_mut(index)
            .ok_or_else(|| Error::SheetNotFound(page.name.clone()))?;
        write_page(sheet, page, options)?;
    }
    Ok(workbook)
}

/// Write a page's title, headers and data rows into an empty sheet
pub fn write_page(sheet: &mut Worksheet, page: &Page, options: &ReportOptions) -> Result<()> {
    let mut row = 1;

    if let Some(title) = page.title.as_deref().filter(|t| !t.is_empty()) {
        sheet.set_cell_value_at(1, 1, title)?;
        let font =
            FontStyle::sized(options.font_name.as_str(), options.title_font_size).with_bold(true);
        sheet.update_cell_style_at(1, 1, |style| style.font = font)?;
        row = 2;
    }

    lay_out_headers(sheet, row, &page.columns, options)?;
    let (first_data_row, _) = step(row, 1, ReadDirection::Column, page.columns.len())?;

    let data_style = data_row_style(options);
    for (offset, cells) in page.rows.iter().enumerate() {
        let (row, _) = step(first_data_row, 1, ReadDirection::Column, offset)?;
        if options.style_data_rows {
            sheet.set_row_style(row, &data_style)?;
        }
        for (offset, input) in cells.iter().enumerate() {
            let (_, col) = step(row, 1, ReadDirection::Row, offset)?;
            assign_cell(sheet, row, col, input, page.default_number_format.as_deref())?;
            apply_date_format(sheet, row, col, &options.date_format)?;
        }
    }

    log::debug!(
        "page '{}': {} header rows, {} data rows",
        page.name,
        page.columns.len(),
        page.rows.len()
    );
    Ok(())
}

fn data_row_style(options: &ReportOptions) -> Style {
    Style::new()
        .font(FontStyle::sized(options.font_name.as_str(), options.data_font_size))
        .alignment(Alignment::top_wrapped())
}

/// Give date cells without a number format the report's date format
fn apply_date_format(sheet: &mut Worksheet, row: u32, col: u16, format: &str) -> Result<()> {
    let is_date = matches!(sheet.value_ref_at(row, col), Some(CellValue::DateTime(_)));
    if is_date && sheet.style_at(row, col).number_format.is_general() {
        sheet.update_cell_style_at(row, col, |style| {
            style.number_format = NumberFormat::from_string(format)
        })?;
    }
    Ok(())
}
