//! Report options

use sheetcraft_xlsx::DEFAULT_DATE_FORMAT;

/// Options for building reports
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Font used for titles, headers and data rows (default: Calibri)
    pub font_name: String,
    /// Title font size (default: 14)
    pub title_font_size: f64,
    /// Header font size (default: 8)
    pub header_font_size: f64,
    /// Data row font size (default: 8)
    pub data_font_size: f64,
    /// Number format for date cells in data rows without one
    pub date_format: String,
    /// Give data rows a uniform font and top-aligned wrapped text
    pub style_data_rows: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            title_font_size: 14.0,
            header_font_size: 8.0,
            data_font_size: 8.0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            style_data_rows: true,
        }
    }
}
