//! # sheetcraft-core
//!
//! The in-memory document shared by the report builder and the XLSX bridge:
//! a [`Workbook`] of named [`Worksheet`]s whose cells hold a [`CellValue`] and
//! an interned [`Style`], plus merged regions, column widths and row styles.
//!
//! Rows and columns are 1-based throughout, as in A1 notation.
//!
//! ```rust
//! use sheetcraft_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Total").unwrap();
//! sheet.set_cell_value_at(2, 1, 42.0).unwrap();
//!
//! assert_eq!(sheet.get_value("A2").unwrap(), CellValue::Number(42.0));
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellError, CellRange, CellValue, ExcelDate, RichTextRun};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, Style, StylePool, VerticalAlignment,
};

/// Last row of a sheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Last column of a sheet (`XFD`)
pub const MAX_COLS: u16 = 16_384;

/// Longest sheet name Excel accepts, in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;
