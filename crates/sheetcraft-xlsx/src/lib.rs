//! # sheetcraft-xlsx
//!
//! Moves a [`sheetcraft_core::Workbook`] in and out of the XLSX container
//! format. Writing goes through `rust_xlsxwriter`, reading through `calamine`.

pub mod error;
pub mod reader;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;

/// Number format applied to dates whose cell carries the general format
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
