//! # sheetcraft
//!
//! Declarative XLSX reports and schema-based reading of existing documents.
//!
//! A report is a list of [`Page`]s. Each page has an optional title, rows of
//! header declarations that may span several columns and rows, and rows of
//! data cells that are either bare values or values with presentation
//! attributes. Reading goes the other way: a [`Document`] loads an XLSX file
//! and [`WorksheetExt`] projects runs of cells into named [`Record`]s.
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft::prelude::*;
//!
//! let page = Page::new("Sales")
//!     .title("Quarterly sales")
//!     .header_row(vec![
//!         ColumnDeclaration::new("Region").row_span(2.0),
//!         ColumnDeclaration::new("Revenue").col_span(2.0).background_color("#ddd"),
//!     ])
//!     .header_row(vec![ColumnDeclaration::new("Q1"), ColumnDeclaration::new("Q2")])
//!     .row(vec![
//!         "North".into(),
//!         StyledCell::new(1200.0).number_format("#,##0").into(),
//!         1350.0.into(),
//!     ]);
//!
//! let bytes = report(&[page]).unwrap().into_inner();
//!
//! let document = Document::from_bytes(&bytes).unwrap();
//! let sheet = document.sheet("Sales").unwrap();
//! let record = sheet
//!     .values_by_schema(4, 1, ReadDirection::Row, &["region", "q1", "q2"])
//!     .unwrap();
//! assert_eq!(record.get("q1"), Some(&FieldValue::Number(1200.0)));
//! ```
//!
//! Rows and columns are 1-based everywhere.

pub mod color;
pub mod document;
pub mod error;
pub mod extract;
pub mod input;
pub mod layout;
pub mod ledger;
pub mod normalize;
pub mod options;
pub mod page;
pub mod prelude;
pub mod report;
pub mod sheet;

pub use color::{normalize_color, normalize_hex};
pub use document::{Document, SheetRef};
pub use error::{ColorField, Error, Result};
pub use extract::{FieldValue, ReadDirection, Record};
pub use input::{CellInput, HorizontalAlign, Scalar, StyledCell, Timestamp, VerticalAlign};
pub use layout::{effective_span, lay_out_headers, paint_header, HeaderLayout, PlacedHeader};
pub use ledger::SkipLedger;
pub use normalize::{assign_cell, Assignment};
pub use options::ReportOptions;
pub use page::{ColumnDeclaration, Page};
pub use report::{build_workbook, build_workbook_with_options, report, report_with_options};
pub use sheet::WorksheetExt;

// Re-export the document model
pub use sheetcraft_core::{CellAddress, CellError, CellRange, CellValue, Workbook, Worksheet};
