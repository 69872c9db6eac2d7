//! Error types for sheetcraft

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Which color attribute of a declaration or cell failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    /// Fill color
    Background,
    /// Font color
    Foreground,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorField::Background => write!(f, "backgroundColor"),
            ColorField::Foreground => write!(f, "color"),
        }
    }
}

/// Errors raised while building or reading a document
#[derive(Debug, Error)]
pub enum Error {
    /// A color string is neither 3 nor 6 hex digits
    #[error("Invalid {field} '{value}' in column {column}: expected #rgb or #rrggbb")]
    InvalidColor {
        field: ColorField,
        column: u16,
        value: String,
    },

    /// A header span could not be merged
    #[error("Cannot merge cells ({first_row}, {first_col})-({last_row}, {last_col}): {source}")]
    MergeConflict {
        first_row: u32,
        first_col: u16,
        last_row: u32,
        last_col: u16,
        #[source]
        source: sheetcraft_core::Error,
    },

    /// The inner value of a styled cell could not be assigned
    #[error("Cannot assign {value} to cell ({row}, {col}): {source}")]
    InvalidCellAssignment {
        row: u32,
        col: u16,
        value: String,
        #[source]
        source: Box<Error>,
    },

    /// A sheet name or index does not resolve to a sheet
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A value has no spreadsheet representation
    #[error("Cannot store {value}: {reason}")]
    UnrepresentableValue { value: String, reason: &'static str },

    /// Document model error
    #[error(transparent)]
    Core(#[from] sheetcraft_core::Error),

    /// XLSX serialization error
    #[error(transparent)]
    Xlsx(#[from] sheetcraft_xlsx::XlsxError),

    /// Malformed base64 payload
    #[error("Invalid base64 document: {0}")]
    Base64(#[from] base64::DecodeError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
