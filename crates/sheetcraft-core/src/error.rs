//! Error types for sheetcraft-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the document model
#[derive(Debug, Error)]
pub enum Error {
    /// A1 reference that cannot be parsed
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    #[error("Row {0} out of bounds (expected 1..={1})")]
    RowOutOfBounds(u32, u32),

    #[error("Column {0} out of bounds (expected 1..={1})")]
    ColumnOutOfBounds(u32, u16),

    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Sheet names are compared ignoring case
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// A merge request intersects an existing merged region
    #[error("Range {range} overlaps merged region {existing}")]
    MergeOverlap { range: String, existing: String },
}
