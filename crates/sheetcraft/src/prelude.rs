//! Prelude module - common imports for sheetcraft users
//!
//! ```rust
//! use sheetcraft::prelude::*;
//! ```

pub use crate::{
    // Report input
    build_workbook,
    report,
    CellInput,
    ColumnDeclaration,
    Page,
    ReportOptions,
    Scalar,
    StyledCell,
    Timestamp,

    // Reading
    Document,
    FieldValue,
    ReadDirection,
    Record,
    SheetRef,
    WorksheetExt,

    // Error types
    Error,
    Result,

    // Document model
    CellValue,
    Workbook,
    Worksheet,
};
