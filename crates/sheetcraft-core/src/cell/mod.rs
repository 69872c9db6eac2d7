//! Cells: addresses, values, dates and sparse storage

mod address;
mod date;
mod storage;
mod value;

pub use address::{CellAddress, CellRange};
pub use date::ExcelDate;
pub use storage::{CellData, CellStorage};
pub use value::{CellError, CellValue, RichTextRun};
