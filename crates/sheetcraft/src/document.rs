//! Loading, saving and sheet lookup for existing documents

use std::fmt;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sheetcraft_core::{Workbook, Worksheet};
use sheetcraft_xlsx::{XlsxReader, XlsxWriter};

use crate::error::{Error, Result};

/// Sheet selector: by name or by 0-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRef<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for SheetRef<'a> {
    fn from(name: &'a str) -> Self {
        SheetRef::Name(name)
    }
}

impl<'a> From<&'a String> for SheetRef<'a> {
    fn from(name: &'a String) -> Self {
        SheetRef::Name(name)
    }
}

impl From<usize> for SheetRef<'_> {
    fn from(index: usize) -> Self {
        SheetRef::Index(index)
    }
}

impl fmt::Display for SheetRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetRef::Name(name) => write!(f, "'{}'", name),
            SheetRef::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// An XLSX document held in memory
///
/// ```rust
/// use sheetcraft::prelude::*;
///
/// let bytes = report(&[Page::new("People").row(vec!["  Ann  ".into()])])
///     .unwrap()
///     .into_inner();
///
/// let document = Document::from_bytes(&bytes).unwrap();
/// let sheet = document.sheet("People").unwrap();
/// assert_eq!(sheet.value(1, 1).unwrap(), FieldValue::Text("Ann".into()));
/// ```
#[derive(Debug, Default)]
pub struct Document {
    workbook: Workbook,
}

impl Document {
    /// An empty document with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a document from any byte stream
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Read a document from the bytes of an XLSX file
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            workbook: XlsxReader::read_bytes(bytes)?,
        })
    }

    /// Read a document from a base64-encoded XLSX file
    pub fn from_base64(content: &str) -> Result<Self> {
        let bytes = STANDARD.decode(content.trim())?;
        Self::from_bytes(&bytes)
    }

    /// Read a document from a file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            workbook: XlsxReader::read_file(path)?,
        })
    }

    /// Write the document to a file, returning the path written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        XlsxWriter::write_file(&self.workbook, path)?;
        Ok(path.to_path_buf())
    }

    /// Serialize the document to XLSX bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(XlsxWriter::to_buffer(&self.workbook)?)
    }

    /// Serialize the document into a readable stream
    pub fn to_reader(&self) -> Result<Cursor<Vec<u8>>> {
        Ok(Cursor::new(self.to_bytes()?))
    }

    /// Serialize the document to base64
    pub fn to_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_bytes()?))
    }

    /// Look up a sheet by name or index
    pub fn sheet<'a, S: Into<SheetRef<'a>>>(&self, sheet: S) -> Result<&Worksheet> {
        let sheet = sheet.into();
        let found = match sheet {
            SheetRef::Name(name) => self.workbook.worksheet_by_name(name),
            SheetRef::Index(index) => self.workbook.worksheet(index),
        };
        found.ok_or_else(|| Error::SheetNotFound(sheet.to_string()))
    }

    /// Look up a sheet by name or index, for writing
    pub fn sheet_mut<'a, S: Into<SheetRef<'a>>>(&mut self, sheet: S) -> Result<&mut Worksheet> {
        let sheet = sheet.into();
        let found = match sheet {
            SheetRef::Name(name) => self.workbook.worksheet_by_name_mut(name),
            SheetRef::Index(index) => self.workbook.worksheet_mut(index),
        };
        found.ok_or_else(|| Error::SheetNotFound(sheet.to_string()))
    }

    /// Append an empty sheet
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut Worksheet> {
        let index = self.workbook.add_worksheet_with_name(name)?;
        self.sheet_mut(index)
    }

    /// Sheet names, in order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.sheet_names()
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    pub fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    pub fn into_workbook(self) -> Workbook {
        self.workbook
    }
}

impl From<Workbook> for Document {
    fn from(workbook: Workbook) -> Self {
        Self { workbook }
    }
}
