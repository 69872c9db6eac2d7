//! Projection of cell runs into named records

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use sheetcraft_core::{
    CellAddress, CellError, CellValue, ExcelDate, Worksheet, MAX_COLS, MAX_ROWS,
};

use crate::error::{Error, Result};

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Axis along which a schema is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadDirection {
    /// Successive fields come from successive columns of one row
    Row,
    /// Successive fields come from successive rows of one column
    Column,
}

impl FromStr for ReadDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "row" => Ok(ReadDirection::Row),
            "column" | "col" => Ok(ReadDirection::Column),
            other => Err(format!("unknown read direction '{}'", other)),
        }
    }
}

/// A normalized cell value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDateTime),
    /// Error value of the cell or of its formula result
    Error(CellError),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(dt) => write!(f, "{}", dt),
            FieldValue::Error(e) => write!(f, "{}", e),
        }
    }
}

// Integral numbers serialize as integers so records deserialize into integer fields
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Date(dt) => dt.serialize(serializer),
            FieldValue::Error(e) => e.serialize(serializer),
        }
    }
}

/// Field values keyed by name, in schema order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, FieldValue>);

impl Record {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> IndexMap<String, FieldValue> {
        self.0
    }

    /// Convert into a caller-defined type through its serde representation
    ///
    /// Dates arrive as ISO 8601 strings, errors as their `#...` text.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

/// Read one cell per field, starting at (`row`, `col`) and stepping along `direction`
pub fn values_by_schema<S: AsRef<str>>(
    sheet: &Worksheet,
    row: u32,
    col: u16,
    direction: ReadDirection,
    schema: &[S],
) -> Result<Record> {
    CellAddress::checked(row, col)?;

    let mut record = IndexMap::with_capacity(schema.len());
    for (offset, field) in schema.iter().enumerate() {
        let (r, c) = step(row, col, direction, offset)?;
        let value = sheet
            .value_ref_at(r, c)
            .map(field_value)
            .unwrap_or(FieldValue::Null);
        record.insert(field.as_ref().to_string(), value);
    }
    Ok(Record(record))
}

/// Read one normalized cell; blank text reads as [`FieldValue::Null`]
pub fn value(sheet: &Worksheet, row: u32, col: u16) -> Result<FieldValue> {
    CellAddress::checked(row, col)?;

    let value = sheet
        .value_ref_at(row, col)
        .map(field_value)
        .unwrap_or(FieldValue::Null);
    Ok(match value {
        FieldValue::Text(s) if s.is_empty() => FieldValue::Null,
        other => other,
    })
}

/// Normalize a stored cell value
pub fn field_value(value: &CellValue) -> FieldValue {
    match value {
        CellValue::Empty => FieldValue::Null,
        CellValue::Boolean(b) => FieldValue::Boolean(*b),
        CellValue::Number(n) => FieldValue::Number(*n),
        CellValue::String(s) => FieldValue::Text(collapse_whitespace(s)),
        CellValue::DateTime(date) => date_field(date),
        CellValue::Error(e) => FieldValue::Error(*e),
        CellValue::Formula {
            result: Some(result),
            ..
        } => field_value(result),
        CellValue::Formula { result: None, .. } => FieldValue::Null,
        CellValue::Hyperlink { text, .. } => FieldValue::Text(collapse_whitespace(text)),
        CellValue::RichText(_) => {
            FieldValue::Text(collapse_whitespace(&value.rich_text_joined(" ").unwrap_or_default()))
        }
    }
}

fn date_field(date: &ExcelDate) -> FieldValue {
    date.to_datetime()
        .map(FieldValue::Date)
        .unwrap_or(FieldValue::Null)
}

/// Trim and turn every whitespace run into a single space
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Coordinates of the `offset`-th cell from (`row`, `col`) along `direction`
pub(crate) fn step(
    row: u32,
    col: u16,
    direction: ReadDirection,
    offset: usize,
) -> Result<(u32, u16)> {
    let wide_offset = u32::try_from(offset).unwrap_or(u32::MAX);
    match direction {
        ReadDirection::Row => {
            let c = u16::try_from(offset)
                .ok()
                .and_then(|offset| col.checked_add(offset))
                .filter(|c| *c <= MAX_COLS)
                .ok_or_else(|| {
                    Error::Core(sheetcraft_core::Error::ColumnOutOfBounds(
                        u32::from(col).saturating_add(wide_offset),
                        MAX_COLS,
                    ))
                })?;
            Ok((row, c))
        }
        ReadDirection::Column => {
            let r = u32::try_from(offset)
                .ok()
                .and_then(|offset| row.checked_add(offset))
                .filter(|r| *r <= MAX_ROWS)
                .ok_or_else(|| {
                    Error::Core(sheetcraft_core::Error::RowOutOfBounds(
                        row.saturating_add(wide_offset),
                        MAX_ROWS,
                    ))
                })?;
            Ok((r, col))
        }
    }
}
