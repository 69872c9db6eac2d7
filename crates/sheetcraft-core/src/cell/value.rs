//! Cell contents

use chrono::NaiveDateTime;
use std::fmt;

use super::ExcelDate;
use crate::style::FontStyle;

/// Contents of a cell
///
/// Dates are kept as serial numbers so a value read from a document compares
/// equal to the one that was written.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    String(String),
    DateTime(ExcelDate),
    /// `#VALUE!`, `#REF!` and the other error literals
    Error(CellError),

    /// Formula with its last cached result
    Formula {
        /// Formula text (e.g., "SUM(A1:A10)"), with or without the leading `=`
        text: String,
        /// Last calculated value, if the document carried one
        result: Option<Box<CellValue>>,
    },

    /// Hyperlink with visible text
    Hyperlink {
        /// Text shown in the cell
        text: String,
        /// Link target (URL, `mailto:`, internal reference)
        target: String,
    },

    /// Text made of differently formatted runs
    RichText(Vec<RichTextRun>),
}

impl CellValue {
    /// Create a new formula value without a cached result
    pub fn formula<S: Into<String>>(text: S) -> Self {
        CellValue::Formula {
            text: text.into(),
            result: None,
        }
    }

    /// Create a formula value with a cached result
    pub fn formula_with_result<S: Into<String>>(text: S, result: CellValue) -> Self {
        CellValue::Formula {
            text: text.into(),
            result: Some(Box::new(result)),
        }
    }

    /// Create a hyperlink value
    pub fn hyperlink<T: Into<String>, U: Into<String>>(text: T, target: U) -> Self {
        CellValue::Hyperlink {
            text: text.into(),
            target: target.into(),
        }
    }

    /// True for `Empty` only; an empty string is a value
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric value, looking through a formula to its cached result
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Formula {
                result: Some(v), ..
            } => v.as_number(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Formula {
                result: Some(v), ..
            } => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            CellValue::Formula {
                result: Some(v), ..
            } => v.as_string(),
            _ => None,
        }
    }

    /// Try to get the value as a calendar date-time
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(date) => date.to_datetime(),
            CellValue::Formula {
                result: Some(v), ..
            } => v.as_datetime(),
            _ => None,
        }
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Concatenate the text of all runs, separated by `sep`
    pub fn rich_text_joined(&self, sep: &str) -> Option<String> {
        match self {
            CellValue::RichText(runs) => Some(
                runs.iter()
                    .map(|run| run.text.as_str())
                    .collect::<Vec<_>>()
                    .join(sep),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::DateTime(d) => write!(f, "{}", d),
            CellValue::Error(e) => write!(f, "{}", e),
            CellValue::Formula {
                result: Some(v), ..
            } => write!(f, "{}", v),
            CellValue::Formula { text, .. } => write!(f, "{}", text),
            CellValue::Hyperlink { text, .. } => write!(f, "{}", text),
            CellValue::RichText(runs) => {
                for run in runs {
                    write!(f, "{}", run.text)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(impl From<$t> for CellValue {
            fn from(n: $t) -> Self {
                CellValue::Number(n as f64)
            }
        })*
    };
}

number_from!(i32, i64, u32, f64);

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(ExcelDate::from_datetime(dt))
    }
}

impl From<ExcelDate> for CellValue {
    fn from(date: ExcelDate) -> Self {
        CellValue::DateTime(date)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// One run of a rich text value
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextRun {
    /// Run text
    pub text: String,
    /// Font override for this run; `None` inherits the cell font
    pub font: Option<FontStyle>,
}

impl RichTextRun {
    /// A run that inherits the cell font
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// A run with its own font
    pub fn styled<S: Into<String>>(text: S, font: FontStyle) -> Self {
        Self {
            text: text.into(),
            font: Some(font),
        }
    }
}

/// Error literals a cell or a formula result can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    Null,
    Div0,
    Value,
    Ref,
    Name,
    Num,
    Na,
    /// External data still loading
    GettingData,
}

const ERROR_LITERALS: [(CellError, &str); 8] = [
    (CellError::Null, "#NULL!"),
    (CellError::Div0, "#DIV/0!"),
    (CellError::Value, "#VALUE!"),
    (CellError::Ref, "#REF!"),
    (CellError::Name, "#NAME?"),
    (CellError::Num, "#NUM!"),
    (CellError::Na, "#N/A"),
    (CellError::GettingData, "#GETTING_DATA"),
];

impl CellError {
    /// The literal as it appears in a cell, e.g. `#DIV/0!`
    pub fn as_str(&self) -> &'static str {
        ERROR_LITERALS
            .iter()
            .find(|(error, _)| error == self)
            .map_or("#VALUE!", |(_, literal)| literal)
    }

    /// Recognize an error literal, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        ERROR_LITERALS
            .iter()
            .find(|(_, literal)| literal.eq_ignore_ascii_case(s))
            .map(|(error, _)| *error)
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
