//! Cell inputs accepted by the report builder and the block writers
//!
//! JSON input is decided here, once: `null`, booleans, numbers and strings
//! become [`Scalar`]s, `{"utcTimestamp": ms}` becomes [`Scalar::Timestamp`],
//! an object with a `value` key becomes a [`StyledCell`], and anything else
//! is kept as [`CellInput::Unrecognized`] and skipped when written.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Deserialize;
use sheetcraft_core::{HorizontalAlignment, VerticalAlignment};

/// A bare cell value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// No value; clears the cell
    Empty,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Calendar date-time, only constructible from Rust
    #[serde(skip_deserializing)]
    DateTime(NaiveDateTime),
    /// Milliseconds since the Unix epoch, UTC
    Timestamp(Timestamp),
}

/// Date-like object carrying a UTC epoch timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Timestamp {
    #[serde(rename = "utcTimestamp")]
    pub utc_timestamp: i64,
}

/// Vertical alignment names accepted in cell input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[serde(alias = "center")]
    Middle,
    Bottom,
    Justify,
    Distributed,
}

impl From<VerticalAlign> for VerticalAlignment {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => VerticalAlignment::Top,
            VerticalAlign::Middle => VerticalAlignment::Center,
            VerticalAlign::Bottom => VerticalAlignment::Bottom,
            VerticalAlign::Justify => VerticalAlignment::Justify,
            VerticalAlign::Distributed => VerticalAlignment::Distributed,
        }
    }
}

/// Horizontal alignment names accepted in cell input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlign {
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

impl From<HorizontalAlign> for HorizontalAlignment {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::General => HorizontalAlignment::General,
            HorizontalAlign::Left => HorizontalAlignment::Left,
            HorizontalAlign::Center => HorizontalAlignment::Center,
            HorizontalAlign::Right => HorizontalAlignment::Right,
            HorizontalAlign::Fill => HorizontalAlignment::Fill,
            HorizontalAlign::Justify => HorizontalAlignment::Justify,
            HorizontalAlign::CenterContinuous => HorizontalAlignment::CenterContinuous,
            HorizontalAlign::Distributed => HorizontalAlignment::Distributed,
        }
    }
}

/// A scalar plus presentation attributes
///
/// Vertical alignment defaults to top and wrapping to on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledCell {
    pub value: Scalar,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    /// Applied to numeric values only
    #[serde(default)]
    pub number_format: Option<String>,
    #[serde(default, alias = "vAlign")]
    pub vertical: Option<VerticalAlign>,
    #[serde(default)]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default)]
    pub wrap_text: Option<bool>,
}

impl StyledCell {
    /// Wrap a value with no presentation attributes
    pub fn new<V: Into<Scalar>>(value: V) -> Self {
        Self {
            value: value.into(),
            color: None,
            background_color: None,
            number_format: None,
            vertical: None,
            horizontal: None,
            wrap_text: None,
        }
    }

    /// Set the font color (`#rgb` or `#rrggbb`)
    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the fill color (`#rgb` or `#rrggbb`)
    pub fn background_color<S: Into<String>>(mut self, color: S) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the number format
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set the vertical alignment
    pub fn vertical(mut self, align: VerticalAlign) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Set the horizontal alignment
    pub fn horizontal(mut self, align: HorizontalAlign) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Enable or disable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }
}

/// Every shape a cell input can take
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellInput {
    Scalar(Scalar),
    Styled(StyledCell),
    /// Matches no known shape; writing it leaves the cell untouched
    Unrecognized(serde_json::Value),
}

impl Default for CellInput {
    fn default() -> Self {
        CellInput::Scalar(Scalar::Empty)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Empty => write!(f, "null"),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{:?}", s),
            Scalar::DateTime(dt) => write!(f, "{}", dt),
            Scalar::Timestamp(ts) => write!(f, "{{utcTimestamp: {}}}", ts.utc_timestamp),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(dt: NaiveDateTime) -> Self {
        Scalar::DateTime(dt)
    }
}

impl From<Timestamp> for Scalar {
    fn from(ts: Timestamp) -> Self {
        Scalar::Timestamp(ts)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Scalar::Empty)
    }
}

macro_rules! impl_cell_input_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellInput {
                fn from(value: $t) -> Self {
                    CellInput::Scalar(value.into())
                }
            }
        )*
    };
}

impl_cell_input_from!(Scalar, bool, f64, i32, i64, &str, String, NaiveDateTime, Timestamp);

impl<T: Into<Scalar>> From<Option<T>> for CellInput {
    fn from(value: Option<T>) -> Self {
        CellInput::Scalar(value.into())
    }
}

impl From<StyledCell> for CellInput {
    fn from(cell: StyledCell) -> Self {
        CellInput::Styled(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CellInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_scalars_from_json() {
        assert_eq!(parse(json!(null)), CellInput::Scalar(Scalar::Empty));
        assert_eq!(parse(json!(true)), CellInput::from(true));
        assert_eq!(parse(json!(42)), CellInput::from(42.0));
        assert_eq!(parse(json!("x")), CellInput::from("x"));
        assert_eq!(
            parse(json!({"utcTimestamp": 1_700_000_000_000_i64})),
            CellInput::from(Timestamp {
                utc_timestamp: 1_700_000_000_000
            })
        );
    }

    #[test]
    fn test_styled_from_json() {
        let input = parse(json!({
            "value": 42,
            "numberFormat": "#,##0",
            "backgroundColor": "#FF0000",
            "vAlign": "middle",
            "wrapText": false
        }));

        let expected = StyledCell::new(42.0)
            .number_format("#,##0")
            .background_color("#FF0000")
            .vertical(VerticalAlign::Middle)
            .wrap_text(false);
        assert_eq!(input, CellInput::Styled(expected));
    }

    #[test]
    fn test_unknown_shapes_are_unrecognized() {
        assert!(matches!(parse(json!([1, 2])), CellInput::Unrecognized(_)));
        assert!(matches!(
            parse(json!({"text": "no value key"})),
            CellInput::Unrecognized(_)
        ));
        // Styled cells nest one level only
        assert!(matches!(
            parse(json!({"value": {"value": 1}})),
            CellInput::Unrecognized(_)
        ));
        assert!(matches!(
            parse(json!({"value": 1, "vAlign": "sideways"})),
            CellInput::Unrecognized(_)
        ));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CellInput::from(None::<f64>), CellInput::Scalar(Scalar::Empty));
        assert_eq!(CellInput::from(Some("a")), CellInput::from("a"));
    }
}
