//! Declarative page description

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::input::CellInput;

/// One header cell
///
/// Spans are counts of grid cells; fractional values round up and anything
/// below 1 means no span.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDeclaration {
    /// Header text; a present but falsy `label` shows as an empty string
    #[serde(default, deserialize_with = "deserialize_label")]
    pub label: Option<String>,
    /// Font color, `#rgb` or `#rrggbb`
    #[serde(default)]
    pub color: Option<String>,
    /// Fill color, `#rgb` or `#rrggbb`
    #[serde(default)]
    pub background_color: Option<String>,
    /// Width of the whole column, in characters
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub col_span: Option<f64>,
    #[serde(default)]
    pub row_span: Option<f64>,
}

/// Deserialize a present `label` key; absent keys stay `None` via `default`
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => other.to_string(),
    };
    Ok(Some(label))
}

impl ColumnDeclaration {
    /// A header cell showing `label`
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color<S: Into<String>>(mut self, color: S) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn col_span(mut self, span: f64) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn row_span(mut self, span: f64) -> Self {
        self.row_span = Some(span);
        self
    }
}

/// One sheet of a report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Sheet name
    pub name: String,
    /// Written in A1 when present and non-empty
    #[serde(default)]
    pub title: Option<String>,
    /// Header rows, top to bottom
    #[serde(default)]
    pub columns: Vec<Vec<ColumnDeclaration>>,
    /// Data rows, written below the headers
    #[serde(default)]
    pub rows: Vec<Vec<CellInput>>,
    /// Number format for numeric cells that do not carry their own
    #[serde(default, alias = "defaultNombreFormat")]
    pub default_number_format: Option<String>,
}

impl Page {
    /// An empty page
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a header row
    pub fn header_row(mut self, row: Vec<ColumnDeclaration>) -> Self {
        self.columns.push(row);
        self
    }

    /// Append a data row
    pub fn row(mut self, row: Vec<CellInput>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn default_number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.default_number_format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_from_json() {
        let page: Page = serde_json::from_str(
            r##"{
                "name": "Sales",
                "title": "Q1",
                "columns": [[{"label": "Region", "rowSpan": 2, "backgroundColor": "#ccc"}]],
                "rows": [["North", 12.5, null]],
                "defaultNombreFormat": "0.00"
            }"##,
        )
        .unwrap();

        let expected = Page::new("Sales")
            .title("Q1")
            .header_row(vec![ColumnDeclaration::new("Region")
                .row_span(2.0)
                .background_color("#ccc")])
            .row(vec!["North".into(), 12.5.into(), None::<f64>.into()])
            .default_number_format("0.00");
        assert_eq!(page, expected);
    }

    #[test]
    fn test_label_presence() {
        let columns: Vec<ColumnDeclaration> = serde_json::from_str(
            r#"[{"label": null}, {"label": ""}, {"label": false}, {"label": 2024}, {"width": 8}]"#,
        )
        .unwrap();
        let labels: Vec<Option<&str>> = columns.iter().map(|c| c.label.as_deref()).collect();

        assert_eq!(
            labels,
            vec![Some(""), Some(""), Some(""), Some("2024"), None]
        );
    }
}
