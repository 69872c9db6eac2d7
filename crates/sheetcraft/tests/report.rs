//! Reports built with `report` and read back through `Document`

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use sheetcraft::prelude::*;
use sheetcraft::{CellRange, Timestamp};

fn build_and_open(pages: &[Page]) -> Document {
    let stream = report(pages).unwrap();
    Document::from_reader(stream).unwrap()
}

#[test]
fn test_styled_number_reads_back_as_number() {
    let page = Page::new("Totals").row(vec![StyledCell::new(42.0)
        .number_format("#,##0")
        .background_color("#FF0000")
        .into()]);
    let document = build_and_open(&[page]);

    let sheet = document.sheet("Totals").unwrap();
    assert_eq!(sheet.value(1, 1).unwrap(), FieldValue::Number(42.0));
}

#[test]
fn test_headers_merge_and_data_follows() {
    let page = Page::new("Grid")
        .title("Grid report")
        .header_row(vec![
            ColumnDeclaration::new("Group").col_span(3.0).row_span(2.0),
            ColumnDeclaration::new("Other"),
        ])
        .header_row(vec![ColumnDeclaration::new("Below other")])
        .row(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
    let document = build_and_open(&[page]);
    let sheet = document.sheet(0usize).unwrap();

    assert_eq!(sheet.merged_regions(), &[CellRange::from_indices(2, 1, 3, 3)]);
    assert_eq!(
        sheet.value(1, 1).unwrap(),
        FieldValue::Text("Grid report".into())
    );
    assert_eq!(sheet.value(2, 4).unwrap(), FieldValue::Text("Other".into()));
    assert_eq!(
        sheet.value(3, 4).unwrap(),
        FieldValue::Text("Below other".into())
    );

    let record = sheet
        .values_by_schema(4, 1, ReadDirection::Row, &["w", "x", "y", "z"])
        .unwrap();
    let texts: Vec<_> = record.iter().map(|(_, v)| v.as_text().unwrap()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_whitespace_is_collapsed_on_read() {
    let page = Page::new("Names").row(vec!["  Ann \t\n  Lee  ".into(), "   ".into()]);
    let document = build_and_open(&[page]);
    let sheet = document.sheet("Names").unwrap();

    assert_eq!(sheet.value(1, 1).unwrap(), FieldValue::Text("Ann Lee".into()));
    assert_eq!(sheet.value(1, 2).unwrap(), FieldValue::Null);
    assert_eq!(sheet.value(9, 9).unwrap(), FieldValue::Null);
}

#[test]
fn test_column_schema_with_dates() {
    let born = NaiveDate::from_ymd_opt(1990, 5, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let page = Page::new("People")
        .row(vec!["name".into(), " Ada ".into()])
        .row(vec!["born".into(), born.into()])
        .row(vec!["score".into(), 9.5.into()])
        .row(vec!["active".into(), true.into()]);
    let document = build_and_open(&[page]);
    let sheet = document.sheet("People").unwrap();

    let record = sheet
        .values_by_schema(1, 2, ReadDirection::Column, &["name", "born", "score", "active"])
        .unwrap();

    assert_eq!(record.get("name"), Some(&FieldValue::Text("Ada".into())));
    assert_eq!(record.get("born"), Some(&FieldValue::Date(born)));
    assert_eq!(record.get("score"), Some(&FieldValue::Number(9.5)));
    assert_eq!(record.get("active"), Some(&FieldValue::Boolean(true)));

    #[derive(Debug, Deserialize, PartialEq)]
    struct Person {
        name: String,
        score: f64,
        active: bool,
    }
    assert_eq!(
        record.deserialize::<Person>().unwrap(),
        Person {
            name: "Ada".into(),
            score: 9.5,
            active: true,
        }
    );
}

#[test]
fn test_timestamp_cells_read_as_dates() {
    let page = Page::new("Log").row(vec![Timestamp {
        utc_timestamp: 86_400_000,
    }
    .into()]);
    let document = build_and_open(&[page]);

    let expected = NaiveDate::from_ymd_opt(1970, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(
        document.sheet("Log").unwrap().value(1, 1).unwrap(),
        FieldValue::Date(expected)
    );
}

#[test]
fn test_pages_from_json() {
    let pages: Vec<Page> = serde_json::from_str(
        r##"[
            {
                "name": "Stock",
                "title": "Inventory",
                "columns": [[{"label": "Item", "backgroundColor": "#eee"}, {"label": "Qty", "width": 12}]],
                "rows": [
                    ["bolt", {"value": 40, "numberFormat": "0", "vAlign": "middle"}],
                    ["nut", {"value": {"utcTimestamp": 0}}]
                ],
                "defaultNombreFormat": "0.0"
            },
            {"name": "Empty", "columns": [], "rows": []}
        ]"##,
    )
    .unwrap();
    let document = build_and_open(&pages);

    assert_eq!(document.sheet_names(), vec!["Stock", "Empty"]);
    let sheet = document.sheet("Stock").unwrap();
    let record = sheet
        .values_by_schema(3, 1, ReadDirection::Row, &["item", "qty"])
        .unwrap();
    assert_eq!(record.get("item"), Some(&FieldValue::Text("bolt".into())));
    assert_eq!(record.get("qty"), Some(&FieldValue::Number(40.0)));
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(sheet.value(4, 2).unwrap(), FieldValue::Date(epoch));
}

#[test]
fn test_invalid_header_color_fails_the_report() {
    let page = Page::new("Bad").header_row(vec![
        ColumnDeclaration::new("A"),
        ColumnDeclaration::new("B").color("red"),
    ]);
    let err = report(&[page]).unwrap_err();

    assert!(matches!(err, Error::InvalidColor { column: 2, .. }));
    assert_eq!(
        err.to_string(),
        "Invalid color 'red' in column 2: expected #rgb or #rrggbb"
    );
}
