//! Loading and saving documents

use pretty_assertions::assert_eq;
use sheetcraft::prelude::*;

fn sample() -> Document {
    let pages = [
        Page::new("First").row(vec!["one".into(), 1.0.into()]),
        Page::new("Second").row(vec!["two".into()]),
    ];
    Document::from(build_workbook(&pages).unwrap())
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.xlsx");

    let written = sample().save(&path).unwrap();
    assert_eq!(written, path);

    let document = Document::open(&path).unwrap();
    assert_eq!(document.sheet_names(), vec!["First", "Second"]);
    assert_eq!(
        document.sheet(1usize).unwrap().value(1, 1).unwrap(),
        FieldValue::Text("two".into())
    );
}

#[test]
fn test_base64_round_trip() {
    let encoded = sample().to_base64().unwrap();
    let document = Document::from_base64(&format!("{}\n", encoded)).unwrap();

    let sheet = document.sheet("First").unwrap();
    assert_eq!(sheet.value(1, 2).unwrap(), FieldValue::Number(1.0));
}

#[test]
fn test_edit_loaded_document() {
    let mut document = Document::from_bytes(&sample().to_bytes().unwrap()).unwrap();
    document
        .sheet_mut("Second")
        .unwrap()
        .set_row_values(2, 1, &["added".into(), StyledCell::new(5.0).into()])
        .unwrap();
    document.add_sheet("Third").unwrap();

    let reread = Document::from_reader(document.to_reader().unwrap()).unwrap();
    assert_eq!(reread.sheet_names(), vec!["First", "Second", "Third"]);
    let record = reread
        .sheet("Second")
        .unwrap()
        .values_by_schema(2, 1, ReadDirection::Row, &["label", "amount"])
        .unwrap();
    assert_eq!(record.get("label"), Some(&FieldValue::Text("added".into())));
    assert_eq!(record.get("amount"), Some(&FieldValue::Number(5.0)));
}

#[test]
fn test_missing_sheet() {
    let document = sample();

    assert!(matches!(
        document.sheet("Nope"),
        Err(Error::SheetNotFound(name)) if name == "'Nope'"
    ));
    assert!(matches!(document.sheet(5usize), Err(Error::SheetNotFound(_))));
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Document::open(dir.path().join("absent.xlsx")).is_err());
}
