//! Header layout
//!
//! Header rows are laid out left to right with a column cursor. A header
//! cell that spans downward reserves its columns in the rows it covers, so
//! those rows start their cells past it.

use sheetcraft_core::{
    Alignment, BorderLineStyle, BorderStyle, CellRange, CellValue, Color, FillStyle, FontStyle,
    RichTextRun, Style, Worksheet, MAX_COLS,
};

use crate::color::to_argb;
use crate::error::{ColorField, Error, Result};
use crate::ledger::SkipLedger;
use crate::options::ReportOptions;
use crate::page::ColumnDeclaration;

/// Grid area given to one header declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedHeader {
    pub row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl PlacedHeader {
    /// Whether the declaration was merged over more than one cell
    pub fn is_merged(&self) -> bool {
        self.last_row > self.row || self.last_col > self.first_col
    }
}

/// Result of laying out a page's header rows
#[derive(Debug, Clone, Default)]
pub struct HeaderLayout {
    /// Placements per header row, in declaration order
    pub placements: Vec<Vec<PlacedHeader>>,
    /// Reservations left by downward spans
    pub ledger: SkipLedger,
}

/// Extra cells covered beyond the first: `max(ceil(span), 1) - 1`
///
/// Missing, negative and NaN spans cover nothing. Oversized spans saturate,
/// so their merge falls outside the grid and fails.
pub fn effective_span(declared: Option<f64>) -> u32 {
    let span = declared.unwrap_or(0.0).ceil();
    if span >= 1.0 {
        (span as u32).saturating_sub(1)
    } else {
        0
    }
}

/// Lay out header rows starting at `first_row`
pub fn lay_out_headers(
    sheet: &mut Worksheet,
    first_row: u32,
    rows: &[Vec<ColumnDeclaration>],
    options: &ReportOptions,
) -> Result<HeaderLayout> {
    let mut layout = HeaderLayout::default();

    for (offset, declarations) in rows.iter().enumerate() {
        let row = first_row.saturating_add(u32::try_from(offset).unwrap_or(u32::MAX));
        sheet.set_row_style(row, &header_row_style(options))?;

        let mut cursor = 1;
        let mut placed = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let header = paint_header(sheet, &mut layout.ledger, row, cursor, declaration, options)?;
            cursor = header.last_col.saturating_add(1);
            placed.push(header);
        }
        layout.placements.push(placed);
    }

    Ok(layout)
}

/// Place one declaration in `row` at the first free column from `cursor`
pub fn paint_header(
    sheet: &mut Worksheet,
    ledger: &mut SkipLedger,
    row: u32,
    cursor: u16,
    declaration: &ColumnDeclaration,
    options: &ReportOptions,
) -> Result<PlacedHeader> {
    let col = ledger.next_free(row, cursor);

    let background = declaration
        .background_color
        .as_deref()
        .map(|value| to_argb(ColorField::Background, col, value))
        .transpose()?;
    let foreground = declaration
        .color
        .as_deref()
        .map(|value| to_argb(ColorField::Foreground, col, value))
        .transpose()?;

    sheet.update_cell_style_at(row, col, |style| {
        style.border = BorderStyle::outline(BorderLineStyle::Thin, Color::Auto);
        if let Some(color) = background {
            style.fill = FillStyle::solid(color);
        }
    })?;

    match (foreground, &declaration.label) {
        (Some(color), label) => {
            let font = FontStyle::sized(options.font_name.as_str(), options.header_font_size)
                .with_bold(true)
                .with_color(color);
            let text = label.clone().unwrap_or_default();
            sheet.set_cell_value_at(
                row,
                col,
                CellValue::RichText(vec![RichTextRun::styled(text, font)]),
            )?;
        }
        (None, Some(label)) => sheet.set_cell_value_at(row, col, label.as_str())?,
        (None, None) => {}
    }

    if let Some(width) = declaration.width.filter(|w| *w > 0.0) {
        sheet.set_column_width(col, width)?;
    }

    let col_span = u16::try_from(effective_span(declaration.col_span)).unwrap_or(MAX_COLS);
    let row_span = effective_span(declaration.row_span);
    let last_row = row.saturating_add(row_span);
    let last_col = col.saturating_add(col_span);

    if col_span > 0 || row_span > 0 {
        sheet
            .merge_cells(&CellRange::from_indices(row, col, last_row, last_col))
            .map_err(|source| Error::MergeConflict {
                first_row: row,
                first_col: col,
                last_row,
                last_col,
                source,
            })?;
    }
    for below in row + 1..=last_row {
        ledger.reserve(below, col..=last_col);
    }

    log::trace!(
        "header {:?} placed at ({}, {})-({}, {})",
        declaration.label,
        row,
        col,
        last_row,
        last_col
    );

    Ok(PlacedHeader {
        row,
        first_col: col,
        last_row,
        last_col,
    })
}

fn header_row_style(options: &ReportOptions) -> Style {
    Style::new()
        .font(
            FontStyle::sized(options.font_name.as_str(), options.header_font_size)
                .with_bold(true),
        )
        .alignment(Alignment::top_wrapped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use sheetcraft_core::VerticalAlignment;

    fn lay_out(first_row: u32, rows: &[Vec<ColumnDeclaration>]) -> (Worksheet, Result<HeaderLayout>) {
        let mut sheet = Worksheet::new("Headers");
        let layout = lay_out_headers(&mut sheet, first_row, rows, &ReportOptions::default());
        (sheet, layout)
    }

    #[test]
    fn test_effective_span() {
        assert_eq!(effective_span(None), 0);
        assert_eq!(effective_span(Some(0.0)), 0);
        assert_eq!(effective_span(Some(1.0)), 0);
        assert_eq!(effective_span(Some(1.2)), 1);
        assert_eq!(effective_span(Some(3.0)), 2);
        assert_eq!(effective_span(Some(-4.0)), 0);
        assert_eq!(effective_span(Some(f64::NAN)), 0);
        assert_eq!(effective_span(Some(1e12)), u32::MAX - 1);
    }

    #[test]
    fn test_row_span_reserves_columns_below() {
        let rows = vec![
            vec![ColumnDeclaration::new("Group").col_span(3.0).row_span(2.0)],
            vec![ColumnDeclaration::new("Next")],
        ];
        let (sheet, layout) = lay_out(2, &rows);
        let layout = layout.unwrap();

        assert_eq!(sheet.merged_regions(), &[CellRange::from_indices(2, 1, 3, 3)]);
        assert_eq!(layout.ledger.consult(3), vec![1, 2, 3]);
        assert_eq!(
            layout.placements[1][0],
            PlacedHeader {
                row: 3,
                first_col: 4,
                last_row: 3,
                last_col: 4
            }
        );
        assert_eq!(sheet.get_value_at(3, 4).as_string(), Some("Next"));
    }

    #[test]
    fn test_nested_headers() {
        // | Name (2 rows) | Address (3 cols)      |
        // |               | Street | City | Zip   |
        let rows = vec![
            vec![
                ColumnDeclaration::new("Name").row_span(2.0),
                ColumnDeclaration::new("Address").col_span(3.0),
            ],
            vec![
                ColumnDeclaration::new("Street"),
                ColumnDeclaration::new("City"),
                ColumnDeclaration::new("Zip"),
            ],
        ];
        let (sheet, layout) = lay_out(1, &rows);
        let layout = layout.unwrap();

        assert_eq!(
            sheet.merged_regions(),
            &[
                CellRange::from_indices(1, 1, 2, 1),
                CellRange::from_indices(1, 2, 1, 4)
            ]
        );
        let second: Vec<u16> = layout.placements[1].iter().map(|p| p.first_col).collect();
        assert_eq!(second, vec![2, 3, 4]);
        assert_eq!(sheet.get_value_at(2, 4).as_string(), Some("Zip"));
    }

    #[test]
    fn test_header_formatting() {
        let rows = vec![vec![
            ColumnDeclaration::new("Plain").background_color("#0f0").width(20.0),
            ColumnDeclaration::new("Red").color("F00"),
            ColumnDeclaration::default(),
        ]];
        let (sheet, layout) = lay_out(1, &rows);
        layout.unwrap();

        let plain = sheet.style_at(1, 1);
        assert_eq!(plain.fill, FillStyle::solid(Color::argb(0, 0, 0xFF, 0)));
        assert_eq!(plain.border, BorderStyle::outline(BorderLineStyle::Thin, Color::Auto));
        assert!(plain.font.bold);
        assert_eq!(plain.font.size, 8.0);
        assert_eq!(plain.alignment.vertical, VerticalAlignment::Top);
        assert!(plain.alignment.wrap_text);
        assert_eq!(sheet.column_width(1), Some(20.0));

        let CellValue::RichText(runs) = sheet.get_value_at(1, 2) else {
            panic!("expected rich text");
        };
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Red");
        let font = runs[0].font.as_ref().unwrap();
        assert_eq!(font.color, Color::argb(0, 0xFF, 0, 0));
        assert!(font.bold);

        // No label: bordered but empty
        assert_eq!(sheet.get_value_at(1, 3), CellValue::Empty);
        assert!(!sheet.style_at(1, 3).border.is_empty());
    }

    #[test]
    fn test_invalid_color_names_resolved_column() {
        let mut sheet = Worksheet::new("Headers");
        let mut ledger = SkipLedger::new();
        ledger.reserve(1, [1, 2]);

        let err = paint_header(
            &mut sheet,
            &mut ledger,
            1,
            1,
            &ColumnDeclaration::new("Bad").color("#12"),
            &ReportOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidColor {
                field: ColorField::Foreground,
                column: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_overlapping_span_is_merge_conflict() {
        // The second row's span runs into the first row's downward span
        let rows = vec![
            vec![
                ColumnDeclaration::new("A"),
                ColumnDeclaration::new("B").row_span(2.0),
            ],
            vec![ColumnDeclaration::new("C").col_span(2.0)],
        ];
        let (_, layout) = lay_out(1, &rows);

        match layout.unwrap_err() {
            Error::MergeConflict {
                first_row,
                first_col,
                last_row,
                last_col,
                ..
            } => assert_eq!((first_row, first_col, last_row, last_col), (2, 1, 2, 2)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_falsy_label_writes_empty_text() {
        let rows: Vec<Vec<ColumnDeclaration>> =
            serde_json::from_str(r#"[[{"label": null}, {"label": ""}, {"width": 5}]]"#).unwrap();
        let (sheet, layout) = lay_out(1, &rows);
        layout.unwrap();

        assert_eq!(sheet.get_value_at(1, 1).as_string(), Some(""));
        assert_eq!(sheet.get_value_at(1, 2).as_string(), Some(""));
        assert_eq!(sheet.get_value_at(1, 3), CellValue::Empty);
        assert!(!sheet.style_at(1, 3).border.is_empty());
    }

    #[test]
    fn test_span_past_last_row_is_merge_conflict() {
        let rows = vec![vec![ColumnDeclaration::new("Tall").row_span(1e12)]];
        let (sheet, layout) = lay_out(1, &rows);

        match layout.unwrap_err() {
            Error::MergeConflict {
                first_row,
                last_row,
                source,
                ..
            } => {
                assert_eq!((first_row, last_row), (1, u32::MAX));
                assert!(matches!(source, sheetcraft_core::Error::RowOutOfBounds(..)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(sheet.merged_regions().is_empty());

        let rows = vec![vec![ColumnDeclaration::new("Wide").col_span(1e12)]];
        let (_, layout) = lay_out(1, &rows);
        assert!(matches!(layout, Err(Error::MergeConflict { .. })));
    }

    fn declaration() -> impl Strategy<Value = ColumnDeclaration> {
        (
            proptest::option::of(-1.0f64..4.0),
            proptest::option::of(-1.0f64..3.0),
        )
            .prop_map(|(col_span, row_span)| ColumnDeclaration {
                label: Some("x".to_string()),
                col_span,
                row_span,
                ..ColumnDeclaration::default()
            })
    }

    proptest! {
        #[test]
        fn placements_within_a_row_never_overlap(
            rows in proptest::collection::vec(proptest::collection::vec(declaration(), 0..6), 1..4)
        ) {
            let (_, layout) = lay_out(1, &rows);
            match layout {
                Ok(layout) => {
                    for placed in &layout.placements {
                        for pair in placed.windows(2) {
                            prop_assert!(pair[1].first_col > pair[0].last_col);
                        }
                        for header in placed {
                            prop_assert!(header.last_col >= header.first_col);
                        }
                    }
                }
                Err(err) => {
                    let is_merge_conflict = matches!(err, Error::MergeConflict { .. });
                    prop_assert!(is_merge_conflict);
                }
            }
        }

        #[test]
        fn single_row_never_conflicts(row in proptest::collection::vec(declaration(), 0..8)) {
            let (_, layout) = lay_out(1, &[row]);
            prop_assert!(layout.is_ok());
        }
    }
}
