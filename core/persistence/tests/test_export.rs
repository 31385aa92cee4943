//! FILENAME: tests/test_export.rs
//! Integration tests: filter a grid, then export what is visible.

use calamine::{Data, Reader, Xlsx};
use grid_engine::{ColumnChooser, ColumnDescriptor, ColumnFilterEngine, LocaleContext, Row};
use grid_export::{
    export_file_name, export_xlsx, export_xlsx_to_buffer, render_table_html, ExportFormat,
    ExportTable,
};

fn roster() -> Vec<Row> {
    serde_json::from_str(
        r#"[
            {"nameEn": "Sara", "grade": "5", "fees": 1200},
            {"nameEn": "Ali", "grade": "6", "fees": 1500},
            {"nameEn": "Mona", "grade": "5", "fees": null}
        ]"#,
    )
    .unwrap()
}

fn chooser() -> ColumnChooser {
    ColumnChooser::new(vec![
        ColumnDescriptor::new("nameEn", "Name"),
        ColumnDescriptor::new("grade", "Grade"),
        ColumnDescriptor::new("fees", "Fees"),
        ColumnDescriptor::new("actions", ""),
    ])
}

#[test]
fn test_export_reflects_filters_and_hidden_columns() {
    let mut engine = ColumnFilterEngine::new(roster());
    engine.toggle_value("grade", "5");

    let chooser = chooser().toggle_visibility("fees", false);
    let table = ExportTable::from_columns(chooser.columns(), engine.filtered_rows(), &LocaleContext::default());

    assert_eq!(table.headers, vec!["Name", "Grade"]);
    assert_eq!(table.row_count(), 2);

    let html = render_table_html(&table, "report");
    assert!(html.contains("<td>Mona</td>"));
    assert!(!html.contains("Ali"));
}

#[test]
fn test_export_with_summary_to_file() {
    let engine = ColumnFilterEngine::new(roster());
    let locale = LocaleContext::default();
    let main = ExportTable::from_columns(chooser().columns(), engine.rows(), &locale);

    let mut summary = ExportTable::new(vec!["Grade".to_string(), "Students".to_string()]).with_title("Totals");
    summary.push_row(vec!["5".into(), 2.into()]);
    summary.push_row(vec!["6".into(), 1.into()]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export_file_name(Some("Roster"), ExportFormat::Xlsx));
    export_xlsx(&main, Some(&summary), &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
    assert!(path.ends_with("Roster.xlsx"));
}

#[test]
fn test_summary_sits_below_main_grid() {
    let engine = ColumnFilterEngine::new(roster());
    let main = ExportTable::from_columns(chooser().columns(), engine.rows(), &LocaleContext::default());
    assert_eq!((main.row_count(), main.column_count()), (3, 3));

    let mut summary = ExportTable::new(vec!["Grade".to_string(), "Students".to_string()]).with_title("Totals");
    summary.push_row(vec!["5".into(), 2.into()]);

    let bytes = export_xlsx_to_buffer(&main, Some(&summary)).unwrap();
    let mut workbook: Xlsx<_> = Xlsx::new(std::io::Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range("Main sheet").unwrap();
    let cell = |row: u32, col: u32| range.get_value((row, col)).cloned().unwrap_or(Data::Empty);

    assert_eq!(cell(0, 0), Data::String("Name".to_string()));
    assert_eq!(cell(3, 0), Data::String("Mona".to_string()));

    // Header + 3 rows + 2 blank rows puts the title on the seventh row.
    let title_row = 6;
    assert_eq!(cell(title_row - 1, 0), Data::Empty);
    assert_eq!(cell(title_row, 0), Data::String("Totals".to_string()));

    assert_eq!(cell(title_row + 1, 0), Data::Empty);
    assert_eq!(cell(title_row + 1, 1), Data::String("Grade".to_string()));
    assert_eq!(cell(title_row + 1, 2), Data::String("Students".to_string()));
    assert_eq!(cell(title_row + 2, 1), Data::String("5".to_string()));
    assert_eq!(cell(title_row + 2, 2), Data::Float(2.0));
}

#[test]
fn test_buffer_export_without_rows() {
    let table = ExportTable::from_columns(chooser().columns(), &[], &LocaleContext::default());
    let bytes = export_xlsx_to_buffer(&table, None).unwrap();
    assert!(!bytes.is_empty());
}
