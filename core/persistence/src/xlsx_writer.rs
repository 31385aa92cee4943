//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{ExportError, ExportTable};
use grid_engine::CellValue;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;

pub const MAIN_SHEET_NAME: &str = "Main sheet";
pub const DEFAULT_SUMMARY_TITLE: &str = "Summary";

/// Light blue fill behind the summary title.
const SUMMARY_TITLE_FILL: u32 = 0xDDEBF7;
/// Blank rows between the last main row and the summary title.
const SUMMARY_GAP_ROWS: u32 = 2;
/// Excel's sheet limits.
const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

pub fn export_xlsx(
    main: &ExportTable,
    summary: Option<&ExportTable>,
    path: &Path,
) -> Result<(), ExportError> {
    let mut xlsx = build_workbook(main, summary)?;
    xlsx.save(path)?;
    log::debug!("exported {} rows to {}", main.row_count(), path.display());
    Ok(())
}

pub fn export_xlsx_to_buffer(
    main: &ExportTable,
    summary: Option<&ExportTable>,
) -> Result<Vec<u8>, ExportError> {
    let mut xlsx = build_workbook(main, summary)?;
    Ok(xlsx.save_to_buffer()?)
}

fn build_workbook(main: &ExportTable, summary: Option<&ExportTable>) -> Result<XlsxWorkbook, ExportError> {
    check_size(main, 0, 0)?;

    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(MAIN_SHEET_NAME)?;
    if main.right_to_left {
        worksheet.set_right_to_left(true);
    }

    write_table(worksheet, main, 0, 0)?;
    // Autofilter over header plus data rows
    let last_col = (main.column_count() - 1) as u16;
    worksheet.autofilter(0, 0, main.row_count() as u32, last_col)?;

    if let Some(summary) = summary.filter(|s| s.column_count() > 0) {
        // Header row, data rows, then the gap
        let title_row = main.row_count() as u32 + 1 + SUMMARY_GAP_ROWS;
        check_size(summary, title_row as usize + 1, 1)?;

        let title = summary.title.as_deref().unwrap_or(DEFAULT_SUMMARY_TITLE);
        let title_format = Format::new()
            .set_bold()
            .set_font_size(12.0)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color(Color::RGB(SUMMARY_TITLE_FILL));

        if last_col > 0 {
            worksheet.merge_range(title_row, 0, title_row, last_col, title, &title_format)?;
        } else {
            worksheet.write_string_with_format(title_row, 0, title, &title_format)?;
        }

        write_table(worksheet, summary, title_row + 1, 1)?;
    }

    worksheet.autofit();
    Ok(xlsx)
}

fn check_size(table: &ExportTable, first_row: usize, first_col: usize) -> Result<(), ExportError> {
    if table.column_count() == 0 {
        return Err(ExportError::EmptyTable);
    }
    if first_col + table.column_count() > MAX_COLS {
        return Err(ExportError::TooLarge(format!("{} columns", table.column_count())));
    }
    if first_row + table.row_count() + 1 > MAX_ROWS {
        return Err(ExportError::TooLarge(format!("{} rows", table.row_count())));
    }
    Ok(())
}

fn write_table(
    worksheet: &mut Worksheet,
    table: &ExportTable,
    first_row: u32,
    first_col: u16,
) -> Result<(), ExportError> {
    let header_format = Format::new().set_bold();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(first_row, first_col + col as u16, header, &header_format)?;
    }

    for (i, values) in table.rows.iter().enumerate() {
        let row = first_row + 1 + i as u32;
        for (col, value) in values.iter().enumerate() {
            let col = first_col + col as u16;
            match value {
                CellValue::Null => {}
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(row, col, s)?;
                }
            }
        }
    }
    Ok(())
}
