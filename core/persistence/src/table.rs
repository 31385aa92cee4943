//! FILENAME: core/persistence/src/table.rs
//! PURPOSE: The rectangular snapshot of a grid that exporters write out.
//! CONTEXT: Built from the host's column descriptors and the rows currently
//! shown, so hidden columns and the command column never reach a file.

use grid_engine::{CellValue, ColumnDescriptor, LocaleContext, Row};

/// Field name of the per-row command column.
pub const ACTIONS_COLUMN: &str = "actions";

/// Headers plus one value per header for each row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportTable {
    /// Caption written above the table when it is exported as a summary.
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Lay the sheet out right to left, as for Arabic.
    pub right_to_left: bool,
}

impl ExportTable {
    pub fn new(headers: Vec<String>) -> Self {
        ExportTable {
            title: None,
            headers,
            rows: Vec::new(),
            right_to_left: false,
        }
    }

    /// Snapshot the visible, data-bound columns of `rows`.
    pub fn from_columns(columns: &[ColumnDescriptor], rows: &[Row], locale: &LocaleContext) -> Self {
        let exported: Vec<(&str, String)> = columns
            .iter()
            .filter(|c| c.is_visible())
            .filter_map(|c| {
                let field = c.field()?;
                if field.eq_ignore_ascii_case(ACTIONS_COLUMN) {
                    return None;
                }
                let header = if c.caption.is_empty() {
                    locale.translate(field)
                } else {
                    c.caption.clone()
                };
                Some((field, header))
            })
            .collect();

        let rows = rows
            .iter()
            .map(|row| exported.iter().map(|(field, _)| row.get(field).clone()).collect())
            .collect();

        ExportTable {
            title: None,
            headers: exported.into_iter().map(|(_, header)| header).collect(),
            rows,
            right_to_left: locale.language().is_rtl(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut values: Vec<CellValue>) {
        values.resize(self.headers.len(), CellValue::Null);
        self.rows.push(values);
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
