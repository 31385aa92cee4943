//! FILENAME: core/persistence/src/lib.rs
//! Grid Export Module
//!
//! Writes the visible part of a grid out as XLSX workbooks or HTML tables.

mod error;
mod html;
mod table;
mod xlsx_writer;

pub use error::ExportError;
pub use html::{render_table_html, render_table_html_with};
pub use table::{ExportTable, ACTIONS_COLUMN};
pub use xlsx_writer::{export_xlsx, export_xlsx_to_buffer, DEFAULT_SUMMARY_TITLE, MAIN_SHEET_NAME};

/// File title used when the host does not supply one.
pub const DEFAULT_FILE_TITLE: &str = "export";

// ============================================================================
// EXPORT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Html => "html",
        }
    }
}

/// Download name for an export, e.g. `Students.xlsx`.
pub fn export_file_name(title: Option<&str>, format: ExportFormat) -> String {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_FILE_TITLE);
    format!("{}.{}", title, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(Some("Students"), ExportFormat::Xlsx), "Students.xlsx");
        assert_eq!(export_file_name(Some("  "), ExportFormat::Html), "export.html");
        assert_eq!(export_file_name(None, ExportFormat::Xlsx), "export.xlsx");
    }
}
