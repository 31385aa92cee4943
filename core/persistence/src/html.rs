//! FILENAME: core/persistence/src/html.rs
//! PURPOSE: Renders an export table as a standalone HTML `<table>` string.
//! CONTEXT: Used for print views and for pasting into rich-text targets.

use crate::ExportTable;
use grid_engine::CellValue;

/// Render `table` with no row highlighting.
pub fn render_table_html(table: &ExportTable, class: &str) -> String {
    render_table_html_with(table, class, |_| false, "")
}

/// Render `table`; every `<td>` of a row for which `condition` holds gets
/// `condition_attr` (e.g. `class="done"`) added verbatim.
pub fn render_table_html_with<F>(
    table: &ExportTable,
    class: &str,
    condition: F,
    condition_attr: &str,
) -> String
where
    F: Fn(&[CellValue]) -> bool,
{
    let mut html = String::new();
    html.push_str(&format!("<table class=\"table {}\">", escape_html(class.trim())));

    html.push_str("<thead><tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for row in &table.rows {
        let open_td = if condition(row) && !condition_attr.is_empty() {
            format!("<td {}>", condition_attr)
        } else {
            "<td>".to_string()
        };
        html.push_str("<tr>");
        for value in row {
            html.push_str(&open_td);
            html.push_str(&escape_html(&value.to_string()));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
