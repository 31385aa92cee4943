//! FILENAME: core/engine/src/columns.rs
//! PURPOSE: Decides which columns of a dataset are eligible for filtering.
//! CONTEXT: Eligibility comes from the keys of the first row, minus a fixed
//! list of identifier/audit/derived columns and any caller exclusions,
//! optionally narrowed to a caller allow-list.

use crate::value::Row;
use serde::{Deserialize, Serialize};

// ============================================================================
// EXCLUSIONS
// ============================================================================

/// Columns never offered as filters: identifiers, audit timestamps,
/// computed financial fields and UI-only columns.
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &[
    "id",
    "contactId",
    "createdAt",
    "updatedAt",
    "deletedAt",
    "branchId",
    "academicYearId",
    "educationTypeId",
    "guardianId",
    "isActive",
    "remainingAmount",
    "remainingPercentage",
    "paidPercentage",
    "isWaiting",
    "rowId",
    "index",
    "studentId",
    "nameEn",
    "combinedEducationInfo",
    "actions",
    "Actions",
];

/// Check a column against the built-in exclusions merged with `extra`.
pub fn is_excluded(column: &str, extra: &[String]) -> bool {
    DEFAULT_EXCLUDED_COLUMNS.contains(&column) || extra.iter().any(|c| c == column)
}

/// Ordered list of filterable columns taken from `sample_row`.
///
/// An empty `allow_list` means "no restriction". A missing sample row
/// (empty dataset) yields an empty list.
pub fn compute_eligible_columns(
    sample_row: Option<&Row>,
    allow_list: &[String],
    exclude_list: &[String],
) -> Vec<String> {
    let Some(row) = sample_row else {
        return Vec::new();
    };

    row.columns()
        .filter(|column| !is_excluded(column, exclude_list))
        .filter(|column| allow_list.is_empty() || allow_list.iter().any(|c| c == column))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// COLUMN DESCRIPTORS
// ============================================================================

/// Side a pinned column sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FixedPosition {
    Left,
    Right,
}

/// A column as rendered by the host grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Row key the column displays. Command columns have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_field: Option<String>,
    #[serde(default)]
    pub caption: String,
    /// `None` means the host never set it, which renders as visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_position: Option<FixedPosition>,
}

impl ColumnDescriptor {
    pub fn new(data_field: impl Into<String>, caption: impl Into<String>) -> Self {
        ColumnDescriptor {
            data_field: Some(data_field.into()),
            caption: caption.into(),
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    pub fn field(&self) -> Option<&str> {
        self.data_field.as_deref()
    }
}

/// Host columns that carry a data field and are not excluded.
pub fn columns_from_grid<'a>(
    descriptors: &'a [ColumnDescriptor],
    exclude_list: &[String],
) -> Vec<&'a ColumnDescriptor> {
    descriptors
        .iter()
        .filter(|d| d.field().is_some_and(|f| !f.is_empty() && !is_excluded(f, exclude_list)))
        .collect()
}
