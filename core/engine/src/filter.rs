//! FILENAME: core/engine/src/filter.rs
//! PURPOSE: Filter state and the pure functions that evaluate it.
//! CONTEXT: Every transition here returns a new value and leaves the
//! receiver untouched, so the engine can compare old and new state to
//! decide whether a notification is due.

use crate::value::{CellValue, Row};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

// ============================================================================
// COLUMN FILTER
// ============================================================================

/// Constraint on a single column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilter {
    /// Accepted values. Empty means no value constraint.
    #[serde(default)]
    pub values: IndexSet<CellValue>,
    /// Case-insensitive substring; only consulted while `values` is empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_text: String,
}

impl ColumnFilter {
    /// True when this filter lets every row through.
    pub fn is_unconstrained(&self) -> bool {
        self.values.is_empty() && self.search_text.trim().is_empty()
    }

    pub fn matches(&self, value: &CellValue) -> bool {
        if !self.values.is_empty() {
            return self.values.contains(value);
        }

        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if value.is_null() {
            return false;
        }
        value.to_string().to_lowercase().contains(&needle)
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// Column name to constraint. An entry with no values and no search text
/// behaves exactly like a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    columns: IndexMap<String, ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnFilter> {
        self.columns.get(column)
    }

    /// Accepted values for `column`, empty when unconstrained.
    pub fn accepted_values(&self, column: &str) -> Vec<&CellValue> {
        self.columns
            .get(column)
            .map(|f| f.values.iter().collect())
            .unwrap_or_default()
    }

    pub fn is_accepted(&self, column: &str, value: &CellValue) -> bool {
        self.columns
            .get(column)
            .is_some_and(|f| f.values.contains(value))
    }

    /// Columns whose filter actually removes rows.
    pub fn constrained_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, f)| !f.is_unconstrained())
            .map(|(c, _)| c.as_str())
    }

    pub fn is_constrained(&self) -> bool {
        self.constrained_columns().next().is_some()
    }

    /// Whether `row` passes every non-trivial column constraint.
    pub fn matches(&self, row: &Row) -> bool {
        self.columns
            .iter()
            .filter(|(_, f)| !f.is_unconstrained())
            .all(|(column, f)| f.matches(row.get(column)))
    }

    /// Adds `value` if absent, removes it if present. `Null` is never a
    /// selectable value, so toggling it changes nothing.
    pub fn with_toggled_value(&self, column: &str, value: &CellValue) -> FilterState {
        if value.is_null() {
            return self.clone();
        }
        let mut next = self.clone();
        let filter = next.columns.entry(column.to_string()).or_default();
        if !filter.values.shift_remove(value) {
            filter.values.insert(value.clone());
        }
        next
    }

    /// Replaces the accepted set of `column` wholesale.
    pub fn with_values<I>(&self, column: &str, values: I) -> FilterState
    where
        I: IntoIterator<Item = CellValue>,
    {
        let mut next = self.clone();
        let filter = next.columns.entry(column.to_string()).or_default();
        filter.values = values.into_iter().filter(|v| !v.is_null()).collect();
        next
    }

    pub fn with_search_text(&self, column: &str, text: &str) -> FilterState {
        let mut next = self.clone();
        next.columns.entry(column.to_string()).or_default().search_text = text.to_string();
        next
    }

    pub fn without_column(&self, column: &str) -> FilterState {
        let mut next = self.clone();
        next.columns.shift_remove(column);
        next
    }
}

// ============================================================================
// PURE EVALUATION
// ============================================================================

/// Unique non-null values of `column`, in first-seen order.
pub fn distinct_values(rows: &[Row], column: &str) -> Vec<CellValue> {
    let mut seen: IndexSet<&CellValue> = IndexSet::new();
    for row in rows {
        let value = row.get(column);
        if !value.is_null() {
            seen.insert(value);
        }
    }
    seen.into_iter().cloned().collect()
}

/// Rows passing `state`, in input order.
pub fn apply_filters(rows: &[Row], state: &FilterState) -> Vec<Row> {
    if !state.is_constrained() {
        return rows.to_vec();
    }
    rows.iter().filter(|row| state.matches(row)).cloned().collect()
}

// ============================================================================
// CHANGES
// ============================================================================

/// A user action against the filter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterChange {
    ActivateColumn { column: String, active: bool },
    ToggleValue { column: String, value: CellValue },
    SelectValues { column: String, values: Vec<CellValue> },
    SearchText { column: String, text: String },
    Reset,
}

/// Active columns together with their filter state.
///
/// Invariant: every column in `filters` is also in `active`, so a hidden
/// column can never constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub active: IndexSet<String>,
    pub filters: FilterState,
}

impl Selection {
    pub fn apply(&self, change: &FilterChange) -> Selection {
        match change {
            FilterChange::ActivateColumn { column, active: true } => {
                let mut active = self.active.clone();
                active.insert(column.clone());
                Selection {
                    active,
                    filters: self.filters.clone(),
                }
            }
            FilterChange::ActivateColumn { column, active: false } => {
                let mut active = self.active.clone();
                active.shift_remove(column);
                Selection {
                    active,
                    filters: self.filters.without_column(column),
                }
            }
            FilterChange::ToggleValue { column, value } => {
                self.with_column_active(column, self.filters.with_toggled_value(column, value))
            }
            FilterChange::SelectValues { column, values } => {
                self.with_column_active(column, self.filters.with_values(column, values.iter().cloned()))
            }
            FilterChange::SearchText { column, text } => {
                self.with_column_active(column, self.filters.with_search_text(column, text))
            }
            FilterChange::Reset => Selection::default(),
        }
    }

    fn with_column_active(&self, column: &str, filters: FilterState) -> Selection {
        let mut active = self.active.clone();
        active.insert(column.to_string());
        Selection { active, filters }
    }
}
