//! FILENAME: core/engine/src/filter_engine.rs
//! PURPOSE: Stateful column filter behind a grid's filter panel.
//! CONTEXT: Owns the source rows, the active columns and the filter state.
//! Each accepted change is applied as one atomic transition: the filtered
//! rows are recomputed in full and the listener hears about it once.

use crate::columns::{columns_from_grid, compute_eligible_columns, ColumnDescriptor};
use crate::config::GridConfig;
use crate::filter::{apply_filters, distinct_values, FilterChange, FilterState, Selection};
use crate::locale::LocaleContext;
use crate::value::{CellValue, Row};
use std::collections::HashMap;
use std::fmt;

/// Receives the filtered rows after every state change.
pub type FilterListener = Box<dyn FnMut(&[Row])>;

pub struct ColumnFilterEngine {
    rows: Vec<Row>,
    filtered: Vec<Row>,
    allow_list: Vec<String>,
    exclude_list: Vec<String>,
    captions: HashMap<String, String>,
    selection: Selection,
    listener: Option<FilterListener>,
}

impl fmt::Debug for ColumnFilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnFilterEngine")
            .field("rows", &self.rows.len())
            .field("filtered", &self.filtered.len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl ColumnFilterEngine {
    pub fn new(rows: Vec<Row>) -> Self {
        ColumnFilterEngine {
            filtered: rows.clone(),
            rows,
            allow_list: Vec::new(),
            exclude_list: Vec::new(),
            captions: HashMap::new(),
            selection: Selection::default(),
            listener: None,
        }
    }

    pub fn from_config(rows: Vec<Row>, config: &GridConfig) -> Self {
        Self::new(rows)
            .with_allow_list(config.filter_columns.clone())
            .with_exclude_list(config.excluded_columns.clone())
    }

    pub fn with_allow_list(mut self, allow_list: Vec<String>) -> Self {
        self.allow_list = allow_list;
        self
    }

    pub fn with_exclude_list(mut self, exclude_list: Vec<String>) -> Self {
        self.exclude_list = exclude_list;
        self
    }

    /// Host-supplied column captions; these win over locale lookups.
    pub fn with_captions(mut self, captions: HashMap<String, String>) -> Self {
        self.captions = captions;
        self
    }

    pub fn on_filter(&mut self, listener: impl FnMut(&[Row]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filtered_rows(&self) -> &[Row] {
        &self.filtered
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.selection.filters
    }

    pub fn active_columns(&self) -> impl Iterator<Item = &str> {
        self.selection.active.iter().map(String::as_str)
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.selection.active.contains(column)
    }

    pub fn eligible_columns(&self) -> Vec<String> {
        compute_eligible_columns(self.rows.first(), &self.allow_list, &self.exclude_list)
    }

    /// Eligible columns that have at least one value to pick.
    pub fn selectable_columns(&self) -> Vec<String> {
        self.eligible_columns()
            .into_iter()
            .filter(|column| self.rows.iter().any(|row| !row.get(column).is_null()))
            .collect()
    }

    pub fn columns_from_grid<'a>(&self, descriptors: &'a [ColumnDescriptor]) -> Vec<&'a ColumnDescriptor> {
        columns_from_grid(descriptors, &self.exclude_list)
    }

    /// Values offered for `column`: taken from the filtered rows while any
    /// remain, otherwise from the source rows.
    pub fn distinct_values(&self, column: &str) -> Vec<CellValue> {
        if self.filtered.is_empty() {
            distinct_values(&self.rows, column)
        } else {
            distinct_values(&self.filtered, column)
        }
    }

    pub fn localized_column_name(&self, column: &str, locale: &LocaleContext) -> String {
        match self.captions.get(column) {
            Some(caption) if !caption.is_empty() => caption.clone(),
            _ => locale.translate(column),
        }
    }

    // ------------------------------------------------------------------------
    // Changes
    // ------------------------------------------------------------------------

    /// Replace the source rows. Always recomputes and notifies.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.recompute();
    }

    pub fn activate_column(&mut self, column: &str, active: bool) -> bool {
        self.apply([FilterChange::ActivateColumn {
            column: column.to_string(),
            active,
        }])
    }

    pub fn toggle_value(&mut self, column: &str, value: impl Into<CellValue>) -> bool {
        self.apply([FilterChange::ToggleValue {
            column: column.to_string(),
            value: value.into(),
        }])
    }

    pub fn select_values(&mut self, column: &str, values: Vec<CellValue>) -> bool {
        self.apply([FilterChange::SelectValues {
            column: column.to_string(),
            values,
        }])
    }

    pub fn set_search_text(&mut self, column: &str, text: &str) -> bool {
        self.apply([FilterChange::SearchText {
            column: column.to_string(),
            text: text.to_string(),
        }])
    }

    /// Clear every filter and active column and report the unfiltered rows.
    pub fn reset_filters(&mut self) -> bool {
        self.apply([FilterChange::Reset])
    }

    /// Apply `changes` as one transition. Returns whether the state changed;
    /// the listener fires once if it did and not at all otherwise.
    pub fn apply<I>(&mut self, changes: I) -> bool
    where
        I: IntoIterator<Item = FilterChange>,
    {
        let next = changes
            .into_iter()
            .fold(self.selection.clone(), |selection, change| selection.apply(&change));

        if next == self.selection {
            log::trace!("filter change produced identical state, skipping");
            return false;
        }

        self.selection = next;
        self.recompute();
        true
    }

    /// Recompute and notify unconditionally.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.rows, &self.selection.filters);
        log::debug!(
            "filters recomputed: {} of {} rows kept, {} active column(s)",
            self.filtered.len(),
            self.rows.len(),
            self.selection.active.len()
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(self.filtered.as_slice());
        }
    }
}
