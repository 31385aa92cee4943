//! FILENAME: core/engine/src/chooser.rs
//! PURPOSE: Column chooser state: show/hide and pin/unpin grid columns.
//! CONTEXT: Every operation returns a new chooser; the previous value stays
//! valid so the host can diff the two and push only the changed options.

use crate::columns::{ColumnDescriptor, FixedPosition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnChooser {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnChooser {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        ColumnChooser { columns }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, data_field: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.field() == Some(data_field))
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_visible()).collect()
    }

    pub fn toggle_visibility(&self, data_field: &str, visible: bool) -> ColumnChooser {
        self.map_column(data_field, |column| ColumnDescriptor {
            visible: Some(visible),
            ..column.clone()
        })
    }

    /// Pin an unpinned column to `position`, or unpin a pinned one.
    /// Unknown fields leave the chooser as it was.
    pub fn toggle_fixed(&self, data_field: &str, position: Option<FixedPosition>) -> ColumnChooser {
        self.map_column(data_field, |column| {
            let fixed = !column.fixed;
            ColumnDescriptor {
                fixed,
                fixed_position: if fixed { position } else { None },
                ..column.clone()
            }
        })
    }

    fn map_column<F>(&self, data_field: &str, update: F) -> ColumnChooser
    where
        F: Fn(&ColumnDescriptor) -> ColumnDescriptor,
    {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                if column.field() == Some(data_field) {
                    update(column)
                } else {
                    column.clone()
                }
            })
            .collect();
        ColumnChooser { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chooser() -> ColumnChooser {
        ColumnChooser::new(vec![
            ColumnDescriptor::new("nameAr", "Name"),
            ColumnDescriptor::new("grade", "Grade"),
            ColumnDescriptor::new("fee", "Fee"),
        ])
    }

    #[test]
    fn test_toggle_visibility() {
        let before = chooser();
        let after = before.toggle_visibility("grade", false);

        assert_eq!(after.visible_columns().len(), 2);
        assert_eq!(before.visible_columns().len(), 3);
        assert_eq!(after.get("grade").and_then(|c| c.visible), Some(false));
    }

    #[test]
    fn test_pin_and_unpin() {
        let pinned = chooser().toggle_fixed("fee", Some(FixedPosition::Right));
        let fee = pinned.get("fee").unwrap();
        assert!(fee.fixed);
        assert_eq!(fee.fixed_position, Some(FixedPosition::Right));

        let unpinned = pinned.toggle_fixed("fee", Some(FixedPosition::Left));
        let fee = unpinned.get("fee").unwrap();
        assert!(!fee.fixed);
        assert_eq!(fee.fixed_position, None);
    }

    #[test]
    fn test_unknown_field_is_noop() {
        let before = chooser();
        assert_eq!(before.toggle_fixed("missing", None), before);
        assert_eq!(before.toggle_visibility("missing", false), before);
    }
}
