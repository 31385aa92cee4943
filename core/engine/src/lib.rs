//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the headless grid engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod chooser;
pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod filter_engine;
pub mod locale;
pub mod pagination;
pub mod value;

// Re-export commonly used types at the crate root
pub use chooser::ColumnChooser;
pub use columns::{
    columns_from_grid, compute_eligible_columns, is_excluded, ColumnDescriptor, FixedPosition,
    DEFAULT_EXCLUDED_COLUMNS,
};
pub use config::{GridConfig, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};
pub use error::ConfigError;
pub use filter::{apply_filters, distinct_values, ColumnFilter, FilterChange, FilterState, Selection};
pub use filter_engine::{ColumnFilterEngine, FilterListener};
pub use locale::{Language, LocaleContext};
pub use pagination::{visible_page_buttons, PageButton, PageListener, PageRequest, Paginator};
pub use value::{CellValue, Row};
