//! Data module - CSV loading, schema and dataset access

mod dataset;
mod loader;
mod schema;

pub use dataset::Dataset;
pub use loader::{DataLoader, SchemaPolicy, EXPECTED_COLUMNS, PLOTTABLE_COLUMNS};
pub use schema::{ColumnInfo, ColumnKind, DatasetSchema};
