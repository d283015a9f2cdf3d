//! CSV Data Loader Module
//! Handles CSV file loading and schema validation using Polars.

use super::dataset::Dataset;
use super::schema::DatasetSchema;
use crate::error::AnalysisError;
use polars::prelude::*;
use std::path::Path;

/// Columns a student roster must provide for the education manager.
pub const EXPECTED_COLUMNS: [&str; 11] = [
    "StudentID",
    "Name",
    "Age",
    "Gender",
    "Class",
    "Math",
    "English",
    "Science",
    "Attendance",
    "PreviousGrade",
    "FinalGrade",
];

/// Trailing numeric columns offered in the column selector.
pub const PLOTTABLE_COLUMNS: [&str; 6] = [
    "Math",
    "English",
    "Science",
    "Attendance",
    "PreviousGrade",
    "FinalGrade",
];

/// Validation applied after a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPolicy {
    /// Accept whatever columns the file has.
    AnyColumns,
    /// Every listed column must be present; extras and order are ignored.
    RequireColumns(&'static [&'static str]),
}

impl SchemaPolicy {
    pub fn validate(&self, schema: &DatasetSchema) -> Result<(), AnalysisError> {
        match self {
            SchemaPolicy::AnyColumns => Ok(()),
            SchemaPolicy::RequireColumns(required) => {
                let missing = schema.missing(required);
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(AnalysisError::SchemaMismatch { missing })
                }
            }
        }
    }

    /// Columns offered for plotting once a dataset passes this policy.
    pub fn plottable_columns(&self) -> Vec<String> {
        match self {
            SchemaPolicy::AnyColumns => Vec::new(),
            SchemaPolicy::RequireColumns(_) => {
                PLOTTABLE_COLUMNS.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

/// Reads CSV files into a `Dataset`.
pub struct DataLoader {
    infer_schema_length: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl DataLoader {
    pub fn new(infer_schema_length: usize) -> Self {
        Self {
            infer_schema_length,
        }
    }

    /// Load a CSV file using Polars. The whole file is read eagerly.
    pub fn load_csv(&self, file_path: &Path) -> Result<Dataset, AnalysisError> {
        let parse_failure = |e: PolarsError| AnalysisError::ParseFailure {
            path: file_path.display().to_string(),
            reason: e.to_string(),
        };

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(self.infer_schema_length))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(parse_failure)?;

        if df.width() == 0 {
            return Err(AnalysisError::ParseFailure {
                path: file_path.display().to_string(),
                reason: "file has no columns".to_string(),
            });
        }

        log::info!(
            "Parsed {}: {} rows, {} columns",
            file_path.display(),
            df.height(),
            df.width()
        );

        Ok(Dataset::new(df, file_path))
    }
}
