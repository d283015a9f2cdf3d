//! Dataset Module
//! The single in-memory table plus the schema derived from it.

use super::schema::{ColumnKind, DatasetSchema};
use crate::error::AnalysisError;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// A loaded table. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    schema: DatasetSchema,
    source: PathBuf,
}

impl Dataset {
    pub fn new(df: DataFrame, source: impl Into<PathBuf>) -> Self {
        let schema = DatasetSchema::from_dataframe(&df);
        Self {
            df,
            schema,
            source: source.into(),
        }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Fail with `MissingColumns` unless every name is present.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), AnalysisError> {
        let missing = self.schema.missing(names);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::MissingColumns { missing })
        }
    }

    /// Values of a numeric column as `f64`, nulls preserved.
    ///
    /// NaN and infinite cells read as null so no chart sees them.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>, AnalysisError> {
        match self.schema.kind(name) {
            None => {
                return Err(AnalysisError::MissingColumns {
                    missing: vec![name.to_string()],
                })
            }
            Some(ColumnKind::Numeric) => {}
            Some(_) => return Err(AnalysisError::NonNumericColumn(name.to_string())),
        }

        let column = self.df.column(name)?.cast(&DataType::Float64)?;
        let values = column
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        Ok(values)
    }

    /// Finite values of a numeric column, nulls skipped.
    pub fn finite_values(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        Ok(self.numeric_values(name)?.into_iter().flatten().collect())
    }

    /// Any column rendered as text, nulls as empty strings.
    pub fn text_values(&self, name: &str) -> Result<Vec<String>, AnalysisError> {
        if !self.schema.contains(name) {
            return Err(AnalysisError::MissingColumns {
                missing: vec![name.to_string()],
            });
        }

        let column = self.df.column(name)?.cast(&DataType::String)?;
        let values = column
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect();
        Ok(values)
    }

    /// First `rows` rows formatted as a table.
    pub fn preview(&self, rows: usize) -> String {
        format!("{}", self.df.head(Some(rows)))
    }
}
