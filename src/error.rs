//! Error Module
//! Tagged failure reasons returned by every load and view action.

use polars::prelude::PolarsError;
use thiserror::Error;

/// How a failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No file selected.")]
    FileNotSelected,
    #[error("Failed to load dataset: {reason}")]
    ParseFailure { path: String, reason: String },
    #[error("CSV does not have required columns. Missing: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
    #[error("Please load a dataset first!")]
    NoDatasetLoaded,
    #[error("The dataset does not contain numeric columns for correlation analysis.")]
    NoNumericColumns,
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingFeatureColumns { missing: Vec<String> },
    #[error("Please select a valid column to plot.")]
    InvalidColumnSelection { selection: Option<String> },
    #[error("Column not found in dataset: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),
    #[error("Column '{0}' has no values to plot")]
    EmptyColumn(String),
    #[error("Not enough complete rows to train a model ({found} found, {required} required)")]
    InsufficientRows { found: usize, required: usize },
    #[error("Model training failed: {0}")]
    ModelFit(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Data error: {0}")]
    Data(#[from] PolarsError),
}

impl AnalysisError {
    /// Presentation level for the status line.
    pub fn level(&self) -> StatusLevel {
        match self {
            AnalysisError::FileNotSelected => StatusLevel::Info,
            AnalysisError::NoDatasetLoaded | AnalysisError::InvalidColumnSelection { .. } => {
                StatusLevel::Warning
            }
            _ => StatusLevel::Error,
        }
    }

    /// Short dialog title, mirroring the message kind.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisError::FileNotSelected => "No File",
            AnalysisError::NoDatasetLoaded => "No Data",
            AnalysisError::InvalidColumnSelection { .. } => "Invalid Selection",
            _ => "Error",
        }
    }
}

impl From<crate::charts::RenderError> for AnalysisError {
    fn from(err: crate::charts::RenderError) -> Self {
        AnalysisError::Render(err.to_string())
    }
}
