//! Session State
//! Owns the single loaded dataset and applies the load state machine.

use crate::data::{DataLoader, Dataset, SchemaPolicy};
use crate::error::AnalysisError;
use std::path::{Path, PathBuf};

/// Whether a dataset is available to the view actions.
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    NoDataset,
    DatasetReady(Dataset),
}

/// What the presentation layer shows after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub plottable_columns: Vec<String>,
}

/// Application session: one dataset at a time, replaced on each load.
pub struct Session {
    state: DatasetState,
    policy: SchemaPolicy,
    loader: DataLoader,
    plottable_columns: Vec<String>,
}

impl Session {
    pub fn new(policy: SchemaPolicy, loader: DataLoader) -> Self {
        Self {
            state: DatasetState::NoDataset,
            policy,
            loader,
            plottable_columns: Vec::new(),
        }
    }

    /// Load the file picked by the user, replacing the current dataset on success.
    ///
    /// `None` (dialog cancelled) and parse failures leave the current state
    /// untouched. A schema rejection drops any dataset and returns to `NoDataset`.
    pub fn load(&mut self, path: Option<&Path>) -> Result<LoadSummary, AnalysisError> {
        let Some(path) = path else {
            return Err(AnalysisError::FileNotSelected);
        };

        let dataset = match self.loader.load_csv(path) {
            Ok(ds) => ds,
            Err(e) => {
                log::warn!("Load of {} failed: {}", path.display(), e);
                return Err(e);
            }
        };

        if let Err(e) = self.policy.validate(dataset.schema()) {
            log::warn!("Rejected {}: {}", path.display(), e);
            self.state = DatasetState::NoDataset;
            self.plottable_columns.clear();
            return Err(e);
        }

        self.plottable_columns = self.policy.plottable_columns();
        let summary = LoadSummary {
            path: path.to_path_buf(),
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            plottable_columns: self.plottable_columns.clone(),
        };
        self.state = DatasetState::DatasetReady(dataset);

        log::info!(
            "Dataset ready: {} rows, {} columns",
            summary.rows,
            summary.columns
        );
        Ok(summary)
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, DatasetState::DatasetReady(_))
    }

    /// Borrow the dataset for a view action.
    pub fn dataset(&self) -> Result<&Dataset, AnalysisError> {
        match &self.state {
            DatasetState::DatasetReady(ds) => Ok(ds),
            DatasetState::NoDataset => Err(AnalysisError::NoDatasetLoaded),
        }
    }

    pub fn plottable_columns(&self) -> &[String] {
        &self.plottable_columns
    }
}
