//! View Actions
//! User-triggered operations that read the session's dataset and build a chart.

use crate::charts::{Chart, RegressionResult, StudentBars};
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::state::Session;
use crate::stats::{CorrelationCalculator, DistributionCalculator, LinearModel, TrainTestSplit};

pub const GRADE_COLUMN: &str = "FinalGrade";
pub const NAME_COLUMN: &str = "Name";
pub const FEATURE_COLUMNS: [&str; 4] = ["Math", "English", "Science", "Attendance"];
pub const TARGET_COLUMN: &str = "FinalGrade";

/// Text shown in the column selector before a choice is made.
pub const SELECTION_PLACEHOLDER: &str = "Select Column to Plot";

/// Runs view actions against a session. Never mutates the dataset.
pub struct ViewController {
    config: AppConfig,
}

impl ViewController {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 10-bin histogram of `FinalGrade` with a density overlay.
    pub fn grade_distribution(&self, session: &Session) -> Result<Chart, AnalysisError> {
        let dataset = session.dataset()?;
        let values = dataset.finite_values(GRADE_COLUMN)?;
        if values.is_empty() {
            return Err(AnalysisError::EmptyColumn(GRADE_COLUMN.to_string()));
        }

        let distribution = DistributionCalculator::compute(
            GRADE_COLUMN,
            &values,
            self.config.histogram_bins,
            self.config.kde_grid_size,
        );
        Ok(Chart::GradeDistribution(distribution))
    }

    /// Pearson correlation heatmap over every numeric column.
    pub fn correlation_matrix(&self, session: &Session) -> Result<Chart, AnalysisError> {
        let dataset = session.dataset()?;
        let numeric = dataset.schema().numeric_columns();
        if numeric.is_empty() {
            return Err(AnalysisError::NoNumericColumns);
        }

        let columns = numeric
            .into_iter()
            .map(|name| {
                let values = dataset.numeric_values(&name)?;
                Ok((name, values))
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        Ok(Chart::Correlation(CorrelationCalculator::compute_matrix(
            &columns,
        )))
    }

    /// Fit OLS on an 80/20 seeded split and return held-out predictions.
    pub fn train_regression(&self, session: &Session) -> Result<Chart, AnalysisError> {
        let dataset = session.dataset()?;

        let mut required: Vec<&str> = FEATURE_COLUMNS.to_vec();
        required.push(TARGET_COLUMN);
        let missing = dataset.schema().missing(&required);
        if !missing.is_empty() {
            return Err(AnalysisError::MissingFeatureColumns { missing });
        }

        let features = FEATURE_COLUMNS
            .iter()
            .map(|name| dataset.numeric_values(name))
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        let target = dataset.numeric_values(TARGET_COLUMN)?;

        let complete: Vec<usize> = (0..dataset.row_count())
            .filter(|&row| {
                target[row].is_some() && features.iter().all(|col| col[row].is_some())
            })
            .collect();

        let dropped = dataset.row_count() - complete.len();
        if dropped > 0 {
            log::warn!("Dropped {} rows with missing regression inputs", dropped);
        }
        if complete.len() < 2 {
            return Err(AnalysisError::InsufficientRows {
                found: complete.len(),
                required: 2,
            });
        }

        let split = TrainTestSplit::new(
            complete.len(),
            self.config.test_fraction,
            self.config.split_seed,
        );
        let train_rows: Vec<usize> = split.train.iter().map(|&i| complete[i]).collect();
        let test_rows: Vec<usize> = split.test.iter().map(|&i| complete[i]).collect();

        let feature_row = |row: usize| -> Vec<f64> {
            features.iter().map(|col| col[row].unwrap_or(f64::NAN)).collect()
        };
        let target_at = |row: usize| target[row].unwrap_or(f64::NAN);

        let x_train: Vec<Vec<f64>> = train_rows.iter().map(|&r| feature_row(r)).collect();
        let y_train: Vec<f64> = train_rows.iter().map(|&r| target_at(r)).collect();
        let model = LinearModel::fit(&x_train, &y_train)?;

        let x_test: Vec<Vec<f64>> = test_rows.iter().map(|&r| feature_row(r)).collect();
        let predicted = model.predict(&x_test);
        let actual: Vec<f64> = test_rows.iter().map(|&r| target_at(r)).collect();

        log::info!(
            "Trained regression on {} rows, predicted {} held-out rows",
            train_rows.len(),
            test_rows.len()
        );

        Ok(Chart::Regression(RegressionResult {
            features: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            target: TARGET_COLUMN.to_string(),
            actual,
            predicted,
            train_rows,
            test_rows,
        }))
    }

    /// One bar per student for the selected plottable column.
    pub fn column_bar_chart(
        &self,
        session: &Session,
        selection: Option<&str>,
    ) -> Result<Chart, AnalysisError> {
        let dataset = session.dataset()?;

        let column = match selection {
            Some(col)
                if col != SELECTION_PLACEHOLDER
                    && session.plottable_columns().iter().any(|c| c == col) =>
            {
                col
            }
            other => {
                return Err(AnalysisError::InvalidColumnSelection {
                    selection: other.map(str::to_string),
                })
            }
        };

        let names = dataset.text_values(NAME_COLUMN)?;
        let values = dataset.numeric_values(column)?;

        Ok(Chart::StudentBars(StudentBars {
            column: column.to_string(),
            names,
            values,
        }))
    }
}
