//! Regression Module
//! Seeded train/test split and ordinary least squares.

use crate::error::AnalysisError;
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Singular values below this are treated as zero when solving.
const SVD_EPSILON: f64 = 1e-10;

/// Row indices assigned to each side of the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Shuffle `0..n_rows` with a seeded RNG; the first `ceil(n * fraction)`
    /// indices form the test set.
    pub fn new(n_rows: usize, test_fraction: f64, seed: u64) -> Self {
        let mut indices: Vec<usize> = (0..n_rows).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = Self::test_size(n_rows, test_fraction);
        let train = indices.split_off(n_test);
        Self {
            train,
            test: indices,
        }
    }

    /// Held-out row count, at least one and leaving at least one for training.
    pub fn test_size(n_rows: usize, test_fraction: f64) -> usize {
        if n_rows < 2 {
            return 0;
        }
        let n_test = (n_rows as f64 * test_fraction).ceil() as usize;
        n_test.clamp(1, n_rows - 1)
    }
}

/// A fitted linear model `y = intercept + sum(coef_i * x_i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Least-squares fit with intercept. `rows[i]` holds the features of sample `i`.
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Result<Self, AnalysisError> {
        if rows.is_empty() || rows.len() != targets.len() {
            return Err(AnalysisError::ModelFit(format!(
                "{} feature rows for {} targets",
                rows.len(),
                targets.len()
            )));
        }

        let n_features = rows[0].len();
        if rows.iter().any(|r| r.len() != n_features) {
            return Err(AnalysisError::ModelFit("ragged feature rows".to_string()));
        }

        let design = DMatrix::from_fn(rows.len(), n_features + 1, |r, c| {
            if c == 0 {
                1.0
            } else {
                rows[r][c - 1]
            }
        });
        let y = DVector::from_column_slice(targets);

        let solution = design
            .svd(true, true)
            .solve(&y, SVD_EPSILON)
            .map_err(|e| AnalysisError::ModelFit(e.to_string()))?;

        Ok(Self {
            intercept: solution[0],
            coefficients: solution.iter().skip(1).copied().collect(),
        })
    }

    pub fn predict_row(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    pub fn predict(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|r| self.predict_row(r)).collect()
    }
}
