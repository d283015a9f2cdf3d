//! Correlation Module
//! Pairwise Pearson correlation across numeric columns.

use rayon::prelude::*;

/// Square correlation matrix with row/column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major `labels.len() x labels.len()` values; NaN where undefined.
    pub values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size() + col]
    }

    pub fn get_by_name(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.labels.iter().position(|l| l == row)?;
        let c = self.labels.iter().position(|l| l == col)?;
        Some(self.get(r, c))
    }

    /// Annotation text for a cell, two decimals.
    pub fn format_cell(value: f64) -> String {
        if value.is_nan() {
            String::new()
        } else {
            format!("{:.2}", value)
        }
    }
}

pub struct CorrelationCalculator;

impl CorrelationCalculator {
    /// Pearson correlation over rows where both values are present.
    ///
    /// Returns NaN with fewer than two complete pairs or zero variance.
    pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
        let pairs: Vec<(f64, f64)> = x
            .iter()
            .zip(y.iter())
            .filter_map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
                _ => None,
            })
            .collect();

        let n = pairs.len();
        if n < 2 {
            return f64::NAN;
        }

        let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
        let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (a, b) in &pairs {
            let dx = a - mean_x;
            let dy = b - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        if var_x == 0.0 || var_y == 0.0 {
            return f64::NAN;
        }

        (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
    }

    /// Full matrix for the given columns, upper triangle computed in parallel.
    pub fn compute_matrix(columns: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
        let k = columns.len();
        let pairs: Vec<(usize, usize)> = (0..k)
            .flat_map(|i| (i..k).map(move |j| (i, j)))
            .collect();

        let results: Vec<((usize, usize), f64)> = pairs
            .par_iter()
            .map(|&(i, j)| ((i, j), Self::pearson(&columns[i].1, &columns[j].1)))
            .collect();

        let mut values = vec![f64::NAN; k * k];
        for ((i, j), r) in results {
            values[i * k + j] = r;
            values[j * k + i] = r;
        }

        CorrelationMatrix {
            labels: columns.iter().map(|(name, _)| name.clone()).collect(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, values: &[f64]) -> (String, Vec<Option<f64>>) {
        (name.to_string(), values.iter().map(|&v| Some(v)).collect())
    }

    #[test]
    fn perfect_correlations() {
        let columns = vec![
            col("a", &[1.0, 2.0, 3.0, 4.0]),
            col("b", &[2.0, 4.0, 6.0, 8.0]),
            col("c", &[4.0, 3.0, 2.0, 1.0]),
        ];
        let m = CorrelationCalculator::compute_matrix(&columns);
        assert_eq!(m.size(), 3);
        assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
        assert!((m.get_by_name("a", "b").unwrap() - 1.0).abs() < 1e-12);
        assert!((m.get_by_name("c", "a").unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(m.get(1, 2), m.get(2, 1));
    }

    #[test]
    fn skips_incomplete_pairs() {
        let x = [Some(1.0), None, Some(3.0), Some(5.0)];
        let y = [Some(2.0), Some(100.0), Some(6.0), Some(10.0)];
        assert!((CorrelationCalculator::pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_is_undefined() {
        let x = [Some(1.0), Some(1.0), Some(1.0)];
        let y = [Some(1.0), Some(2.0), Some(3.0)];
        assert!(CorrelationCalculator::pearson(&x, &y).is_nan());
        assert_eq!(CorrelationMatrix::format_cell(f64::NAN), "");
        assert_eq!(CorrelationMatrix::format_cell(0.4567), "0.46");
    }
}
