//! Distribution Module
//! Fixed-bin histograms with a Gaussian kernel density overlay.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Histogram of one column plus its smoothed density, scaled to counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub column: String,
    pub bins: Vec<HistogramBin>,
    /// `[x, y]` points of the density curve; empty when it cannot be estimated.
    pub density: Vec<[f64; 2]>,
    pub sample_size: usize,
}

impl Distribution {
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

pub struct DistributionCalculator;

impl DistributionCalculator {
    /// Build `bin_count` equal-width bins over `[min, max]`.
    ///
    /// The last bin includes its right edge. A constant sample gets a unit
    /// wide range centered on the value. Non-finite values are ignored.
    pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
        let values = finite(values);
        if values.is_empty() || bin_count == 0 {
            return Vec::new();
        }

        let (lo, hi) = Self::range(&values);
        let width = (hi - lo) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &v in &values {
            let idx = (((v - lo) / width).floor() as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bin_count {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count,
            })
            .collect()
    }

    fn range(values: &[f64]) -> (f64, f64) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        }
    }

    /// Scott's rule bandwidth: sample std times `n^(-1/5)`.
    pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let std = values.iter().std_dev();
        let bw = std * (values.len() as f64).powf(-0.2);
        (bw.is_finite() && bw > 0.0).then_some(bw)
    }

    /// Gaussian KDE evaluated on `grid_size` points across the data range.
    ///
    /// The curve integrates to `scale` (pass `n * bin_width` to overlay
    /// on a count histogram).
    pub fn kernel_density(values: &[f64], grid_size: usize, scale: f64) -> Vec<[f64; 2]> {
        let values = finite(values);
        if !scale.is_finite() {
            return Vec::new();
        }
        let Some(bw) = Self::scott_bandwidth(&values) else {
            return Vec::new();
        };
        let Ok(kernel) = Normal::new(0.0, bw) else {
            return Vec::new();
        };
        if grid_size < 2 {
            return Vec::new();
        }

        let (lo, hi) = Self::range(&values);
        let n = values.len() as f64;
        let step = (hi - lo) / (grid_size - 1) as f64;

        (0..grid_size)
            .map(|i| {
                let x = lo + i as f64 * step;
                let density = values.iter().map(|&v| kernel.pdf(x - v)).sum::<f64>() / n;
                [x, density * scale]
            })
            .collect()
    }

    /// Histogram and count-scaled density for a column's values.
    pub fn compute(
        column: &str,
        values: &[f64],
        bin_count: usize,
        grid_size: usize,
    ) -> Distribution {
        let values = finite(values);
        let bins = Self::histogram(&values, bin_count);
        let bin_width = bins.first().map(|b| b.width()).unwrap_or(0.0);
        let density =
            Self::kernel_density(&values, grid_size, values.len() as f64 * bin_width);

        Distribution {
            column: column.to_string(),
            bins,
            density,
            sample_size: values.len(),
        }
    }
}

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}
