//! Stats module - distributions, correlation and regression

mod correlation;
mod distribution;
mod regression;

pub use correlation::{CorrelationCalculator, CorrelationMatrix};
pub use distribution::{Distribution, DistributionCalculator, HistogramBin};
pub use regression::{LinearModel, TrainTestSplit};
