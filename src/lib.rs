//! Student Insight - CSV analysis of student records
//!
//! Loads a roster CSV into a single in-memory dataset and builds charts from
//! it: grade distribution, correlation heatmap, regression predictions and
//! per-student bar charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod state;
pub mod stats;
pub mod views;

pub use config::AppConfig;
pub use error::{AnalysisError, StatusLevel};
pub use state::{DatasetState, LoadSummary, Session};
pub use views::ViewController;
