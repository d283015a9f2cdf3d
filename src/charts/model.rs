//! Chart Model Module
//! Backend-independent description of every chart the views produce.

use crate::stats::{CorrelationMatrix, Distribution};

/// Held-out predictions from one regression run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    pub features: Vec<String>,
    pub target: String,
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
    /// Dataset row indices used for fitting.
    pub train_rows: Vec<usize>,
    /// Dataset row indices held out, in prediction order.
    pub test_rows: Vec<usize>,
}

impl RegressionResult {
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.actual
            .iter()
            .zip(&self.predicted)
            .map(|(&a, &p)| [a, p])
            .collect()
    }
}

/// One bar per student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentBars {
    pub column: String,
    pub names: Vec<String>,
    /// Null cells draw no bar.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    GradeDistribution(Distribution),
    Correlation(CorrelationMatrix),
    Regression(RegressionResult),
    StudentBars(StudentBars),
}

impl Chart {
    pub fn title(&self) -> String {
        match self {
            Chart::GradeDistribution(_) => "Grade Distribution".to_string(),
            Chart::Correlation(_) => "Correlation Matrix".to_string(),
            Chart::Regression(_) => "Actual vs Predicted Grades".to_string(),
            Chart::StudentBars(bars) => format!("Student {}", bars.column),
        }
    }

    pub fn x_label(&self) -> String {
        match self {
            Chart::GradeDistribution(_) => "Final Grade".to_string(),
            Chart::Correlation(_) => String::new(),
            Chart::Regression(_) => "Actual Grades".to_string(),
            Chart::StudentBars(_) => "Student Name".to_string(),
        }
    }

    pub fn y_label(&self) -> String {
        match self {
            Chart::GradeDistribution(_) => "Frequency".to_string(),
            Chart::Correlation(_) => String::new(),
            Chart::Regression(_) => "Predicted Grades".to_string(),
            Chart::StudentBars(bars) => bars.column.clone(),
        }
    }

    /// Default file name offered when exporting.
    pub fn file_stem(&self) -> String {
        self.title().to_lowercase().replace(' ', "_")
    }
}

/// Diverging blue-white-red color for a correlation in `[-1, 1]`.
///
/// NaN maps to light gray.
pub fn coolwarm(value: f64) -> [u8; 3] {
    const COLD: [f64; 3] = [59.0, 76.0, 192.0];
    const NEUTRAL: [f64; 3] = [221.0, 221.0, 221.0];
    const WARM: [f64; 3] = [180.0, 4.0, 38.0];

    if value.is_nan() {
        return [235, 235, 235];
    }

    let v = value.clamp(-1.0, 1.0);
    let (from, to, t) = if v < 0.0 {
        (NEUTRAL, COLD, -v)
    } else {
        (NEUTRAL, WARM, v)
    };

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = (from[i] + (to[i] - from[i]) * t).round() as u8;
    }
    rgb
}
