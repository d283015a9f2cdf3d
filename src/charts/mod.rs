//! Charts module - Chart models and rendering

mod model;
mod plotter;
mod renderer;

pub use model::{coolwarm, Chart, RegressionResult, StudentBars};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer, MAX_IMAGE_SIDE};
