//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod dialog;
mod manager_app;

pub use app::AnalysisApp;
pub use chart_viewer::{ChartSurface, ChartViewer};
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use dialog::{MessageDialog, StatusMessage};
pub use manager_app::EducationManagerApp;
