//! Student Data Analysis Application
//! Main window with control panel and chart viewer.

use crate::charts::Chart;
use crate::config::AppConfig;
use crate::data::{DataLoader, SchemaPolicy};
use crate::error::{AnalysisError, StatusLevel};
use crate::gui::dialog::{MessageDialog, StatusMessage};
use crate::gui::{ChartSurface, ChartViewer, ControlPanel, ControlPanelAction};
use crate::state::Session;
use crate::views::ViewController;
use egui::SidePanel;

/// Main application window.
pub struct AnalysisApp {
    session: Session,
    views: ViewController,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    dialog: Option<MessageDialog>,
}

impl AnalysisApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let loader = DataLoader::new(config.infer_schema_length);
        let image_size = [config.export_width, config.export_height];
        Self {
            session: Session::new(SchemaPolicy::AnyColumns, loader),
            views: ViewController::new(config),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(ChartSurface::Interactive, image_size),
            dialog: None,
        }
    }

    /// Handle CSV file selection
    fn handle_load_csv(&mut self) {
        let path = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file();

        match self.session.load(path.as_deref()) {
            Ok(summary) => {
                if let Ok(dataset) = self.session.dataset() {
                    let rows = self.views.config().preview_rows;
                    self.control_panel.set_preview(dataset.preview(rows));
                }
                self.chart_viewer.clear();
                self.control_panel.export_enabled = false;
                self.control_panel.set_status(StatusMessage::success(format!(
                    "Loaded {} rows, {} columns",
                    summary.rows, summary.columns
                )));
                self.dialog = Some(MessageDialog::new(
                    "Success",
                    "Dataset loaded successfully!",
                    StatusLevel::Success,
                ));
            }
            Err(e @ AnalysisError::FileNotSelected) => {
                self.control_panel.set_status(StatusMessage::from_error(&e))
            }
            Err(e) => self.report(&e),
        }
    }

    /// Show a view result: chart on success, popup on failure.
    fn show_result(&mut self, result: Result<Chart, AnalysisError>, success: Option<&str>) {
        match result {
            Ok(chart) => {
                self.control_panel
                    .set_status(StatusMessage::success(chart.title()));
                self.chart_viewer.set_chart(chart);
                self.control_panel.export_enabled = true;
                if let Some(message) = success {
                    self.dialog = Some(MessageDialog::new("Success", message, StatusLevel::Success));
                }
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, err: &AnalysisError) {
        self.control_panel.set_status(StatusMessage::from_error(err));
        self.dialog = Some(MessageDialog::from_error(err));
    }

    fn handle_export(&mut self) {
        match self.chart_viewer.export_png() {
            Ok(Some(path)) => self.control_panel.set_status(StatusMessage::success(format!(
                "Chart saved to {}",
                path.display()
            ))),
            Ok(None) => {}
            Err(e) => {
                log::error!("{e:#}");
                self.control_panel
                    .set_status(StatusMessage::new(format!("{e:#}"), StatusLevel::Error));
            }
        }
    }
}

impl eframe::App for AnalysisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(380.0)
            .max_width(520.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::LoadCsv => self.handle_load_csv(),
                        ControlPanelAction::VisualizeGrades => {
                            let result = self.views.grade_distribution(&self.session);
                            self.show_result(result, None);
                        }
                        ControlPanelAction::CorrelationMatrix => {
                            let result = self.views.correlation_matrix(&self.session);
                            self.show_result(result, None);
                        }
                        ControlPanelAction::TrainRegression => {
                            let result = self.views.train_regression(&self.session);
                            self.show_result(result, Some("Regression model trained successfully!"));
                        }
                        ControlPanelAction::ExportChart => self.handle_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ctx, ui);
        });

        if let Some(dialog) = &self.dialog {
            if dialog.show(ctx) {
                self.dialog = None;
            }
        }
    }
}
