//! Education Management Application
//! Tabbed window: schema-checked roster load and per-student bar charts.

use crate::config::AppConfig;
use crate::data::{DataLoader, SchemaPolicy, EXPECTED_COLUMNS};
use crate::error::StatusLevel;
use crate::gui::dialog::{MessageDialog, StatusMessage};
use crate::gui::{ChartSurface, ChartViewer};
use crate::state::Session;
use crate::views::{ViewController, SELECTION_PLACEHOLDER};
use egui::{ComboBox, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    StudentData,
}

pub struct EducationManagerApp {
    session: Session,
    views: ViewController,
    chart_viewer: ChartViewer,
    tab: Tab,
    status: StatusMessage,
    column_choices: Vec<String>,
    selected_column: Option<String>,
    dialog: Option<MessageDialog>,
}

impl EducationManagerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let loader = DataLoader::new(config.infer_schema_length);
        let image_size = [config.export_width, config.export_height];
        Self {
            session: Session::new(SchemaPolicy::RequireColumns(&EXPECTED_COLUMNS), loader),
            views: ViewController::new(config),
            chart_viewer: ChartViewer::new(ChartSurface::Static, image_size),
            tab: Tab::StudentData,
            status: StatusMessage::default(),
            column_choices: Vec::new(),
            selected_column: None,
            dialog: None,
        }
    }

    fn handle_load_csv(&mut self) {
        let path = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file();

        let result = self.session.load(path.as_deref());
        // Choices always mirror the session, which may have dropped its dataset.
        self.column_choices = self.session.plottable_columns().to_vec();
        if !self.session.is_ready() {
            self.selected_column = None;
            self.chart_viewer.clear();
        }

        match result {
            Ok(_) => {
                self.chart_viewer.clear();
                self.status = StatusMessage::success("CSV loaded successfully!");
            }
            Err(e) => self.status = StatusMessage::from_error(&e),
        }
    }

    fn handle_plot(&mut self) {
        let selection = self.selected_column.as_deref();
        match self.views.column_bar_chart(&self.session, selection) {
            Ok(chart) => self.chart_viewer.set_chart(chart),
            Err(e) => self.dialog = Some(MessageDialog::from_error(&e)),
        }
    }

    fn handle_export(&mut self) {
        match self.chart_viewer.export_png() {
            Ok(Some(path)) => {
                self.status = StatusMessage::success(format!("Chart saved to {}", path.display()))
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("{e:#}");
                self.status = StatusMessage::new(format!("{e:#}"), StatusLevel::Error);
            }
        }
    }

    fn show_student_data(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            if ui.button("Load CSV Data").clicked() {
                self.handle_load_csv();
            }
            ui.label(RichText::new(&self.status.text).color(self.status.color()));
            ui.add_space(10.0);

            let selected_text = self
                .selected_column
                .clone()
                .unwrap_or_else(|| SELECTION_PLACEHOLDER.to_string());
            ComboBox::from_id_salt("plot_column")
                .width(200.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for col in &self.column_choices {
                        let is_selected = self.selected_column.as_deref() == Some(col.as_str());
                        if ui.selectable_label(is_selected, col).clicked() {
                            self.selected_column = Some(col.clone());
                        }
                    }
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Plot Graph").clicked() {
                    self.handle_plot();
                }
                ui.add_enabled_ui(self.chart_viewer.current().is_some(), |ui| {
                    if ui.button("💾 Export Chart").clicked() {
                        self.handle_export();
                    }
                });
            });
            ui.add_space(10.0);
        });

        ui.separator();
        self.chart_viewer.show(ctx, ui);
    }
}

impl eframe::App for EducationManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::StudentData, "Student Data");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::StudentData => self.show_student_data(ctx, ui),
        });

        if let Some(dialog) = &self.dialog {
            if dialog.show(ctx) {
                self.dialog = None;
            }
        }
    }
}
