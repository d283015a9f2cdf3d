//! Control Panel Widget
//! Left side panel of the analysis app: load, preview and action buttons.

use crate::gui::dialog::StatusMessage;
use egui::{Color32, RichText, ScrollArea, TextEdit};

/// Left side control panel with file selection and analysis actions.
pub struct ControlPanel {
    pub preview: String,
    pub status: StatusMessage,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            preview: String::new(),
            status: StatusMessage::new("Ready", crate::error::StatusLevel::Info),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = status;
    }

    pub fn set_preview(&mut self, preview: String) {
        self.preview = preview;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎓 Education Management System")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            if ui
                .add(egui::Button::new("📂 Load CSV Dataset").min_size(egui::vec2(200.0, 30.0)))
                .clicked()
            {
                action = ControlPanelAction::LoadCsv;
            }
        });

        ui.add_space(8.0);

        // ===== Preview Section =====
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(5.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ScrollArea::both().max_height(180.0).show(ui, |ui| {
                    let mut text = self.preview.as_str();
                    ui.add(
                        TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_rows(10)
                            .desired_width(f32::INFINITY),
                    );
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Analysis Section =====
        ui.label(RichText::new("📊 Data Analysis and Visualizations").size(14.0).strong());
        ui.add_space(5.0);

        ui.vertical_centered(|ui| {
            if ui.button("Visualize Grade Distribution").clicked() {
                action = ControlPanelAction::VisualizeGrades;
            }
            ui.add_space(5.0);
            if ui.button("Show Correlation Matrix").clicked() {
                action = ControlPanelAction::CorrelationMatrix;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Machine Learning Section =====
        ui.label(RichText::new("🤖 Machine Learning").size(14.0).strong());
        ui.add_space(5.0);

        ui.vertical_centered(|ui| {
            if ui.button("Train Regression Model").clicked() {
                action = ControlPanelAction::TrainRegression;
            }

            ui.add_space(12.0);

            ui.add_enabled_ui(self.export_enabled, |ui| {
                if ui.button("💾 Export Chart").clicked() {
                    action = ControlPanelAction::ExportChart;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(
            RichText::new(&self.status.text)
                .size(11.0)
                .color(self.status.color()),
        );

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    LoadCsv,
    VisualizeGrades,
    CorrelationMatrix,
    TrainRegression,
    ExportChart,
}
