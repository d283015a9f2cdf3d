//! Message Dialog
//! Small modal-style window used for action results.

use crate::error::{AnalysisError, StatusLevel};
use egui::{Align2, Color32, RichText};

/// Colored single-line status shown under the load button.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Success)
    }

    pub fn from_error(err: &AnalysisError) -> Self {
        Self::new(err.to_string(), err.level())
    }

    pub fn color(&self) -> Color32 {
        level_color(self.level)
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new("", StatusLevel::Info)
    }
}

pub fn level_color(level: StatusLevel) -> Color32 {
    match level {
        StatusLevel::Info => Color32::GRAY,
        StatusLevel::Success => Color32::from_rgb(40, 167, 69),
        StatusLevel::Warning => Color32::from_rgb(255, 165, 0),
        StatusLevel::Error => Color32::from_rgb(220, 53, 69),
    }
}

/// Pending popup; dismissed with its OK button.
#[derive(Debug, Clone)]
pub struct MessageDialog {
    title: String,
    message: String,
    level: StatusLevel,
}

impl MessageDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    pub fn from_error(err: &AnalysisError) -> Self {
        Self::new(err.title(), err.to_string(), err.level())
    }

    /// Draw the dialog. Returns `true` once the user dismisses it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;
        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&self.message).color(level_color(self.level)));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_dialog_status_is_informational() {
        let status = StatusMessage::from_error(&AnalysisError::FileNotSelected);
        assert_eq!(status.level, StatusLevel::Info);
        assert_eq!(status.color(), Color32::GRAY);
        assert_eq!(status.text, "No file selected.");
    }

    #[test]
    fn dialog_takes_title_from_error() {
        let dialog = MessageDialog::from_error(&AnalysisError::NoDatasetLoaded);
        assert_eq!(dialog.title, "No Data");
        assert_eq!(dialog.level, StatusLevel::Warning);
    }
}
