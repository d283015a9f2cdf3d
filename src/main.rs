//! Student Data Analysis
//!
//! Load a CSV of student records, preview it, chart grades and correlations,
//! and train a regression predicting the final grade.

use eframe::egui;
use student_insight::gui::AnalysisApp;
use student_insight::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load_or_default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Education Management System"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Education Management System",
        options,
        Box::new(|cc| Ok(Box::new(AnalysisApp::new(cc, config)))),
    )
}
