//! Education Management System
//!
//! Load a student roster with the expected columns and plot one column per student.

use eframe::egui;
use student_insight::gui::EducationManagerApp;
use student_insight::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Education Management System"),
        ..Default::default()
    };

    eframe::run_native(
        "Education Manager",
        options,
        Box::new(|cc| Ok(Box::new(EducationManagerApp::new(cc, config)))),
    )
}
