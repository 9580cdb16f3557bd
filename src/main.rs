//! SustainView - Sustainability Finance Report Viewer
//!
//! Renders a fixed sustainability report: three display tables and three
//! charts (SWACC blend curve, income comparison, carbon budget).

mod charts;
mod export;
mod gui;
mod report;

use eframe::egui;
use gui::SustainViewApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("SustainView"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SustainView",
        options,
        Box::new(|cc| Ok(Box::new(SustainViewApp::new(cc)))),
    )
}
