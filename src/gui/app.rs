//! SustainView Main Application
//! Main window with report summary panel and the scrollable report view.

use crate::export::ReportExporter;
use crate::gui::ReportView;
use crate::report::ReportContent;
use egui::{Color32, RichText, SidePanel};

/// Actions triggered by the side panel
#[derive(Debug, Clone, PartialEq)]
enum PanelAction {
    None,
    ExportReport,
}

/// Main application window.
pub struct SustainViewApp {
    content: ReportContent,
    report_view: ReportView,
    status: String,
}

impl SustainViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // The whole report is assembled once, before the first frame.
        let content = ReportContent::build();
        let report_view = ReportView::new(content.tables.len());
        Self {
            content,
            report_view,
            status: "Ready".to_string(),
        }
    }

    /// Handle report export: pick a folder, write PNGs and the JSON snapshot,
    /// then reveal the folder.
    fn handle_export(&mut self) {
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose export folder")
            .pick_folder()
        else {
            return; // User cancelled
        };

        match ReportExporter::export_all(&self.content, &dir) {
            Ok(summary) => {
                self.status = summary.describe();
                let _ = open::that(&dir);
            }
            Err(e) => {
                self.status = format!("Error: {}", e);
            }
        }
    }

    /// Draw the side panel
    fn side_panel(&mut self, ui: &mut egui::Ui) -> PanelAction {
        let mut action = PanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("\u{1f331} SustainView")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Sustainability Finance Report")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("\u{1f4c4} Report").size(14.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "{} tables, {} charts",
                self.content.tables.len(),
                self.content.charts.len()
            ))
            .size(12.0),
        );
        ui.label(
            RichText::new(format!(
                "SWACC blend: {}% corporate \u{2192} {}% social",
                self.content.blend.corporate_rate, self.content.blend.social_rate
            ))
            .size(12.0)
            .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("\u{1f4be} Export Report").size(15.0))
                .min_size(egui::vec2(180.0, 32.0));
            if ui.add(button).clicked() {
                action = PanelAction::ExportReport;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") || self.status.contains("failed") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

impl eframe::App for SustainViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("report_panel")
            .min_width(230.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                let action = self.side_panel(ui);
                if action == PanelAction::ExportReport {
                    self.handle_export();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.report_view.show(ui, &self.content);
        });
    }
}
