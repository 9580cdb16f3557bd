//! Report View Widget
//! Central scrollable panel: the three table cards followed by the three
//! chart cards, drawn in a single pass each frame.

use crate::charts::ChartPlotter;
use crate::gui::TableView;
use crate::report::ReportContent;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 320.0;
const HEADING_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

/// Scrollable report area. Holds one widget state per table; chart cards are
/// stateless.
pub struct ReportView {
    table_views: Vec<TableView>,
}

impl ReportView {
    pub fn new(table_count: usize) -> Self {
        Self {
            table_views: (0..table_count).map(|_| TableView::new()).collect(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, content: &ReportContent) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (model, view) in content.tables.iter().zip(self.table_views.iter_mut()) {
                    Self::card(ui, |ui| view.show(ui, model));
                    ui.add_space(CARD_SPACING);
                }

                for spec in &content.charts {
                    Self::card(ui, |ui| {
                        ui.label(
                            RichText::new(&spec.title)
                                .size(16.0)
                                .strong()
                                .color(HEADING_COLOR),
                        );
                        ui.add_space(8.0);
                        ChartPlotter::draw(ui, spec, CHART_HEIGHT);
                    });
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(80)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 24.0);
                add_contents(ui);
            });
    }
}
