//! Table View Widget
//! Renders a `TableModel` as a striped grid, honoring the per-table feature
//! flags: live search, info line, paging, and click-to-sort headers. Cells
//! with a description get a hover tooltip; others are left untouched.

use crate::report::{Cell, TableModel};
use egui::{Color32, Label, RichText, Sense};
use std::cmp::Ordering;

/// Per-table widget state: sort order, search query, current page.
pub struct TableView {
    sort: Option<(usize, bool)>,
    query: String,
    page: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            sort: None,
            query: String::new(),
            page: 0,
        }
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive match of the query against any cell in the row.
    pub fn row_matches(row: &[Cell], query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || row.iter().any(|c| c.text.to_lowercase().contains(&q))
    }

    /// Compare two rows on one column, numerically when both cells parse.
    pub fn compare_rows(a: &[Cell], b: &[Cell], column: usize) -> Ordering {
        match (a.get(column), b.get(column)) {
            (Some(ca), Some(cb)) => match (ca.numeric(), cb.numeric()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => ca.text.cmp(&cb.text),
            },
            _ => Ordering::Equal,
        }
    }

    /// Row indices after search and sort, before paging. Search and sort only
    /// apply when the table's config enables them.
    pub fn matched_rows(&self, model: &TableModel) -> Vec<usize> {
        let mut indices: Vec<usize> = model
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !model.config.searching || Self::row_matches(row, &self.query))
            .map(|(i, _)| i)
            .collect();

        if model.config.ordering {
            if let Some((column, ascending)) = self.sort {
                indices.sort_by(|&a, &b| {
                    let ord = Self::compare_rows(&model.rows[a], &model.rows[b], column);
                    if ascending {
                        ord
                    } else {
                        ord.reverse()
                    }
                });
            }
        }

        indices
    }

    fn page_slice(&self, model: &TableModel, matched: &[usize]) -> Vec<usize> {
        if !model.config.paging {
            return matched.to_vec();
        }
        let size = model.config.page_size.max(1);
        matched.iter().copied().skip(self.page * size).take(size).collect()
    }

    /// Draw the table.
    pub fn show(&mut self, ui: &mut egui::Ui, model: &TableModel) {
        ui.label(RichText::new(&model.title).size(16.0).strong());
        ui.add_space(6.0);

        if model.config.searching {
            ui.horizontal(|ui| {
                ui.label("Search:");
                if ui.text_edit_singleline(&mut self.query).changed() {
                    self.page = 0;
                }
            });
            ui.add_space(4.0);
        }

        let matched = self.matched_rows(model);
        let visible = self.page_slice(model, &matched);

        egui::Grid::new(model.id)
            .striped(true)
            .min_col_width(110.0)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (column, header) in model.headers.iter().enumerate() {
                    if model.config.ordering {
                        let marker = match self.sort {
                            Some((c, true)) if c == column => " \u{25b2}",
                            Some((c, false)) if c == column => " \u{25bc}",
                            _ => "",
                        };
                        let text = RichText::new(format!("{}{}", header, marker)).strong();
                        if ui.add(Label::new(text).sense(Sense::click())).clicked() {
                            self.sort = match self.sort {
                                Some((c, ascending)) if c == column => Some((column, !ascending)),
                                _ => Some((column, true)),
                            };
                        }
                    } else {
                        ui.label(RichText::new(header).strong());
                    }
                }
                ui.end_row();

                for &i in &visible {
                    for cell in &model.rows[i] {
                        let response = ui.label(&cell.text);
                        if let Some(tip) = cell.tooltip() {
                            response.on_hover_text(tip);
                        }
                    }
                    ui.end_row();
                }
            });

        if model.config.info {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Showing {} of {} entries",
                    visible.len(),
                    model.rows.len()
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        }

        if model.config.paging {
            let size = model.config.page_size.max(1);
            let page_count = matched.len().div_ceil(size).max(1);
            self.page = self.page.min(page_count - 1);

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.small_button("Prev").clicked() && self.page > 0 {
                    self.page -= 1;
                }
                ui.label(
                    RichText::new(format!("Page {}/{}", self.page + 1, page_count)).size(11.0),
                );
                if ui.small_button("Next").clicked() && self.page + 1 < page_count {
                    self.page += 1;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{scorecard_table, TableConfig, TableModel};

    fn row(texts: &[&str]) -> Vec<Cell> {
        texts.iter().map(|t| Cell::new(*t)).collect()
    }

    fn test_table(config: TableConfig) -> TableModel {
        TableModel {
            id: "test-table",
            title: "Test".to_string(),
            headers: vec!["Name".to_string(), "Value".to_string()],
            rows: vec![
                row(&["beta", "20"]),
                row(&["alpha", "3"]),
                row(&["gamma", "100"]),
            ],
            config,
        }
    }

    #[test]
    fn test_row_matches_is_case_insensitive() {
        let r = row(&["Carbon intensity", "High"]);
        assert!(TableView::row_matches(&r, "carbon"));
        assert!(TableView::row_matches(&r, "HIGH"));
        assert!(TableView::row_matches(&r, ""));
        assert!(!TableView::row_matches(&r, "budget"));
    }

    #[test]
    fn test_compare_rows_numeric_beats_lexical() {
        let a = row(&["x", "20"]);
        let b = row(&["y", "100"]);
        // lexically "100" < "20", numerically 20 < 100
        assert_eq!(TableView::compare_rows(&a, &b, 1), Ordering::Less);
        assert_eq!(TableView::compare_rows(&a, &b, 0), Ordering::Less);
    }

    #[test]
    fn test_sort_applies_only_when_ordering_enabled() {
        let mut view = TableView::new();
        view.sort = Some((0, true));

        let unordered = test_table(TableConfig::static_display());
        assert_eq!(view.matched_rows(&unordered), vec![0, 1, 2]);

        let ordered = test_table(TableConfig::static_display().with_ordering());
        assert_eq!(view.matched_rows(&ordered), vec![1, 0, 2]);

        view.sort = Some((1, false));
        assert_eq!(view.matched_rows(&ordered), vec![2, 0, 1]);
    }

    #[test]
    fn test_search_applies_only_when_enabled() {
        let mut view = TableView::new();
        view.query = "alpha".to_string();

        let plain = test_table(TableConfig::static_display());
        assert_eq!(view.matched_rows(&plain).len(), 3);

        let mut searchable = test_table(TableConfig::static_display());
        searchable.config.searching = true;
        assert_eq!(view.matched_rows(&searchable), vec![1]);
    }

    #[test]
    fn test_paging_slices_matched_rows() {
        let mut view = TableView::new();
        let mut paged = test_table(TableConfig::static_display());
        paged.config.paging = true;
        paged.config.page_size = 2;

        let matched = view.matched_rows(&paged);
        assert_eq!(view.page_slice(&paged, &matched), vec![0, 1]);
        view.page = 1;
        assert_eq!(view.page_slice(&paged, &matched), vec![2]);
    }

    #[test]
    fn test_scorecard_default_order_is_model_order() {
        let view = TableView::new();
        let table = scorecard_table();
        assert_eq!(
            view.matched_rows(&table),
            (0..table.rows.len()).collect::<Vec<_>>()
        );
    }
}
