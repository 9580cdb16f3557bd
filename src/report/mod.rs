//! Report module - Blend computation, datasets, and table models

mod blend;
mod datasets;
mod tables;

pub use blend::{BlendCurve, BlendPoint, BLEND_STEPS, CORPORATE_RATE, SOCIAL_RATE};
pub use datasets::{
    CARBON_BUDGET_MT, CARBON_YEARS, EMISSIONS_MT, INCOME_CATEGORIES, SUSTAINABLE_INCOME,
    TRADITIONAL_INCOME,
};
pub use tables::{carbon_table, income_table, scorecard_table, Cell, TableConfig, TableModel};

use crate::charts::{report_charts, ChartSpec};

/// Everything the report window displays, assembled once at startup.
/// Construction is infallible and pure; the three tables and three charts are
/// built independently of one another.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContent {
    pub tables: Vec<TableModel>,
    pub charts: Vec<ChartSpec>,
    pub blend: BlendCurve,
}

impl ReportContent {
    pub fn build() -> Self {
        Self {
            tables: vec![scorecard_table(), income_table(), carbon_table()],
            charts: report_charts(),
            blend: BlendCurve::swacc(),
        }
    }
}

#[cfg(test)]
mod content_tests {
    use super::*;

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(ReportContent::build(), ReportContent::build());
    }

    #[test]
    fn test_three_tables_three_charts() {
        let content = ReportContent::build();
        assert_eq!(content.tables.len(), 3);
        assert_eq!(content.charts.len(), 3);
        assert_eq!(content.blend.points.len(), 11);
    }
}
