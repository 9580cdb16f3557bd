//! Report Tables Module
//! Table models for the three report tables, plus the widget configuration
//! flags and the typed per-cell tooltip accessor.

use crate::report::datasets::{
    CARBON_BUDGET_MT, CARBON_YEARS, EMISSIONS_MT, INCOME_CATEGORIES, SUSTAINABLE_INCOME,
    TRADITIONAL_INCOME,
};
use serde::Serialize;

/// One table cell: display text plus an optional description shown on hover.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    desc: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            desc: None,
        }
    }

    /// Cell with a hover description.
    pub fn with_desc(text: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            desc: Some(desc.into()),
        }
    }

    /// Tooltip text for this cell. Absent and empty descriptions are both
    /// treated as "no tooltip".
    pub fn tooltip(&self) -> Option<&str> {
        self.desc.as_deref().filter(|d| !d.is_empty())
    }

    /// Numeric interpretation of the cell text, used for sorting.
    pub fn numeric(&self) -> Option<f64> {
        self.text.trim().trim_end_matches('%').parse().ok()
    }
}

/// Feature flags of the table widget, one instance per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    pub paging: bool,
    pub info: bool,
    pub searching: bool,
    /// Click-to-sort headers.
    pub ordering: bool,
    pub page_size: usize,
}

impl TableConfig {
    /// The report default: a plain static table.
    pub fn static_display() -> Self {
        Self {
            paging: false,
            info: false,
            searching: false,
            ordering: false,
            page_size: 10,
        }
    }

    pub fn with_ordering(mut self) -> Self {
        self.ordering = true;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::static_display()
    }
}

/// A complete display table: identity, headers, body cells, and widget flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    pub id: &'static str,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub config: TableConfig,
}

/// ESG scorecard: the only sortable table, with per-cell rating descriptions.
pub fn scorecard_table() -> TableModel {
    let headers = vec![
        "Criterion".to_string(),
        "Traditional".to_string(),
        "Sustainable".to_string(),
    ];

    let rows = vec![
        vec![
            Cell::new("Carbon intensity"),
            Cell::with_desc("High", "High risk"),
            Cell::with_desc("Low", "Aligned with a 1.5\u{b0}C pathway"),
        ],
        vec![
            Cell::new("Transition risk exposure"),
            Cell::with_desc("Elevated", "Stranded-asset exposure in fossil portfolio"),
            Cell::new("Moderate"),
        ],
        vec![
            Cell::new("Green revenue share"),
            Cell::new("12%"),
            Cell::with_desc("38%", "EU taxonomy-aligned revenue"),
        ],
        vec![
            Cell::new("Governance score"),
            Cell::new("B"),
            Cell::with_desc("A-", "Independent sustainability committee"),
        ],
    ];

    TableModel {
        id: "scorecard-table",
        title: "ESG Scorecard".to_string(),
        headers,
        rows,
        config: TableConfig::static_display().with_ordering(),
    }
}

/// Side-by-side income statement, derived from the chart series constants.
pub fn income_table() -> TableModel {
    let headers = vec![
        "Line Item".to_string(),
        "Traditional (USD m)".to_string(),
        "Sustainable (USD m)".to_string(),
    ];

    let rows = INCOME_CATEGORIES
        .iter()
        .zip(TRADITIONAL_INCOME.iter().zip(SUSTAINABLE_INCOME.iter()))
        .map(|(item, (trad, sust))| {
            vec![
                Cell::new(*item),
                Cell::new(format!("{:.0}", trad)),
                Cell::new(format!("{:.0}", sust)),
            ]
        })
        .collect();

    TableModel {
        id: "dual-table",
        title: "Income Statement Comparison".to_string(),
        headers,
        rows,
        config: TableConfig::static_display(),
    }
}

/// Carbon ledger, derived from the chart series constants.
pub fn carbon_table() -> TableModel {
    let headers = vec![
        "Year".to_string(),
        "Emissions (Mt CO\u{2082})".to_string(),
        "Budget Remaining (Mt)".to_string(),
    ];

    let rows = CARBON_YEARS
        .iter()
        .zip(EMISSIONS_MT.iter().zip(CARBON_BUDGET_MT.iter()))
        .map(|(year, (emissions, budget))| {
            vec![
                Cell::new(*year),
                Cell::new(format!("{:.1}", emissions)),
                Cell::new(format!("{:.1}", budget)),
            ]
        })
        .collect();

    TableModel {
        id: "carbon-table",
        title: "Carbon Ledger".to_string(),
        headers,
        rows,
        config: TableConfig::static_display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_present() {
        let cell = Cell::with_desc("High", "High risk");
        assert_eq!(cell.tooltip(), Some("High risk"));
    }

    #[test]
    fn test_tooltip_absent_or_empty() {
        assert_eq!(Cell::new("High").tooltip(), None);
        assert_eq!(Cell::with_desc("High", "").tooltip(), None);
    }

    #[test]
    fn test_numeric_cells() {
        assert_eq!(Cell::new("6225").numeric(), Some(6225.0));
        assert_eq!(Cell::new("12%").numeric(), Some(12.0));
        assert_eq!(Cell::new("High").numeric(), None);
    }

    #[test]
    fn test_only_scorecard_sorts() {
        assert!(scorecard_table().config.ordering);
        assert!(!income_table().config.ordering);
        assert!(!carbon_table().config.ordering);
    }

    #[test]
    fn test_static_display_flags() {
        for table in [scorecard_table(), income_table(), carbon_table()] {
            assert!(!table.config.paging);
            assert!(!table.config.info);
            assert!(!table.config.searching);
        }
    }

    #[test]
    fn test_rows_match_headers() {
        for table in [scorecard_table(), income_table(), carbon_table()] {
            assert!(!table.rows.is_empty());
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len());
            }
        }
    }

    #[test]
    fn test_derived_tables_mirror_series() {
        let income = income_table();
        assert_eq!(income.rows.len(), 3);
        assert_eq!(income.rows[0][1].text, "6225");
        assert_eq!(income.rows[2][2].text, "3121");

        let carbon = carbon_table();
        assert_eq!(carbon.rows.len(), 8);
        assert_eq!(carbon.rows[0][0].text, "2020");
        assert_eq!(carbon.rows[7][1].text, "0.0");
        assert_eq!(carbon.rows[0][2].text, "50.0");
    }

    #[test]
    fn test_scorecard_has_high_risk_tooltip() {
        let table = scorecard_table();
        assert_eq!(table.rows[0][1].tooltip(), Some("High risk"));
        assert_eq!(table.rows[0][0].tooltip(), None);
    }
}
