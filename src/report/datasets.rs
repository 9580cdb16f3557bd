//! Report Datasets Module
//! Literal series that feed the income-statement and carbon charts and their
//! companion tables. Values are fixed report content, not derived data.

/// Income-statement categories shared by both scenarios.
pub const INCOME_CATEGORIES: [&str; 3] = ["Operating Profit", "Pre-tax Income", "Net Income"];

/// Traditional scenario, USD millions.
pub const TRADITIONAL_INCOME: [f64; 3] = [6225.0, 6006.0, 3751.0];

/// Sustainable scenario, USD millions.
pub const SUSTAINABLE_INCOME: [f64; 3] = [5228.0, 5010.0, 3121.0];

/// Carbon ledger year labels. Annual through 2025, then decade checkpoints;
/// the uneven spacing on the categorical axis is intentional.
pub const CARBON_YEARS: [&str; 8] = [
    "2020", "2021", "2022", "2023", "2024", "2025", "2030", "2040",
];

/// Annual emissions, megatonnes CO2.
pub const EMISSIONS_MT: [f64; 8] = [4.5, 4.4, 4.0, 3.6, 3.3, 3.0, 2.0, 0.0];

/// Remaining carbon budget, megatonnes.
pub const CARBON_BUDGET_MT: [f64; 8] = [50.0, 45.6, 41.6, 38.0, 34.7, 31.7, 20.0, 0.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_series_match_categories() {
        assert_eq!(TRADITIONAL_INCOME.len(), INCOME_CATEGORIES.len());
        assert_eq!(SUSTAINABLE_INCOME.len(), INCOME_CATEGORIES.len());
    }

    #[test]
    fn test_carbon_series_match_years() {
        assert_eq!(EMISSIONS_MT.len(), CARBON_YEARS.len());
        assert_eq!(CARBON_BUDGET_MT.len(), CARBON_YEARS.len());
    }

    #[test]
    fn test_emissions_strictly_decrease_to_zero() {
        for pair in EMISSIONS_MT.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(EMISSIONS_MT.last(), Some(&0.0));
    }

    #[test]
    fn test_budget_strictly_decreases_to_zero() {
        for pair in CARBON_BUDGET_MT.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(CARBON_BUDGET_MT.last(), Some(&0.0));
    }
}
