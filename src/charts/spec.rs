//! Chart Spec Module
//! Declarative chart configuration: labels, series, axis bindings, and
//! per-series tooltip formats. Renderers consume these specs; the specs
//! themselves know nothing about a drawing surface.

use crate::report::{
    BlendCurve, CARBON_BUDGET_MT, CARBON_YEARS, EMISSIONS_MT, INCOME_CATEGORIES,
    SUSTAINABLE_INCOME, TRADITIONAL_INCOME,
};
use egui::Color32;

/// Report palette.
pub const NAVY: Color32 = Color32::from_rgb(20, 55, 116);
pub const STEEL_BLUE: Color32 = Color32::from_rgb(0, 92, 151);
const NAVY_BAR: Color32 = Color32::from_rgba_premultiplied(14, 38, 81, 178);
const STEEL_BAR: Color32 = Color32::from_rgba_premultiplied(0, 64, 105, 178);

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Which value axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAxis {
    Left,
    Right,
}

/// Per-point tooltip template: `prefix + value + suffix`.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl TooltipFormat {
    pub fn new(prefix: &str, suffix: &str, decimals: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            decimals,
        }
    }

    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }
}

/// One dataset within a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
    pub color: Color32,
    /// Fill the area beneath a line series.
    pub fill: bool,
    pub axis: YAxis,
    pub tooltip: TooltipFormat,
}

/// Axis title and scale settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: String,
    pub begin_at_zero: bool,
}

impl AxisSpec {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            begin_at_zero: true,
        }
    }
}

/// A complete chart: categorical x labels plus one or more series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub x_axis: AxisSpec,
    pub left_axis: AxisSpec,
    /// Independent second value axis; series bound to `YAxis::Right` are
    /// rescaled into left-axis space for shared-plot rendering.
    pub right_axis: Option<AxisSpec>,
}

impl ChartSpec {
    pub fn series_named(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Largest value plotted against the given axis, floored at zero.
    pub fn max_on(&self, axis: YAxis) -> f64 {
        self.series
            .iter()
            .filter(|s| s.axis == axis)
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Factor mapping right-axis values into left-axis plot space.
    /// 1.0 when the chart has no right axis or a degenerate range.
    pub fn right_scale(&self) -> f64 {
        if self.right_axis.is_none() {
            return 1.0;
        }
        let left_max = self.max_on(YAxis::Left);
        let right_max = self.max_on(YAxis::Right);
        if left_max > 0.0 && right_max > 0.0 {
            left_max / right_max
        } else {
            1.0
        }
    }
}

/// SWACC blend curve: filled line over lambda, "r_eff: <v>%" tooltips.
pub fn swacc_chart() -> ChartSpec {
    let curve = BlendCurve::swacc();

    ChartSpec {
        id: "swacc-chart",
        title: "SWACC Blending: r_eff vs \u{3bb} (lambda)".to_string(),
        labels: curve.lambda_labels(),
        series: vec![Series {
            label: "Effective Discount Rate (r_eff)".to_string(),
            kind: SeriesKind::Line,
            values: curve.rates(),
            color: STEEL_BLUE,
            fill: true,
            axis: YAxis::Left,
            tooltip: TooltipFormat::new("r_eff: ", "%", 2),
        }],
        x_axis: AxisSpec::titled("\u{3bb} (Lambda) \u{2013} Weight on Sustainability"),
        left_axis: AxisSpec::titled("Discount Rate (%)"),
        right_axis: None,
    }
}

/// Grouped bars: traditional vs sustainable income statement.
pub fn income_chart() -> ChartSpec {
    ChartSpec {
        id: "income-chart",
        title: "Traditional vs Sustainable Income Statement (USD m)".to_string(),
        labels: INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        series: vec![
            Series {
                label: "Traditional".to_string(),
                kind: SeriesKind::Bar,
                values: TRADITIONAL_INCOME.to_vec(),
                color: NAVY_BAR,
                fill: false,
                axis: YAxis::Left,
                tooltip: TooltipFormat::new("Traditional: ", " USD m", 0),
            },
            Series {
                label: "Sustainable".to_string(),
                kind: SeriesKind::Bar,
                values: SUSTAINABLE_INCOME.to_vec(),
                color: STEEL_BAR,
                fill: false,
                axis: YAxis::Left,
                tooltip: TooltipFormat::new("Sustainable: ", " USD m", 0),
            },
        ],
        x_axis: AxisSpec::titled(""),
        left_axis: AxisSpec::titled("Amount (USD m)"),
        right_axis: None,
    }
}

/// Combination chart: emissions bars on the left axis, filled budget line on
/// an independent right axis, tooltips branching per series.
pub fn carbon_chart() -> ChartSpec {
    ChartSpec {
        id: "carbon-chart",
        title: "Carbon Budget and Emissions Over Time".to_string(),
        labels: CARBON_YEARS.iter().map(|s| s.to_string()).collect(),
        series: vec![
            Series {
                label: "Emissions (Mt CO\u{2082})".to_string(),
                kind: SeriesKind::Bar,
                values: EMISSIONS_MT.to_vec(),
                color: NAVY_BAR,
                fill: false,
                axis: YAxis::Left,
                tooltip: TooltipFormat::new("Emissions: ", " Mt CO\u{2082}", 1),
            },
            Series {
                label: "Carbon Budget Remaining (Mt)".to_string(),
                kind: SeriesKind::Line,
                values: CARBON_BUDGET_MT.to_vec(),
                color: STEEL_BLUE,
                fill: true,
                axis: YAxis::Right,
                tooltip: TooltipFormat::new("Budget Remaining: ", " Mt", 1),
            },
        ],
        x_axis: AxisSpec::titled("Year"),
        left_axis: AxisSpec::titled("Emissions (Mt CO\u{2082})"),
        right_axis: Some(AxisSpec::titled("Carbon Budget Remaining (Mt)")),
    }
}

/// All three report charts, in display order.
pub fn report_charts() -> Vec<ChartSpec> {
    vec![swacc_chart(), income_chart(), carbon_chart()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_swacc_tooltip_format() {
        let spec = swacc_chart();
        let fmt = &spec.series[0].tooltip;
        assert_eq!(fmt.render(10.0), "r_eff: 10.00%");
        assert_eq!(fmt.render(8.6), "r_eff: 8.60%");
        assert_eq!(fmt.render(3.0), "r_eff: 3.00%");
    }

    #[test]
    fn test_carbon_tooltips_branch_per_series() {
        let spec = carbon_chart();
        let emissions = spec.series_named("Emissions (Mt CO\u{2082})").unwrap();
        let budget = spec.series_named("Carbon Budget Remaining (Mt)").unwrap();
        assert_eq!(emissions.tooltip.render(4.5), "Emissions: 4.5 Mt CO\u{2082}");
        assert_eq!(budget.tooltip.render(45.6), "Budget Remaining: 45.6 Mt");
    }

    #[test]
    fn test_series_lengths_match_labels() {
        for spec in report_charts() {
            for series in &spec.series {
                assert_eq!(series.values.len(), spec.labels.len());
            }
        }
    }

    #[test]
    fn test_swacc_is_single_filled_line() {
        let spec = swacc_chart();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].kind, SeriesKind::Line);
        assert!(spec.series[0].fill);
        assert_eq!(spec.labels.len(), 11);
        assert!(spec.right_axis.is_none());
    }

    #[test]
    fn test_carbon_axis_bindings() {
        let spec = carbon_chart();
        assert!(spec.right_axis.is_some());
        assert_eq!(spec.series[0].axis, YAxis::Left);
        assert_eq!(spec.series[1].axis, YAxis::Right);
    }

    #[test]
    fn test_right_scale_maps_budget_into_emissions_space() {
        let spec = carbon_chart();
        // left max 4.5, right max 50.0
        assert_relative_eq!(spec.right_scale(), 4.5 / 50.0, epsilon = 1e-12);
        // single-axis charts are unscaled
        assert_relative_eq!(swacc_chart().right_scale(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(income_chart().right_scale(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_builders_are_pure() {
        assert_eq!(swacc_chart(), swacc_chart());
        assert_eq!(income_chart(), income_chart());
        assert_eq!(carbon_chart(), carbon_chart());
    }
}
