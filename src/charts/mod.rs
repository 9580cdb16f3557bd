//! Charts module - Chart specs and rendering

mod plotter;
mod renderer;
mod spec;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use spec::{
    carbon_chart, income_chart, report_charts, swacc_chart, AxisSpec, ChartSpec, Series,
    SeriesKind, TooltipFormat, YAxis, NAVY, STEEL_BLUE,
};
