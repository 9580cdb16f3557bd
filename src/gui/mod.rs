//! GUI module - User interface components

mod app;
mod report_view;
mod table_view;

pub use app::SustainViewApp;
pub use report_view::ReportView;
pub use table_view::TableView;
