//! Report Exporter Module
//! Writes the report to a directory: one PNG per chart plus a JSON snapshot
//! of every dataset. Chart renders are isolated from one another; a failed
//! render is recorded in the summary and the remaining files are still
//! written.

use crate::charts::StaticChartRenderer;
use crate::report::{BlendCurve, ReportContent, TableModel};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EXPORT_WIDTH: u32 = 1200;
const EXPORT_HEIGHT: u32 = 700;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// What an export run produced, per file.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    /// (chart id, error) pairs for renders that failed.
    pub failures: Vec<(String, String)>,
}

impl ExportSummary {
    pub fn describe(&self) -> String {
        if self.failures.is_empty() {
            format!("Exported {} files", self.written.len())
        } else {
            format!(
                "Exported {} files, {} charts failed",
                self.written.len(),
                self.failures.len()
            )
        }
    }
}

#[derive(Serialize)]
struct SeriesSnapshot<'a> {
    label: &'a str,
    values: &'a [f64],
}

#[derive(Serialize)]
struct ChartSnapshot<'a> {
    id: &'a str,
    title: &'a str,
    labels: &'a [String],
    series: Vec<SeriesSnapshot<'a>>,
}

#[derive(Serialize)]
struct ReportSnapshot<'a> {
    tables: &'a [TableModel],
    charts: Vec<ChartSnapshot<'a>>,
    blend: &'a BlendCurve,
}

/// One-shot report export.
pub struct ReportExporter;

impl ReportExporter {
    /// Export chart PNGs and the data snapshot into `dir`.
    pub fn export_all(content: &ReportContent, dir: &Path) -> Result<ExportSummary, ExportError> {
        fs::create_dir_all(dir)?;
        let mut summary = ExportSummary::default();

        for spec in &content.charts {
            let path = dir.join(format!("{}.png", spec.id));
            let result = StaticChartRenderer::render_to_bytes(spec, EXPORT_WIDTH, EXPORT_HEIGHT)
                .map_err(|e| e.to_string())
                .and_then(|png| fs::write(&path, png).map_err(|e| e.to_string()));
            match result {
                Ok(()) => summary.written.push(path),
                Err(e) => summary.failures.push((spec.id.to_string(), e)),
            }
        }

        let json_path = dir.join("report-data.json");
        fs::write(&json_path, serde_json::to_vec_pretty(&Self::snapshot(content))?)?;
        summary.written.push(json_path);

        Ok(summary)
    }

    fn snapshot(content: &ReportContent) -> ReportSnapshot<'_> {
        ReportSnapshot {
            tables: &content.tables,
            charts: content
                .charts
                .iter()
                .map(|spec| ChartSnapshot {
                    id: spec.id,
                    title: &spec.title,
                    labels: &spec.labels,
                    series: spec
                        .series
                        .iter()
                        .map(|s| SeriesSnapshot {
                            label: &s.label,
                            values: &s.values,
                        })
                        .collect(),
                })
                .collect(),
            blend: &content.blend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let content = ReportContent::build();
        let value = serde_json::to_value(ReportExporter::snapshot(&content)).unwrap();

        assert_eq!(value["tables"].as_array().unwrap().len(), 3);
        assert_eq!(value["charts"].as_array().unwrap().len(), 3);
        assert_eq!(value["blend"]["points"].as_array().unwrap().len(), 11);

        let swacc = &value["charts"][0];
        assert_eq!(swacc["id"], "swacc-chart");
        assert_eq!(swacc["labels"].as_array().unwrap().len(), 11);

        let carbon = &value["charts"][2];
        assert_eq!(carbon["series"].as_array().unwrap().len(), 2);
        assert_eq!(carbon["series"][1]["values"][0], 50.0);
    }

    #[test]
    fn test_export_writes_snapshot_even_if_renders_fail() {
        let dir = std::env::temp_dir().join("sustainview-export-test");
        let _ = fs::remove_dir_all(&dir);

        let content = ReportContent::build();
        let summary = ReportExporter::export_all(&content, &dir).unwrap();

        // The JSON snapshot is always written; chart renders may fail on
        // font-less machines but must be isolated per chart.
        let json_path = dir.join("report-data.json");
        assert!(json_path.exists());
        assert!(summary.written.contains(&json_path));
        assert_eq!(summary.written.len() + summary.failures.len(), 4);

        let parsed: serde_json::Value =
            serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
        assert!(parsed["tables"].is_array());

        let _ = fs::remove_dir_all(&dir);
    }
}
