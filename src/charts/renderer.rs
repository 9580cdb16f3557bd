//! Static Chart Renderer
//! Renders a `ChartSpec` to PNG bytes in memory with plotters, for report
//! export. Mirrors the interactive plotter's layout: grouped bars, filled
//! lines, categorical x axis, and a secondary y axis when the spec has one.

use crate::charts::plotter::ChartPlotter;
use crate::charts::spec::{ChartSpec, SeriesKind, YAxis, NAVY};
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
    #[error("pixel buffer size mismatch")]
    BufferSize,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn draw_err<E: std::fmt::Debug>(e: E) -> RenderError {
    RenderError::Draw(format!("{:?}", e))
}

fn to_rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

/// Renders chart specs to standalone PNG images.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a chart to PNG bytes without touching the filesystem.
    pub fn render_to_bytes(
        spec: &ChartSpec,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buf = vec![0u8; (width * height * 3) as usize];
        Self::draw_into(spec, &mut buf, width, height)?;

        let img: image::RgbImage =
            image::ImageBuffer::from_raw(width, height, buf).ok_or(RenderError::BufferSize)?;
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(png)
    }

    fn draw_into(
        spec: &ChartSpec,
        buf: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let n = spec.labels.len();
        let x_range = -0.5f64..(n as f64 - 0.5);
        let left_max = (spec.max_on(YAxis::Left) * 1.1).max(1.0);
        let right_max = if spec.right_axis.is_some() {
            (spec.max_on(YAxis::Right) * 1.1).max(1.0)
        } else {
            left_max
        };

        let title_color = to_rgb(NAVY);
        let title_style = ("sans-serif", 22).into_font().color(&title_color);

        // The secondary coordinate is always present to keep one code path;
        // its axis is only drawn when the spec carries a right axis.
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, title_style)
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .right_y_label_area_size(if spec.right_axis.is_some() { 56 } else { 0 })
            .build_cartesian_2d(x_range.clone(), 0.0..left_max)
            .map_err(draw_err)?
            .set_secondary_coord(x_range, 0.0..right_max);

        let labels = &spec.labels;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| {
                let idx = x.round();
                if idx >= 0.0 && (x - idx).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .x_desc(spec.x_axis.title.as_str())
            .y_desc(spec.left_axis.title.as_str())
            .label_style(("sans-serif", 13))
            .draw()
            .map_err(draw_err)?;

        if let Some(right) = &spec.right_axis {
            chart
                .configure_secondary_axes()
                .y_desc(right.title.as_str())
                .label_style(("sans-serif", 13))
                .draw()
                .map_err(draw_err)?;
        }

        let bar_count = spec
            .series
            .iter()
            .filter(|s| s.kind == SeriesKind::Bar)
            .count();
        let (bar_width, bar_offsets) = ChartPlotter::bar_layout(bar_count);
        let mut bar_idx = 0;

        for series in &spec.series {
            let color = to_rgb(series.color);
            match series.kind {
                SeriesKind::Bar => {
                    let offset = bar_offsets.get(bar_idx).copied().unwrap_or(0.0);
                    bar_idx += 1;
                    let half = bar_width * 0.45;

                    chart
                        .draw_series(series.values.iter().enumerate().map(|(i, &v)| {
                            let x = i as f64 + offset;
                            Rectangle::new([(x - half, 0.0), (x + half, v)], color.filled())
                        }))
                        .map_err(draw_err)?
                        .label(series.label.clone())
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                        });
                }
                SeriesKind::Line => {
                    let points: Vec<(f64, f64)> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| (i as f64, v))
                        .collect();

                    let anno = match (series.axis, series.fill) {
                        (YAxis::Right, true) => chart.draw_secondary_series(
                            AreaSeries::new(points, 0.0, color.mix(0.2))
                                .border_style(color.stroke_width(2)),
                        ),
                        (YAxis::Right, false) => chart
                            .draw_secondary_series(LineSeries::new(points, color.stroke_width(2))),
                        (YAxis::Left, true) => chart.draw_series(
                            AreaSeries::new(points, 0.0, color.mix(0.2))
                                .border_style(color.stroke_width(2)),
                        ),
                        (YAxis::Left, false) => {
                            chart.draw_series(LineSeries::new(points, color.stroke_width(2)))
                        }
                    }
                    .map_err(draw_err)?;

                    anno.label(series.label.clone()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2))
                    });
                }
            }
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .label_font(("sans-serif", 13))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::report_charts;

    #[test]
    fn test_render_all_report_charts_to_png() {
        for spec in report_charts() {
            match StaticChartRenderer::render_to_bytes(&spec, 800, 500) {
                Ok(png) => {
                    // PNG signature
                    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
                }
                // Headless environments may have no system fonts to rasterize
                // captions with; any other drawing failure is a real bug.
                Err(RenderError::Draw(msg)) => {
                    assert!(msg.to_lowercase().contains("font"), "{}: {}", spec.id, msg);
                }
                Err(other) => panic!("{}: {}", spec.id, other),
            }
        }
    }
}
