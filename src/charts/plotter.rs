//! Chart Plotter Module
//! Renders a `ChartSpec` interactively with egui_plot: grouped bars, filled
//! lines, categorical x axes, and the per-series tooltip formats.

use crate::charts::spec::{ChartSpec, SeriesKind, TooltipFormat, YAxis};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

/// Renders chart specs onto an egui Ui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Per-series bar width and x offsets for grouped bars. The group spans
    /// 0.8 plot units centered on the category index.
    pub fn bar_layout(bar_count: usize) -> (f64, Vec<f64>) {
        let count = bar_count.max(1);
        let width = 0.8 / count as f64;
        let offsets = (0..count)
            .map(|j| (j as f64 - (count as f64 - 1.0) / 2.0) * width)
            .collect();
        (width, offsets)
    }

    /// Draw a chart spec. Right-axis series are rescaled into left-axis plot
    /// space; their tooltips report the original values.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
        let n = spec.labels.len();
        let right_scale = spec.right_scale();
        let labels = spec.labels.clone();

        // Cursor-label lookup: series label -> (format, plot-space scale)
        let formats: Vec<(String, TooltipFormat, f64)> = spec
            .series
            .iter()
            .map(|s| {
                let scale = match s.axis {
                    YAxis::Right => right_scale,
                    YAxis::Left => 1.0,
                };
                (s.label.clone(), s.tooltip.clone(), scale)
            })
            .collect();

        let bar_count = spec
            .series
            .iter()
            .filter(|s| s.kind == SeriesKind::Bar)
            .count();
        let (bar_width, bar_offsets) = Self::bar_layout(bar_count);

        let mut plot = Plot::new(spec.id)
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(spec.x_axis.title.clone())
            .y_axis_label(spec.left_axis.title.clone())
            .include_x(-0.5)
            .include_x(n as f64 - 0.5)
            // One grid mark per category
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .label_formatter(move |name, value| {
                formats
                    .iter()
                    .find(|(label, _, _)| label == name)
                    .map(|(_, fmt, scale)| fmt.render(value.y / scale))
                    .unwrap_or_default()
            });

        if spec.left_axis.begin_at_zero {
            plot = plot.include_y(0.0);
        }

        plot.show(ui, |plot_ui| {
            let mut bar_idx = 0;
            for series in &spec.series {
                match series.kind {
                    SeriesKind::Bar => {
                        let offset = bar_offsets.get(bar_idx).copied().unwrap_or(0.0);
                        bar_idx += 1;

                        let bars: Vec<Bar> = series
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, &v)| {
                                Bar::new(i as f64 + offset, v)
                                    .width(bar_width * 0.9)
                                    .fill(series.color)
                            })
                            .collect();

                        let tooltip = series.tooltip.clone();
                        plot_ui.bar_chart(
                            BarChart::new(bars)
                                .color(series.color)
                                .name(series.label.clone())
                                .element_formatter(Box::new(move |bar, _chart| {
                                    tooltip.render(bar.value)
                                })),
                        );
                    }
                    SeriesKind::Line => {
                        let scale = match series.axis {
                            YAxis::Right => right_scale,
                            YAxis::Left => 1.0,
                        };
                        let points: PlotPoints = series
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, &v)| [i as f64, v * scale])
                            .collect();

                        let mut line = Line::new(points)
                            .color(series.color)
                            .width(2.0)
                            .name(series.label.clone());
                        if series.fill {
                            line = line.fill(0.0);
                        }
                        plot_ui.line(line);
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bar_layout_single_series_is_centered() {
        let (width, offsets) = ChartPlotter::bar_layout(1);
        assert_relative_eq!(width, 0.8, epsilon = 1e-12);
        assert_eq!(offsets, vec![0.0]);
    }

    #[test]
    fn test_bar_layout_two_series_is_symmetric() {
        let (width, offsets) = ChartPlotter::bar_layout(2);
        assert_relative_eq!(width, 0.4, epsilon = 1e-12);
        assert_relative_eq!(offsets[0], -0.2, epsilon = 1e-12);
        assert_relative_eq!(offsets[1], 0.2, epsilon = 1e-12);
        assert_relative_eq!(offsets.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bar_layout_group_stays_within_category() {
        for count in 1..=5 {
            let (width, offsets) = ChartPlotter::bar_layout(count);
            for offset in offsets {
                assert!(offset.abs() + width / 2.0 <= 0.4 + 1e-12);
            }
        }
    }
}
