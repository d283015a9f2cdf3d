//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::charts::model::{coolwarm, Chart, RegressionResult, StudentBars};
use crate::stats::{CorrelationMatrix, Distribution};
use egui::{Color32, RichText};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

pub const HIST_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue
pub const SCATTER_COLOR: Color32 = Color32::from_rgb(44, 160, 44); // Green
pub const BAR_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

/// Creates interactive charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw any chart model.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &Chart, height: f32) {
        ui.label(RichText::new(chart.title()).size(16.0).strong());
        ui.add_space(6.0);

        match chart {
            Chart::GradeDistribution(dist) => Self::draw_distribution(ui, chart, dist, height),
            Chart::Correlation(matrix) => Self::draw_heatmap(ui, matrix, height),
            Chart::Regression(result) => Self::draw_scatter(ui, chart, result, height),
            Chart::StudentBars(bars) => Self::draw_bars(ui, chart, bars, height),
        }
    }

    /// Histogram bars with the density curve on top.
    fn draw_distribution(ui: &mut egui::Ui, chart: &Chart, dist: &Distribution, height: f32) {
        let bars: Vec<Bar> = dist
            .bins
            .iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.count as f64)
                    .width(bin.width())
                    .name(format!("{:.1} - {:.1}", bin.start, bin.end))
            })
            .collect();

        Plot::new(format!("hist_{}", dist.column))
            .height(height)
            .x_axis_label(chart.x_label())
            .y_axis_label(chart.y_label())
            .include_y(0.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(HIST_COLOR)
                        .name(format!("{} (n = {})", dist.column, dist.sample_size)),
                );

                if !dist.density.is_empty() {
                    let points: PlotPoints = dist.density.iter().copied().collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(HIST_COLOR)
                            .width(2.0)
                            .name("Density"),
                    );
                }
            });
    }

    /// Annotated heatmap. Row 0 is drawn at the top.
    fn draw_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix, height: f32) {
        let k = matrix.size();
        let x_labels = matrix.labels.clone();
        let y_labels = matrix.labels.clone();

        let label_marks = move |_input: egui_plot::GridInput| -> Vec<GridMark> {
            (0..k)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        };

        Plot::new("correlation_heatmap")
            .height(height)
            .data_aspect(1.0)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_grid_spacer(label_marks.clone())
            .y_grid_spacer(label_marks)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx as usize) < x_labels.len() {
                    x_labels[idx as usize].clone()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx as usize) < k {
                    y_labels[k - 1 - idx as usize].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for row in 0..k {
                    let y = (k - 1 - row) as f64;
                    for col in 0..k {
                        let x = col as f64;
                        let value = matrix.get(row, col);
                        let [r, g, b] = coolwarm(value);

                        let cell = PlotPoints::new(vec![
                            [x - 0.5, y - 0.5],
                            [x + 0.5, y - 0.5],
                            [x + 0.5, y + 0.5],
                            [x - 0.5, y + 0.5],
                        ]);
                        plot_ui.polygon(
                            Polygon::new(cell)
                                .fill_color(Color32::from_rgb(r, g, b))
                                .stroke(egui::Stroke::new(1.0, Color32::WHITE)),
                        );

                        let text_color = if value.abs() > 0.6 {
                            Color32::WHITE
                        } else {
                            Color32::BLACK
                        };
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(x, y),
                                RichText::new(CorrelationMatrix::format_cell(value)).size(12.0),
                            )
                            .color(text_color),
                        );
                    }
                }
            });
    }

    fn draw_scatter(ui: &mut egui::Ui, chart: &Chart, result: &RegressionResult, height: f32) {
        let points: PlotPoints = result.points().into_iter().collect();

        Plot::new("regression_scatter")
            .height(height)
            .x_axis_label(chart.x_label())
            .y_axis_label(chart.y_label())
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(4.0)
                        .color(SCATTER_COLOR)
                        .name("Test rows"),
                );
            });
    }

    fn draw_bars(ui: &mut egui::Ui, chart: &Chart, bars: &StudentBars, height: f32) {
        let names = bars.names.clone();
        let elems: Vec<Bar> = bars
            .values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                v.map(|value| {
                    Bar::new(i as f64, value)
                        .width(0.8)
                        .name(bars.names.get(i).cloned().unwrap_or_default())
                })
            })
            .collect();

        Plot::new(format!("bars_{}", bars.column))
            .height(height)
            .x_axis_label(chart.x_label())
            .y_axis_label(chart.y_label())
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < names.len() {
                    names[idx as usize].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(elems).color(BAR_COLOR));
            });
    }
}
