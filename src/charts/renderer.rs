//! Static Chart Renderer
//! Draws chart models with plotters into an RGB buffer.
//!
//! Used for the per-student bar chart (rotated name labels) and for
//! "Export Chart" in both applications.

use crate::charts::model::{coolwarm, Chart, RegressionResult, StudentBars};
use crate::stats::{CorrelationMatrix, Distribution};
use image::{ImageFormat, RgbImage};
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

const FONT: &str = "sans-serif";
const HIST_COLOR: RGBColor = RGBColor(31, 119, 180);
const SCATTER_COLOR: RGBColor = RGBColor(44, 160, 44);
const BAR_COLOR: RGBColor = RGBColor(0, 0, 255);

/// Largest width or height accepted for a rendered image.
pub const MAX_IMAGE_SIDE: u32 = 8192;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Image size {0}x{1} is not supported")]
    Buffer(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render into a packed RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(chart: &Chart, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width > MAX_IMAGE_SIDE || height > MAX_IMAGE_SIDE {
            return Err(RenderError::Buffer(width, height));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3))
            .filter(|&len| len > 0)
            .ok_or(RenderError::Buffer(width, height))?;
        let mut buf = vec![0u8; len];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            match chart {
                Chart::GradeDistribution(dist) => Self::draw_distribution(&root, chart, dist)?,
                Chart::Correlation(matrix) => Self::draw_heatmap(&root, chart, matrix)?,
                Chart::Regression(result) => Self::draw_scatter(&root, chart, result)?,
                Chart::StudentBars(bars) => Self::draw_bars(&root, chart, bars)?,
            }

            root.present().map_err(draw_err)?;
        }
        Ok(buf)
    }

    /// Render and encode as PNG bytes.
    pub fn render_png(chart: &Chart, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let buf = Self::render_rgb(chart, width, height)?;
        let img = RgbImage::from_raw(width, height, buf).ok_or(RenderError::Buffer(width, height))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn save_png(
        chart: &Chart,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let bytes = Self::render_png(chart, width, height)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw_distribution<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &Chart,
        dist: &Distribution,
    ) -> Result<(), RenderError> {
        let (x_min, x_max) = match (dist.bins.first(), dist.bins.last()) {
            (Some(first), Some(last))
                if first.start.is_finite() && last.end.is_finite() && first.start < last.end =>
            {
                (first.start, last.end)
            }
            _ => (0.0, 1.0),
        };
        let peak_density = dist
            .density
            .iter()
            .map(|p| p[1])
            .filter(|d| d.is_finite())
            .fold(0.0, f64::max);
        let y_max = headroom((dist.max_count() as f64).max(peak_density).max(1.0));

        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title(), (FONT, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(draw_err)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label())
            .y_desc(chart.y_label())
            .draw()
            .map_err(draw_err)?;

        ctx.draw_series(dist.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                HIST_COLOR.mix(0.5).filled(),
            )
        }))
        .map_err(draw_err)?;

        ctx.draw_series(dist.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                HIST_COLOR.stroke_width(1),
            )
        }))
        .map_err(draw_err)?;

        if !dist.density.is_empty() {
            ctx.draw_series(LineSeries::new(
                dist.density
                    .iter()
                    .filter(|p| p[0].is_finite() && p[1].is_finite())
                    .map(|p| (p[0], p[1])),
                HIST_COLOR.stroke_width(2),
            ))
            .map_err(draw_err)?;
        }

        Ok(())
    }

    fn draw_heatmap<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &Chart,
        matrix: &CorrelationMatrix,
    ) -> Result<(), RenderError> {
        let k = matrix.size();
        let labels = &matrix.labels;

        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title(), (FONT, 22))
            .margin(15)
            .x_label_area_size(90)
            .y_label_area_size(110)
            .build_cartesian_2d((0..k).into_segmented(), (0..k).into_segmented())
            .map_err(draw_err)?;

        // Row 0 is drawn at the top.
        let x_fmt = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        let y_fmt = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(r) if *r < k => labels[k - 1 - *r].clone(),
            _ => String::new(),
        };

        ctx.configure_mesh()
            .disable_mesh()
            .x_labels(k)
            .y_labels(k)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .x_label_style((FONT, 13).into_font().transform(FontTransform::Rotate90))
            .y_label_style((FONT, 13))
            .draw()
            .map_err(draw_err)?;

        let mut cells = Vec::with_capacity(k * k);
        for row in 0..k {
            for col in 0..k {
                cells.push((row, col, matrix.get(row, col)));
            }
        }

        ctx.draw_series(cells.iter().map(|&(row, col, value)| {
            let r = k - 1 - row;
            let [red, green, blue] = coolwarm(value);
            Rectangle::new(
                [
                    (SegmentValue::Exact(col), SegmentValue::Exact(r)),
                    (SegmentValue::Exact(col + 1), SegmentValue::Exact(r + 1)),
                ],
                RGBColor(red, green, blue).filled(),
            )
        }))
        .map_err(draw_err)?;

        let centered = Pos::new(HPos::Center, VPos::Center);
        ctx.draw_series(cells.iter().map(|&(row, col, value)| {
            let r = k - 1 - row;
            let color = if value.abs() > 0.6 { &WHITE } else { &BLACK };
            Text::new(
                CorrelationMatrix::format_cell(value),
                (SegmentValue::CenterOf(col), SegmentValue::CenterOf(r)),
                (FONT, 14).into_font().color(color).pos(centered),
            )
        }))
        .map_err(draw_err)?;

        Ok(())
    }

    fn draw_scatter<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &Chart,
        result: &RegressionResult,
    ) -> Result<(), RenderError> {
        let (x_min, x_max) = padded_range(&result.actual);
        let (y_min, y_max) = padded_range(&result.predicted);

        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title(), (FONT, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(draw_err)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label())
            .y_desc(chart.y_label())
            .draw()
            .map_err(draw_err)?;

        ctx.draw_series(
            result
                .points()
                .into_iter()
                .filter(|p| p[0].is_finite() && p[1].is_finite())
                .map(|p| Circle::new((p[0], p[1]), 5, SCATTER_COLOR.filled())),
        )
        .map_err(draw_err)?;

        Ok(())
    }

    fn draw_bars<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &Chart,
        bars: &StudentBars,
    ) -> Result<(), RenderError> {
        let n = bars.names.len().max(1);
        let present: Vec<f64> = bars
            .values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let y_min = present.iter().copied().fold(0.0, f64::min);
        let y_max = present.iter().copied().fold(0.0, f64::max);
        let y_max = if y_max > 0.0 { headroom(y_max) } else { 1.0 };
        let y_min = headroom(y_min);

        let names = &bars.names;
        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title(), (FONT, 22))
            .margin(15)
            .x_label_area_size(110)
            .y_label_area_size(55)
            .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)
            .map_err(draw_err)?;

        let x_fmt = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&x_fmt)
            .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate90))
            .x_desc(chart.x_label())
            .y_desc(chart.y_label())
            .draw()
            .map_err(draw_err)?;

        ctx.draw_series(bars.values.iter().enumerate().filter_map(|(i, v)| {
            v.filter(|value| value.is_finite()).map(|value| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), value),
                    ],
                    BAR_COLOR.filled(),
                );
                bar.set_margin(0, 0, 3, 3);
                bar
            })
        }))
        .map_err(draw_err)?;

        Ok(())
    }
}

/// Range of the finite values padded by 5% on each side; unit range around a constant.
pub fn padded_range(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let min = finite.clone().fold(f64::INFINITY, f64::min);
    let max = finite.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if min == max {
        (min.abs() * 0.05).max(1.0)
    } else {
        (max - min) * 0.05
    };
    let (lo, hi) = (min - pad, max + pad);
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (min, max)
    }
}

/// Scale an axis bound by 10%, keeping it finite.
fn headroom(bound: f64) -> f64 {
    let scaled = bound * 1.1;
    if scaled.is_finite() {
        scaled
    } else {
        bound
    }
}
