//! Chart Viewer Widget
//! Owns the single chart currently on screen and disposes it before each new one.

use crate::charts::{Chart, ChartPlotter, StaticChartRenderer};
use anyhow::Context as _;
use egui::{ColorImage, RichText, TextureHandle, TextureOptions};
use std::path::PathBuf;

const CHART_HEIGHT: f32 = 480.0;

/// How the current chart is put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSurface {
    /// Drawn every frame with egui_plot (zoom/pan enabled).
    Interactive,
    /// Rendered once with plotters and shown as a texture.
    Static,
}

/// Display area holding at most one chart.
pub struct ChartViewer {
    surface: ChartSurface,
    image_size: [u32; 2],
    current: Option<Chart>,
    texture: Option<TextureHandle>,
    render_error: Option<String>,
}

impl ChartViewer {
    pub fn new(surface: ChartSurface, image_size: [u32; 2]) -> Self {
        Self {
            surface,
            image_size,
            current: None,
            texture: None,
            render_error: None,
        }
    }

    /// Replace the current chart. The previous chart and its texture are dropped first.
    pub fn set_chart(&mut self, chart: Chart) {
        self.clear();
        self.current = Some(chart);
    }

    /// Remove the current chart.
    pub fn clear(&mut self) {
        self.current = None;
        self.texture = None;
        self.render_error = None;
    }

    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }

    /// Number of charts on screen: always 0 or 1.
    pub fn chart_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let Some(chart) = &self.current else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Chart").size(20.0));
            });
            return;
        };

        match self.surface {
            ChartSurface::Interactive => ChartPlotter::draw_chart(ui, chart, CHART_HEIGHT),
            ChartSurface::Static => {
                if self.texture.is_none() && self.render_error.is_none() {
                    let [w, h] = self.image_size;
                    match StaticChartRenderer::render_rgb(chart, w, h) {
                        Ok(buf) => {
                            let image = ColorImage::from_rgb([w as usize, h as usize], &buf);
                            self.texture =
                                Some(ctx.load_texture("current_chart", image, TextureOptions::LINEAR));
                        }
                        Err(e) => {
                            log::error!("Failed to render {}: {}", chart.title(), e);
                            self.render_error = Some(e.to_string());
                        }
                    }
                }

                if let Some(texture) = &self.texture {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                } else if let Some(err) = &self.render_error {
                    ui.colored_label(egui::Color32::from_rgb(220, 53, 69), err);
                }
            }
        }
    }

    /// Ask for a destination and save the current chart as PNG.
    ///
    /// Returns `Ok(None)` when there is no chart or the dialog is cancelled.
    pub fn export_png(&self) -> anyhow::Result<Option<PathBuf>> {
        let Some(chart) = &self.current else {
            return Ok(None);
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", chart.file_stem()))
            .save_file()
        else {
            return Ok(None);
        };

        let [w, h] = self.image_size;
        StaticChartRenderer::save_png(chart, &path, w, h)
            .with_context(|| format!("exporting chart to {}", path.display()))?;
        log::info!("Exported {} to {}", chart.title(), path.display());

        if let Err(e) = open::that(&path) {
            log::warn!("Could not open {}: {}", path.display(), e);
        }
        Ok(Some(path))
    }
}
