//! Static Chart Renderer
//! Rasterizes a whole figure with plotters, the way the viewer lays it out.
//!
//! Layout per panel:
//! 1. Title centred above the plot area
//! 2. Axes with tick labels on the left and bottom
//! 3. Optional axis labels outside the tick labels
//! 4. Series drawn per chart kind: polyline, filled markers or bars from zero

use crate::charts::axes::{format_tick, nice_ticks, AxisRange, DataLimits, Ticks, TICK_TARGET};
use crate::charts::layout::{Decorations, FigureLayout, PixelRect, TextMetrics};
use crate::config::ViewerSettings;
use crate::figure::{ChartKind, ChartPanel, Figure, FigureError, Rgb};
use image::{ImageFormat, RgbImage};
use plotters::coord::combinators::{BindKeyPoints, WithKeyPoints};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

const FONT_FAMILY: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid figure: {0}")]
    Figure(#[from] FigureError),
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("Pixel buffer does not match a {0}x{1} image")]
    BufferSize(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Axis over `range` whose ticks sit exactly at `ticks.values`.
fn tick_axis(range: AxisRange, ticks: &Ticks) -> WithKeyPoints<RangedCoordf64> {
    (range.min..range.max).with_key_points(ticks.values.clone())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the figure into a packed RGB8 buffer of `settings.pixel_size()`.
    pub fn render_rgb(figure: &Figure, settings: &ViewerSettings) -> Result<Vec<u8>, RenderError> {
        figure.validate()?;

        let (width, height) = settings.pixel_size();
        let text = TextMetrics::from_settings(settings);
        let layout = FigureLayout::compute(figure, (width as f64, height as f64), &text);

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&to_rgb(settings.background))
                .map_err(drawing_err)?;

            for ((row, col), panel) in figure.panels() {
                let idx = row * figure.cols() + col;
                Self::draw_panel(
                    &root,
                    panel,
                    &layout.plot_areas[idx],
                    &layout.panel_areas[idx],
                    &text,
                    settings,
                )?;
            }

            root.present().map_err(drawing_err)?;
        }

        debug!(width, height, panels = figure.panel_count(), "rendered figure");
        Ok(buffer)
    }

    /// Render the figure as PNG bytes.
    pub fn render_png(figure: &Figure, settings: &ViewerSettings) -> Result<Vec<u8>, RenderError> {
        let (width, height) = settings.pixel_size();
        let buffer = Self::render_rgb(figure, settings)?;
        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::BufferSize(width, height))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the figure and write it to `path` as PNG.
    pub fn save_png(
        figure: &Figure,
        settings: &ViewerSettings,
        path: &Path,
    ) -> Result<(), RenderError> {
        let bytes = Self::render_png(figure, settings)?;
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "saved figure");
        Ok(())
    }

    fn draw_panel(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        panel: &ChartPanel,
        plot_area: &PixelRect,
        panel_area: &PixelRect,
        text: &TextMetrics,
        settings: &ViewerSettings,
    ) -> Result<(), RenderError> {
        let area = root.clone().shrink(
            (panel_area.x.round() as u32, panel_area.y.round() as u32),
            (
                panel_area.width.round().max(1.0) as u32,
                panel_area.height.round().max(1.0) as u32,
            ),
        );

        // decorations actually available after clipping to the figure
        let deco = Decorations {
            left: plot_area.x - panel_area.x,
            right: panel_area.right() - plot_area.right(),
            top: plot_area.y - panel_area.y,
            bottom: panel_area.bottom() - plot_area.bottom(),
        };

        let limits = DataLimits::of_panel(panel);
        let x_ticks = nice_ticks(limits.x, TICK_TARGET);
        let y_ticks = nice_ticks(limits.y, TICK_TARGET);
        let x_fmt = |v: &f64| format_tick(*v, x_ticks.step);
        let y_fmt = |v: &f64| format_tick(*v, y_ticks.step);

        let mut builder = ChartBuilder::on(&area);
        builder
            .margin_right(deco.right.max(0.0).round() as u32)
            .x_label_area_size(deco.bottom.max(0.0).round() as u32)
            .y_label_area_size(deco.left.max(0.0).round() as u32);
        if panel.title.is_empty() {
            builder.margin_top(deco.top.max(0.0).round() as u32);
        } else {
            builder.caption(&panel.title, (FONT_FAMILY, text.title_px).into_font());
        }

        // same ticks the layout measured
        let mut chart = builder
            .build_cartesian_2d(
                tick_axis(limits.x, &x_ticks),
                tick_axis(limits.y, &y_ticks),
            )
            .map_err(drawing_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(x_ticks.values.len())
            .y_labels(y_ticks.values.len())
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style((FONT_FAMILY, text.tick_px).into_font())
            .axis_desc_style((FONT_FAMILY, text.label_px).into_font());
        if let Some(label) = &panel.x_label {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &panel.y_label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw().map_err(drawing_err)?;

        let color = to_rgb(panel.color.rgb());
        let points: Vec<(f64, f64)> = panel.series.finite_points().collect();

        match panel.kind {
            ChartKind::Line => {
                let width = settings.pt_to_px(panel.line_width).round().max(1.0) as u32;
                chart
                    .draw_series(LineSeries::new(points, color.stroke_width(width)))
                    .map_err(drawing_err)?;
            }
            ChartKind::Scatter => {
                let radius = (settings.pt_to_px(panel.marker_size) / 2.0).round().max(1.0) as u32;
                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|p| Circle::new(p, radius, color.filled())),
                    )
                    .map_err(drawing_err)?;
            }
            ChartKind::Bar => {
                let half = panel.bar_width / 2.0;
                chart
                    .draw_series(points.into_iter().map(|(x, y)| {
                        Rectangle::new([(x - half, 0.0), (x + half, y)], color.filled())
                    }))
                    .map_err(drawing_err)?;
            }
        }

        Ok(())
    }
}
