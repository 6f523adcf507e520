//! Chart Plotter Module
//! Draws one panel interactively using egui_plot.

use crate::charts::axes::DataLimits;
use crate::config::ViewerSettings;
use crate::figure::{ChartKind, ChartPanel, Color};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoints, Points};

/// Draws chart panels inside egui containers.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color32(color: &Color) -> Color32 {
        let rgb = color.rgb();
        Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Finite points of the panel in sequence order.
    pub fn plot_points(panel: &ChartPanel) -> Vec<[f64; 2]> {
        panel.series.finite_points().map(|(x, y)| [x, y]).collect()
    }

    /// One bar per point, centred on x and rising from zero.
    pub fn bars(panel: &ChartPanel) -> Vec<Bar> {
        let fill = Self::color32(&panel.color);
        panel
            .series
            .finite_points()
            .map(|(x, y)| Bar::new(x, y).width(panel.bar_width).fill(fill))
            .collect()
    }

    /// Draw the panel title and its plot, filling the available space.
    pub fn draw_panel(
        ui: &mut egui::Ui,
        id: (usize, usize),
        panel: &ChartPanel,
        settings: &ViewerSettings,
    ) {
        let color = Self::color32(&panel.color);
        let limits = DataLimits::of_panel(panel);

        if !panel.title.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&panel.title)
                        .size(settings.pt_to_px(settings.title_font_pt) as f32)
                        .strong(),
                );
            });
        }

        let mut plot = Plot::new(format!("panel_{}_{}", id.0, id.1))
            .width(ui.available_width())
            .height(ui.available_height())
            .allow_scroll(false)
            .show_grid(false)
            .include_x(limits.x.min)
            .include_x(limits.x.max)
            .include_y(limits.y.min)
            .include_y(limits.y.max);
        if let Some(label) = &panel.x_label {
            plot = plot.x_axis_label(label.clone());
        }
        if let Some(label) = &panel.y_label {
            plot = plot.y_axis_label(label.clone());
        }

        plot.show(ui, |plot_ui| match panel.kind {
            ChartKind::Line => {
                plot_ui.line(
                    Line::new(PlotPoints::from(Self::plot_points(panel)))
                        .color(color)
                        .width(settings.pt_to_px(panel.line_width) as f32)
                        .name(&panel.title),
                );
            }
            ChartKind::Scatter => {
                plot_ui.points(
                    Points::new(PlotPoints::from(Self::plot_points(panel)))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius((settings.pt_to_px(panel.marker_size) / 2.0) as f32)
                        .color(color)
                        .name(&panel.title),
                );
            }
            ChartKind::Bar => {
                plot_ui.bar_chart(
                    BarChart::new(Self::bars(panel))
                        .color(color)
                        .name(&panel.title),
                );
            }
        });
    }
}
