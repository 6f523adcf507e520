//! Figure Window
//! Presents a figure in a native window with a small toolbar, until closed.

use crate::charts::{ChartPlotter, FigureLayout, StaticChartRenderer, TextMetrics};
use crate::config::ViewerSettings;
use crate::figure::{Figure, FigureError};
use eframe::egui;
use egui::{Color32, RichText, TopBottomPanel};
use thiserror::Error;
use tracing::{info, warn};

/// Height reserved for the toolbar above the figure.
const TOOLBAR_HEIGHT: f32 = 32.0;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Invalid figure: {0}")]
    Figure(#[from] FigureError),
    #[error("Failed to open figure window: {0}")]
    Window(String),
}

/// Main window showing one figure.
pub struct FigureWindow {
    figure: Figure,
    settings: ViewerSettings,
    status: String,
}

impl FigureWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure, settings: ViewerSettings) -> Self {
        Self {
            figure,
            settings,
            status: String::new(),
        }
    }

    /// File name offered by the save dialog.
    fn default_file_name(&self) -> String {
        let stem: String = self
            .figure
            .window_title()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{}.png", stem.trim_matches('_'))
    }

    /// Render the figure to a PNG chosen by the user
    fn handle_save_figure(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(self.default_file_name())
            .save_file()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::save_png(&self.figure, &self.settings, &path) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.status = format!("Error: {}", e);
            }
        }
    }

    fn show_figure(&self, ui: &mut egui::Ui) {
        let area = ui.max_rect();
        let size = (area.width() as f64, area.height() as f64);
        let text = TextMetrics::from_settings(&self.settings);
        let layout = FigureLayout::compute(&self.figure, size, &text);

        for ((row, col), panel) in self.figure.panels() {
            let cell = layout.panel_areas[row * self.figure.cols() + col];
            let rect = egui::Rect::from_min_size(
                area.min + egui::vec2(cell.x as f32, cell.y as f32),
                egui::vec2(cell.width as f32, cell.height as f32),
            );
            ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |ui| {
                ChartPlotter::draw_panel(ui, (row, col), panel, &self.settings);
            });
        }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar")
            .exact_height(TOOLBAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui.button("💾 Save figure…").clicked() {
                        self.handle_save_figure();
                    }
                    let color = if self.status.starts_with("Error") {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        ui.visuals().text_color()
                    };
                    ui.label(RichText::new(&self.status).color(color));
                });
            });

        let background = self.settings.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_rgb(
                background.0,
                background.1,
                background.2,
            )))
            .show(ctx, |ui| {
                self.show_figure(ui);
            });
    }
}

/// Open a window for `figure` and block until the user closes it.
pub fn show(figure: Figure, settings: ViewerSettings) -> Result<(), ViewerError> {
    figure.validate()?;

    let (width, height) = settings.pixel_size();
    let title = figure.window_title().to_string();
    info!(
        title = %title,
        rows = figure.rows(),
        cols = figure.cols(),
        panels = figure.panel_count(),
        "showing figure"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32 + TOOLBAR_HEIGHT])
            .with_min_inner_size([320.0, 240.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureWindow::new(cc, figure, settings)))),
    )
    .map_err(|e| ViewerError::Window(e.to_string()))?;

    info!("figure window closed");
    Ok(())
}
