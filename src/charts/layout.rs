//! Figure Layout Module
//! Places each panel's plot area on the figure, with optional layout-normalization.
//!
//! Geometry follows matplotlib's subplot parameters: the plot areas occupy the
//! box `[left, right] x [bottom, top]` (fractions of the figure), separated by
//! `wspace`/`hspace` (fractions of the average cell size). `SubplotParams::tight`
//! derives these from the text each panel draws around its plot area.

use crate::charts::axes::{nice_ticks, DataLimits, TICK_TARGET};
use crate::config::ViewerSettings;
use crate::figure::{ChartPanel, Figure};
use tracing::{debug, warn};

/// Average advance of a sans-serif glyph relative to its font size.
const GLYPH_ASPECT: f64 = 0.6;
/// Line height relative to font size.
const LINE_SPACING: f64 = 1.2;
/// Padding around the figure edge and between panels, in font sizes.
const TIGHT_PAD: f64 = 1.08;

/// Axis-aligned rectangle in pixels, origin at the top-left of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow by the decoration sizes, clipped to a `width x height` figure.
    pub fn outset(&self, deco: &Decorations, width: f64, height: f64) -> PixelRect {
        let x = (self.x - deco.left).max(0.0);
        let y = (self.y - deco.top).max(0.0);
        PixelRect {
            x,
            y,
            width: (self.right() + deco.right).min(width) - x,
            height: (self.bottom() + deco.bottom).min(height) - y,
        }
    }
}

/// Font and spacing sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub title_px: f64,
    pub label_px: f64,
    pub tick_px: f64,
    pub tick_length_px: f64,
    pub tick_pad_px: f64,
    pub title_pad_px: f64,
    pub label_pad_px: f64,
}

impl TextMetrics {
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        Self {
            title_px: settings.pt_to_px(settings.title_font_pt),
            label_px: settings.pt_to_px(settings.label_font_pt),
            tick_px: settings.pt_to_px(settings.tick_font_pt),
            tick_length_px: settings.pt_to_px(3.5),
            tick_pad_px: settings.pt_to_px(3.5),
            title_pad_px: settings.pt_to_px(6.0),
            label_pad_px: settings.pt_to_px(4.0),
        }
    }

    /// Estimated rendered width of a single line of text.
    pub fn text_width(&self, text: &str, font_px: f64) -> f64 {
        text.chars().count() as f64 * font_px * GLYPH_ASPECT
    }

    pub fn line_height(&self, font_px: f64) -> f64 {
        font_px * LINE_SPACING
    }
}

/// Space a panel needs outside its plot area on each side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Decorations {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Decorations {
    pub fn of_panel(panel: &ChartPanel, text: &TextMetrics) -> Self {
        let limits = DataLimits::of_panel(panel);
        let x_labels = nice_ticks(limits.x, TICK_TARGET).labels();
        let y_labels = nice_ticks(limits.y, TICK_TARGET).labels();
        let tick_space = text.tick_length_px + text.tick_pad_px;

        let widest_y = y_labels
            .iter()
            .map(|l| text.text_width(l, text.tick_px))
            .fold(0.0, f64::max);
        let mut left = tick_space + widest_y;
        if panel.y_label.is_some() {
            left += text.label_pad_px + text.line_height(text.label_px);
        }

        let mut bottom = tick_space + text.line_height(text.tick_px);
        if panel.x_label.is_some() {
            bottom += text.label_pad_px + text.line_height(text.label_px);
        }

        let top = if panel.title.is_empty() {
            // top tick label of the y axis pokes above the plot area
            text.line_height(text.tick_px) / 2.0
        } else {
            text.title_pad_px + text.line_height(text.title_px)
        };

        // last x tick label is centred on the right edge
        let right = x_labels
            .last()
            .map(|l| text.text_width(l, text.tick_px) / 2.0)
            .unwrap_or(0.0);

        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Subplot geometry as fractions of the figure size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

impl SubplotParams {
    /// Parameters the figure asks for: tight when it was normalized, defaults otherwise.
    pub fn for_figure(figure: &Figure, size: (f64, f64), text: &TextMetrics) -> Self {
        if figure.is_tight() {
            Self::tight(figure, size, text)
        } else {
            Self::default()
        }
    }

    /// Fit every panel's decorations inside the figure without overlaps.
    ///
    /// Falls back to the defaults when the figure is too small to hold them.
    pub fn tight(figure: &Figure, size: (f64, f64), text: &TextMetrics) -> Self {
        let (width, height) = size;
        let (rows, cols) = (figure.rows(), figure.cols());
        let pad = TIGHT_PAD * text.label_px;

        let mut decos = vec![Decorations::default(); rows * cols];
        for ((row, col), panel) in figure.panels() {
            decos[row * cols + col] = Decorations::of_panel(panel, text);
        }
        let at = |row: usize, col: usize| &decos[row * cols + col];

        let left_px = pad + (0..rows).map(|r| at(r, 0).left).fold(0.0, f64::max);
        let right_px = pad + (0..rows).map(|r| at(r, cols - 1).right).fold(0.0, f64::max);
        let top_px = pad + (0..cols).map(|c| at(0, c).top).fold(0.0, f64::max);
        let bottom_px = pad + (0..cols).map(|c| at(rows - 1, c).bottom).fold(0.0, f64::max);

        let h_gap = (0..cols.saturating_sub(1))
            .flat_map(|c| (0..rows).map(move |r| (r, c)))
            .map(|(r, c)| at(r, c).right + at(r, c + 1).left + pad)
            .fold(0.0, f64::max);
        let v_gap = (0..rows.saturating_sub(1))
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| at(r, c).bottom + at(r + 1, c).top + pad)
            .fold(0.0, f64::max);

        let cell_w = (width - left_px - right_px - (cols - 1) as f64 * h_gap) / cols as f64;
        let cell_h = (height - top_px - bottom_px - (rows - 1) as f64 * v_gap) / rows as f64;

        if !(cell_w > 0.0 && cell_h > 0.0) {
            warn!(
                width,
                height, "figure too small for tight layout, keeping default spacing"
            );
            return Self::default();
        }

        let params = Self {
            left: left_px / width,
            right: 1.0 - right_px / width,
            bottom: bottom_px / height,
            top: 1.0 - top_px / height,
            wspace: h_gap / cell_w,
            hspace: v_gap / cell_h,
        };
        debug!(?params, "tight layout");
        params
    }
}

/// Plot-area rectangles for every cell, row-major, all the same size.
pub fn cell_rects(
    rows: usize,
    cols: usize,
    size: (f64, f64),
    params: &SubplotParams,
) -> Vec<PixelRect> {
    let (width, height) = size;
    let avail_w = (params.right - params.left) * width;
    let avail_h = (params.top - params.bottom) * height;

    let cell_w = avail_w / (cols as f64 + params.wspace * (cols as f64 - 1.0));
    let cell_h = avail_h / (rows as f64 + params.hspace * (rows as f64 - 1.0));
    let gap_w = params.wspace * cell_w;
    let gap_h = params.hspace * cell_h;

    let origin_x = params.left * width;
    let origin_y = (1.0 - params.top) * height;

    let mut rects = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            rects.push(PixelRect {
                x: origin_x + col as f64 * (cell_w + gap_w),
                y: origin_y + row as f64 * (cell_h + gap_h),
                width: cell_w,
                height: cell_h,
            });
        }
    }
    rects
}

/// Everything a presentation backend needs to place panels.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub params: SubplotParams,
    /// Plot areas, row-major
    pub plot_areas: Vec<PixelRect>,
    /// Plot areas grown by each panel's decorations, row-major
    pub panel_areas: Vec<PixelRect>,
}

impl FigureLayout {
    pub fn compute(figure: &Figure, size: (f64, f64), text: &TextMetrics) -> Self {
        let params = SubplotParams::for_figure(figure, size, text);
        let plot_areas = cell_rects(figure.rows(), figure.cols(), size, &params);
        let mut panel_areas = plot_areas.clone();
        for ((row, col), panel) in figure.panels() {
            let idx = row * figure.cols() + col;
            let deco = Decorations::of_panel(panel, text);
            panel_areas[idx] = plot_areas[idx].outset(&deco, size.0, size.1);
        }
        Self {
            params,
            plot_areas,
            panel_areas,
        }
    }
}
