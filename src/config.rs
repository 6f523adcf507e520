//! Viewer and render settings
//!
//! Sizes follow matplotlib's defaults: a 6.4 x 4.8 inch figure at 100 DPI,
//! with font sizes given in points.

use crate::figure::Rgb;

/// Points per inch.
const PT_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    /// Figure width and height in inches
    pub figure_size: (f64, f64),
    /// Pixels per inch
    pub dpi: f64,
    pub title_font_pt: f64,
    pub label_font_pt: f64,
    pub tick_font_pt: f64,
    pub background: Rgb,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            figure_size: (6.4, 4.8),
            dpi: 100.0,
            title_font_pt: 12.0,
            label_font_pt: 10.0,
            tick_font_pt: 10.0,
            background: Rgb(255, 255, 255),
        }
    }
}

impl ViewerSettings {
    /// Figure size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_size;
        (
            (w * self.dpi).round().max(1.0) as u32,
            (h * self.dpi).round().max(1.0) as u32,
        )
    }

    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / PT_PER_INCH
    }
}
