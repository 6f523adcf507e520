//! Charts module - Axes arithmetic, layout and chart rendering

pub mod axes;
pub mod layout;
mod plotter;
mod renderer;

pub use layout::{FigureLayout, PixelRect, SubplotParams, TextMetrics};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
