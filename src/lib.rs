//! Plot Gallery - Small static chart programs
//!
//! Builds fixed figures (a single line chart and a 2x3 grid of line, scatter
//! and bar plots) and presents them in a native window. Figures can also be
//! rasterized to PNG.

pub mod charts;
pub mod config;
pub mod figure;
pub mod gallery;
pub mod gui;
pub mod telemetry;

pub use config::ViewerSettings;
pub use figure::{ChartKind, ChartPanel, Color, Figure, FigureError, Series};
