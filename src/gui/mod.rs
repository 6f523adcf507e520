//! GUI module - Figure window

mod app;

pub use app::{show, FigureWindow, ViewerError};
