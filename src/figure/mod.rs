//! Figure module - Panels, series and grid figures

mod color;
mod grid;
mod panel;

pub use color::{Color, Rgb};
pub use grid::Figure;
pub use panel::{
    ChartKind, ChartPanel, Series, DEFAULT_BAR_WIDTH, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_SIZE,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("Unknown color name: {0}")]
    UnknownColor(String),
    #[error("A figure needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Cell ({row}, {col}) already holds a panel")]
    CellOccupied { row: usize, col: usize },
    #[error("Cell ({row}, {col}) has no panel")]
    UnpopulatedCell { row: usize, col: usize },
}
