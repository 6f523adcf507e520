//! Grid Figure Module
//! A rows x cols arrangement of chart panels addressed by (row, column).

use super::{ChartPanel, FigureError};
use tracing::debug;

/// A figure made of one or more panels laid out on a fixed grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<Option<ChartPanel>>,
    window_title: String,
    tight_layout: bool,
}

impl Figure {
    /// Create an empty grid; every cell must be filled before the figure is shown.
    pub fn new(rows: usize, cols: usize) -> Result<Self, FigureError> {
        if rows == 0 || cols == 0 {
            return Err(FigureError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            window_title: "Figure 1".to_string(),
            tight_layout: false,
        })
    }

    /// A 1x1 figure holding a single panel.
    pub fn single(panel: ChartPanel) -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![Some(panel)],
            window_title: "Figure 1".to_string(),
            tight_layout: false,
        }
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, FigureError> {
        if row >= self.rows || col >= self.cols {
            return Err(FigureError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Place a panel; each cell can be populated once.
    pub fn set_panel(
        &mut self,
        row: usize,
        col: usize,
        panel: ChartPanel,
    ) -> Result<(), FigureError> {
        let idx = self.index(row, col)?;
        if self.cells[idx].is_some() {
            return Err(FigureError::CellOccupied { row, col });
        }
        debug!(
            row,
            col,
            kind = panel.kind.label(),
            points = panel.point_count(),
            title = %panel.title,
            "placing panel"
        );
        self.cells[idx] = Some(panel);
        Ok(())
    }

    pub fn panel(&self, row: usize, col: usize) -> Option<&ChartPanel> {
        self.index(row, col)
            .ok()
            .and_then(|idx| self.cells[idx].as_ref())
    }

    /// Populated panels in row-major order with their (row, col) address.
    pub fn panels(&self) -> impl Iterator<Item = ((usize, usize), &ChartPanel)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|p| ((idx / cols, idx % cols), p)))
    }

    pub fn panel_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every cell must hold a panel before the figure is presented.
    pub fn validate(&self) -> Result<(), FigureError> {
        match self.cells.iter().position(Option::is_none) {
            Some(idx) => Err(FigureError::UnpopulatedCell {
                row: idx / self.cols,
                col: idx % self.cols,
            }),
            None => Ok(()),
        }
    }

    /// Ask the presentation layer to normalize spacing so titles and labels don't overlap.
    pub fn tight_layout(&mut self) {
        self.tight_layout = true;
    }

    pub fn is_tight(&self) -> bool {
        self.tight_layout
    }
}
