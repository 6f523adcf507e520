//! Chart Panel Module
//! One plot inside a figure: chart kind, paired coordinates, color and labels.

use super::{Color, FigureError};

/// Line width in points (matplotlib `lines.linewidth`).
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
/// Bar width in data units.
pub const DEFAULT_BAR_WIDTH: f64 = 0.8;
/// Scatter marker diameter in points.
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Points joined in sequence order
    Line,
    /// Unconnected markers
    Scatter,
    /// Vertical bars rising from zero
    Bar,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "bar",
        }
    }
}

/// Paired x/y coordinate sequences of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, FigureError> {
        if x.len() != y.len() {
            return Err(FigureError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Points in sequence order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Points with both coordinates finite; the only ones that get drawn.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// A self-contained plot with its own data, color and title.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub kind: ChartKind,
    pub series: Series,
    pub color: Color,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Stroke width in points (line charts)
    pub line_width: f64,
    /// Bar width in data units (bar charts)
    pub bar_width: f64,
    /// Marker diameter in points (scatter charts)
    pub marker_size: f64,
}

impl ChartPanel {
    pub fn new(kind: ChartKind, series: Series, color: Color) -> Self {
        Self {
            kind,
            series,
            color,
            title: String::new(),
            x_label: None,
            y_label: None,
            line_width: DEFAULT_LINE_WIDTH,
            bar_width: DEFAULT_BAR_WIDTH,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }

    pub fn line(series: Series, color: Color) -> Self {
        Self::new(ChartKind::Line, series, color)
    }

    pub fn scatter(series: Series, color: Color) -> Self {
        Self::new(ChartKind::Scatter, series, color)
    }

    pub fn bar(series: Series, color: Color) -> Self {
        Self::new(ChartKind::Bar, series, color)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn point_count(&self) -> usize {
        self.series.len()
    }
}
