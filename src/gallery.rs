//! The two hardcoded figures.

use crate::figure::{ChartPanel, Color, Figure, FigureError, Series};
use tracing::debug;

/// One blue line through six points, with axis labels and a title.
pub fn draw_a_line() -> Result<Figure, FigureError> {
    let x = vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0];
    let y = vec![0.0, 20.0, 40.0, 60.0, 80.0, 160.0];

    let panel = ChartPanel::line(Series::new(x, y)?, Color::named("blue")?)
        .with_line_width(1.5)
        .with_x_label("x - axis")
        .with_y_label("y - axis")
        .with_title("Draw a line.");

    Ok(Figure::single(panel).with_window_title("Draw a line"))
}

/// A 2x3 grid of small line, scatter and bar plots.
pub fn multiple_plots() -> Result<Figure, FigureError> {
    let x = || vec![1.0, 2.0, 3.0];
    let squares = || vec![1.0, 4.0, 9.0];

    let mut fig = Figure::new(2, 3)?.with_window_title("Multiple plots");

    fig.set_panel(
        0,
        0,
        ChartPanel::line(Series::new(x(), squares())?, Color::named("blue")?).with_title("Plot 1"),
    )?;
    fig.set_panel(
        0,
        1,
        ChartPanel::scatter(Series::new(x(), squares())?, Color::named("red")?)
            .with_title("Plot 2"),
    )?;
    fig.set_panel(
        0,
        2,
        ChartPanel::bar(Series::new(x(), squares())?, Color::named("green")?).with_title("Plot 3"),
    )?;
    fig.set_panel(
        1,
        0,
        ChartPanel::line(Series::new(x(), vec![1.0, 2.0, 3.0])?, Color::named("purple")?)
            .with_title("Plot 4"),
    )?;
    fig.set_panel(
        1,
        1,
        ChartPanel::scatter(Series::new(x(), vec![3.0, 2.0, 1.0])?, Color::named("orange")?)
            .with_title("Plot 5"),
    )?;
    fig.set_panel(
        1,
        2,
        ChartPanel::bar(Series::new(x(), vec![3.0, 2.0, 1.0])?, Color::named("pink")?)
            .with_title("Plot 6"),
    )?;

    fig.tight_layout();
    debug!(panels = fig.panel_count(), "built multiple plots figure");
    Ok(fig)
}
