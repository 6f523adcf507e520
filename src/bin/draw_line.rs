//! Draws a single labelled line chart and shows it.

use anyhow::Context;
use plot_gallery::{gallery, gui, telemetry, ViewerSettings};

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_tracing();

    let figure = gallery::draw_a_line().context("Failed to build line chart")?;
    gui::show(figure, ViewerSettings::default()).context("Failed to display line chart")?;

    Ok(())
}
