//! Shows a 2x3 grid of line, scatter and bar plots.

use anyhow::Context;
use plot_gallery::{gallery, gui, telemetry, ViewerSettings};

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_tracing();

    let figure = gallery::multiple_plots().context("Failed to build plot grid")?;
    gui::show(figure, ViewerSettings::default()).context("Failed to display plot grid")?;

    Ok(())
}
