//! Axes arithmetic: data limits, margins and tick positions.

use crate::figure::{ChartKind, ChartPanel};

/// Fraction of the data span added on each side (matplotlib `axes.xmargin`).
pub const AXES_MARGIN: f64 = 0.05;

/// Number of tick intervals aimed for on each axis.
pub const TICK_TARGET: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// View limits of one panel, margins included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataLimits {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl DataLimits {
    pub fn of_panel(panel: &ChartPanel) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (x, y) in panel.series.finite_points() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if x_min.is_infinite() {
            return Self {
                x: AxisRange::new(0.0, 1.0),
                y: AxisRange::new(0.0, 1.0),
            };
        }

        match panel.kind {
            ChartKind::Bar => {
                let half = panel.bar_width / 2.0;
                Self {
                    x: expand(x_min - half, x_max + half),
                    y: expand_sticky_zero(y_min.min(0.0), y_max.max(0.0)),
                }
            }
            ChartKind::Line | ChartKind::Scatter => Self {
                x: expand(x_min, x_max),
                y: expand(y_min, y_max),
            },
        }
    }
}

/// Widen a zero-width interval around its value.
fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        return (lo, hi);
    }
    let delta = if lo == 0.0 { 0.5 } else { lo.abs() * AXES_MARGIN };
    (lo - delta, hi + delta)
}

fn expand(lo: f64, hi: f64) -> AxisRange {
    let (lo, hi) = nonsingular(lo, hi);
    let pad = (hi - lo) * AXES_MARGIN;
    AxisRange::new(lo - pad, hi + pad)
}

/// Like `expand`, but a bar baseline at zero stays on the axis edge.
fn expand_sticky_zero(lo: f64, hi: f64) -> AxisRange {
    let mut range = expand(lo, hi);
    if lo == 0.0 && hi > 0.0 {
        range.min = 0.0;
    }
    if hi == 0.0 && lo < 0.0 {
        range.max = 0.0;
    }
    range
}

/// Tick positions and the step between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub step: f64,
    pub values: Vec<f64>,
}

impl Ticks {
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|&v| format_tick(v, self.step))
            .collect()
    }
}

/// Round step of 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Largest integer below which every f64 integer is exact.
const EXACT_INT_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Ticks at multiples of a nice step inside `range`.
///
/// Ranges too narrow for their magnitude to hold distinct multiples get the
/// two endpoints instead.
pub fn nice_ticks(range: AxisRange, target_steps: usize) -> Ticks {
    let span = range.span();
    if !(span.is_finite() && span > 0.0) {
        return Ticks {
            step: 1.0,
            values: vec![range.min],
        };
    }

    let endpoints = Ticks {
        step: span,
        values: vec![range.min, range.max],
    };

    let step = nice_step(span, target_steps);
    let first = (range.min / step).ceil();
    let last = (range.max / step).floor();
    let cap = 4 * target_steps.max(1) + 2;

    if !(first.is_finite() && last.is_finite())
        || first.abs() >= EXACT_INT_LIMIT
        || last.abs() >= EXACT_INT_LIMIT
        || last < first
        || last - first + 1.0 > cap as f64
    {
        return endpoints;
    }

    let count = (last - first) as usize + 1;
    let eps = step * 1e-9;
    let mut values: Vec<f64> = (0..count)
        .map(|i| (first + i as f64) * step)
        .filter(|&v| v >= range.min - eps && v <= range.max + eps)
        // -0.0 prints as "-0"
        .map(|v| if v == 0.0 { 0.0 } else { v })
        .collect();
    values.dedup();

    if values.is_empty() {
        return endpoints;
    }
    Ticks { step, values }
}

/// Format a tick with the fewest decimals that represent the step exactly.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    while decimals < 6 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        decimals += 1;
    }
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Color, Series};
    use approx::assert_relative_eq;

    fn panel(kind: ChartKind, x: Vec<f64>, y: Vec<f64>) -> ChartPanel {
        let series = Series::new(x, y).unwrap();
        ChartPanel::new(kind, series, Color::named("blue").unwrap())
    }

    #[test]
    fn line_limits_have_five_percent_margins() {
        let limits = DataLimits::of_panel(&panel(
            ChartKind::Line,
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0],
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 160.0],
        ));
        assert_relative_eq!(limits.x.min, -2.5);
        assert_relative_eq!(limits.x.max, 52.5);
        assert_relative_eq!(limits.y.min, -8.0);
        assert_relative_eq!(limits.y.max, 168.0);
    }

    #[test]
    fn bar_limits_start_at_zero_and_cover_bar_edges() {
        let limits = DataLimits::of_panel(&panel(
            ChartKind::Bar,
            vec![1.0, 2.0, 3.0],
            vec![1.0, 4.0, 9.0],
        ));
        assert_eq!(limits.y.min, 0.0);
        assert_relative_eq!(limits.y.max, 9.45);
        // bars span 0.6..3.4 before margins
        assert_relative_eq!(limits.x.min, 0.6 - 0.14, epsilon = 1e-12);
        assert_relative_eq!(limits.x.max, 3.4 + 0.14, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_and_empty_data_get_usable_limits() {
        let single = DataLimits::of_panel(&panel(ChartKind::Scatter, vec![2.0], vec![0.0]));
        assert!(single.x.span() > 0.0);
        assert!(single.y.span() > 0.0);
        assert!(single.x.contains(2.0));

        let empty = DataLimits::of_panel(&panel(ChartKind::Line, vec![], vec![]));
        assert_eq!(empty.x, AxisRange::new(0.0, 1.0));
    }

    #[test]
    fn ticks_use_nice_steps_within_range() {
        let ticks = nice_ticks(AxisRange::new(-8.0, 168.0), TICK_TARGET);
        assert_eq!(ticks.step, 50.0);
        assert_eq!(ticks.values, vec![0.0, 50.0, 100.0, 150.0]);

        let ticks = nice_ticks(AxisRange::new(0.9, 3.1), TICK_TARGET);
        assert_relative_eq!(ticks.step, 0.5);
        assert_eq!(ticks.labels(), vec!["1.0", "1.5", "2.0", "2.5", "3.0"]);
    }

    #[test]
    fn narrow_range_at_large_magnitude_terminates() {
        let limits = DataLimits::of_panel(&panel(
            ChartKind::Line,
            vec![1.0, 1.0 + f64::EPSILON],
            vec![0.0, 1.0],
        ));
        let ticks = nice_ticks(limits.x, TICK_TARGET);
        assert!(!ticks.values.is_empty());
        assert!(ticks.values.len() <= 4 * TICK_TARGET + 2);
        assert!(ticks.values.windows(2).all(|w| w[0] < w[1]));
        for &v in &ticks.values {
            assert!(limits.x.contains(v));
        }

        let far = nice_ticks(AxisRange::new(1e17, 1e17 + 64.0), TICK_TARGET);
        assert_eq!(far.values, vec![1e17, 1e17 + 64.0]);
    }

    #[test]
    fn formats_quarter_steps_with_two_decimals() {
        assert_eq!(format_tick(0.75, 0.25), "0.75");
        assert_eq!(format_tick(-1e-17, 0.5), "0.0");
        assert_eq!(format_tick(150.0, 50.0), "150");
    }
}
