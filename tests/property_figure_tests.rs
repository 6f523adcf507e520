use plot_gallery::charts::axes::{nice_ticks, AxisRange, DataLimits, TICK_TARGET};
use plot_gallery::charts::{FigureLayout, TextMetrics};
use plot_gallery::{gallery, ChartKind, ChartPanel, Color, FigureError, Series, ViewerSettings};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = ChartKind> {
    prop_oneof![
        Just(ChartKind::Line),
        Just(ChartKind::Scatter),
        Just(ChartKind::Bar)
    ]
}

proptest! {
    #[test]
    fn series_requires_equal_lengths(
        x in proptest::collection::vec(-1_000.0f64..1_000.0, 0..16),
        y in proptest::collection::vec(-1_000.0f64..1_000.0, 0..16)
    ) {
        let result = Series::new(x.clone(), y.clone());
        if x.len() == y.len() {
            prop_assert_eq!(result.expect("equal lengths").len(), x.len());
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                FigureError::LengthMismatch { x_len: x.len(), y_len: y.len() }
            );
        }
    }

    #[test]
    fn removing_a_point_reduces_point_count(
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 1..32),
        kind in kind(),
        pick in any::<prop::sample::Index>()
    ) {
        let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
        let full = ChartPanel::new(kind, Series::new(xs.clone(), ys.clone()).unwrap(), Color::named("blue").unwrap());

        let drop = pick.index(ys.len());
        let mut xs2 = xs;
        let mut ys2 = ys;
        xs2.remove(drop);
        ys2.remove(drop);
        let reduced = ChartPanel::new(kind, Series::new(xs2, ys2).unwrap(), Color::named("blue").unwrap());

        prop_assert_eq!(reduced.point_count(), full.point_count() - 1);
        prop_assert_eq!(reduced.series.finite_points().count(), full.series.finite_points().count() - 1);
    }

    #[test]
    fn limits_cover_all_points(
        points in proptest::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..32),
        kind in kind()
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        let panel = ChartPanel::new(kind, Series::new(xs, ys).unwrap(), Color::named("red").unwrap());
        let limits = DataLimits::of_panel(&panel);

        prop_assert!(limits.x.span() > 0.0);
        prop_assert!(limits.y.span() > 0.0);
        for (x, y) in panel.series.points() {
            prop_assert!(limits.x.contains(x));
            prop_assert!(limits.y.contains(y));
        }
        if kind == ChartKind::Bar {
            prop_assert!(limits.y.contains(0.0));
        }
    }

    #[test]
    fn ticks_are_ascending_and_inside_range(
        lo in -1e6f64..1e6,
        span in 1e-3f64..1e6
    ) {
        let range = AxisRange::new(lo, lo + span);
        let ticks = nice_ticks(range, TICK_TARGET);

        prop_assert!(!ticks.values.is_empty());
        prop_assert!(ticks.values.len() <= 2 * TICK_TARGET + 1);
        let eps = ticks.step * 1e-6;
        for w in ticks.values.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for &v in &ticks.values {
            prop_assert!(v >= range.min - eps && v <= range.max + eps);
        }
    }

    #[test]
    fn ticks_terminate_for_ranges_a_few_ulps_wide(
        lo in -1e18f64..1e18,
        ulps in 1u32..64
    ) {
        let hi = lo + lo.abs().max(1.0) * f64::EPSILON * ulps as f64;
        prop_assume!(hi > lo);
        let range = AxisRange::new(lo, hi);
        let ticks = nice_ticks(range, TICK_TARGET);

        prop_assert!(!ticks.values.is_empty());
        prop_assert!(ticks.values.len() <= 4 * TICK_TARGET + 2);
        for w in ticks.values.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        let eps = ticks.step * 1e-6;
        for &v in &ticks.values {
            prop_assert!(v >= range.min - eps && v <= range.max + eps);
        }
    }

    #[test]
    fn tight_grid_never_overlaps(
        width in 480.0f64..1_600.0,
        height in 360.0f64..1_200.0
    ) {
        let fig = gallery::multiple_plots().unwrap();
        let text = TextMetrics::from_settings(&ViewerSettings::default());
        let layout = FigureLayout::compute(&fig, (width, height), &text);

        for (i, a) in layout.panel_areas.iter().enumerate() {
            for b in layout.panel_areas.iter().skip(i + 1) {
                prop_assert!(!a.intersects(b));
            }
        }
    }
}
