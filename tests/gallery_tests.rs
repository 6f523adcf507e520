use plot_gallery::figure::Rgb;
use plot_gallery::{gallery, ChartKind};

#[test]
fn line_figure_has_six_points_in_order() {
    let fig = gallery::draw_a_line().expect("line figure");
    assert_eq!((fig.rows(), fig.cols()), (1, 1));
    assert_eq!(fig.panel_count(), 1);

    let panel = fig.panel(0, 0).expect("panel");
    assert_eq!(panel.kind, ChartKind::Line);
    assert_eq!(panel.point_count(), 6);
    let points: Vec<_> = panel.series.points().collect();
    assert_eq!(
        points,
        vec![
            (0.0, 0.0),
            (10.0, 20.0),
            (20.0, 40.0),
            (30.0, 60.0),
            (40.0, 80.0),
            (50.0, 160.0)
        ]
    );
}

#[test]
fn line_figure_labels_and_style() {
    let fig = gallery::draw_a_line().expect("line figure");
    let panel = fig.panel(0, 0).expect("panel");

    assert_eq!(panel.x_label.as_deref(), Some("x - axis"));
    assert_eq!(panel.y_label.as_deref(), Some("y - axis"));
    assert_eq!(panel.title, "Draw a line.");
    assert_eq!(panel.color.name(), "blue");
    assert_eq!(panel.color.rgb(), Rgb(0, 0, 255));
    assert_eq!(panel.line_width, 1.5);
    assert!(!fig.is_tight());
}

#[test]
fn grid_figure_is_two_by_three_and_fully_populated() {
    let fig = gallery::multiple_plots().expect("grid figure");
    assert_eq!((fig.rows(), fig.cols()), (2, 3));
    assert_eq!(fig.panel_count(), 6);
    fig.validate().expect("all cells populated");
    assert!(fig.is_tight());

    let titles: Vec<_> = fig.panels().map(|(_, p)| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Plot 1", "Plot 2", "Plot 3", "Plot 4", "Plot 5", "Plot 6"]
    );
}

#[test]
fn grid_panels_match_their_cells() {
    let fig = gallery::multiple_plots().expect("grid figure");

    let p1 = fig.panel(0, 0).expect("plot 1");
    assert_eq!(p1.kind, ChartKind::Line);
    assert_eq!(
        p1.series.points().collect::<Vec<_>>(),
        vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]
    );
    assert_eq!(p1.title, "Plot 1");

    let p2 = fig.panel(0, 1).expect("plot 2");
    assert_eq!(p2.kind, ChartKind::Scatter);
    assert_eq!(p2.series, p1.series);
    assert_eq!(p2.title, "Plot 2");

    let p6 = fig.panel(1, 2).expect("plot 6");
    assert_eq!(p6.kind, ChartKind::Bar);
    assert_eq!(
        p6.series.points().collect::<Vec<_>>(),
        vec![(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]
    );
    assert_eq!(p6.title, "Plot 6");

    let colors: Vec<_> = fig.panels().map(|(_, p)| p.color.name().to_string()).collect();
    assert_eq!(
        colors,
        vec!["blue", "red", "green", "purple", "orange", "pink"]
    );
}

#[test]
fn figures_are_identical_across_builds() {
    assert_eq!(
        gallery::draw_a_line().expect("first"),
        gallery::draw_a_line().expect("second")
    );
    assert_eq!(
        gallery::multiple_plots().expect("first"),
        gallery::multiple_plots().expect("second")
    );
}
