use approx::assert_abs_diff_eq;
use chart_canvas::api::{
    ChartFrameConfig, LegendConfig, PieChartConfig, draw_pie_chart, draw_pie_data_set,
    draw_pie_highlight, pie_legend_entries, pie_slices,
};
use chart_canvas::core::{DataSetStyle, PieData, PieDataSet, PieEntry, Point, Size};
use chart_canvas::render::{DrawCommand, RenderFrame};

fn quarters() -> PieDataSet {
    PieDataSet::from_values(&[40.0, 20.0, 15.0, 10.0, 15.0], "share").expect("data set")
}

#[test]
fn slice_angles_are_proportional_and_cover_the_circle() {
    let slices = pie_slices(&quarters(), 270.0, 1.0);
    let sweeps: Vec<f64> = slices.iter().map(|slice| slice.sweep_angle).collect();
    let expected = [144.0, 72.0, 54.0, 36.0, 54.0];
    for (sweep, expected) in sweeps.iter().zip(expected) {
        assert_abs_diff_eq!(*sweep, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(sweeps.iter().sum::<f64>(), 360.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[0].start_angle, 270.0);
    for pair in slices.windows(2) {
        assert_abs_diff_eq!(
            pair[1].start_angle,
            pair[0].start_angle + pair[0].sweep_angle,
            epsilon = 1e-9
        );
    }
}

#[test]
fn zero_sum_draws_nothing() {
    let data_set = PieDataSet::from_values(&[0.0, 0.0], "zeros").expect("data set");
    assert!(pie_slices(&data_set, 0.0, 1.0).is_empty());
    let mut frame = RenderFrame::new(Size::new(100.0, 100.0));
    draw_pie_data_set(&mut frame, &data_set, Point::new(50.0, 50.0), 40.0, 0.0, 1.0);
    assert!(frame.is_empty());
}

#[test]
fn slice_space_trims_both_edges() {
    let data_set = quarters().with_slice_space(4.0);
    let slices = pie_slices(&data_set, 0.0, 1.0);
    assert_abs_diff_eq!(slices[0].start_angle, 2.0);
    assert_abs_diff_eq!(slices[0].sweep_angle, 140.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[1].start_angle, 146.0, epsilon = 1e-9);
}

#[test]
fn slices_smaller_than_the_gap_are_skipped() {
    let data_set = PieDataSet::from_values(&[99.5, 0.5], "thin")
        .expect("data set")
        .with_slice_space(4.0);
    let slices = pie_slices(&data_set, 0.0, 1.0);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].index, 0);
}

#[test]
fn phase_sweeps_the_pie_open() {
    let slices = pie_slices(&quarters(), 0.0, 0.5);
    let total: f64 = slices.iter().map(|slice| slice.sweep_angle).sum();
    assert_abs_diff_eq!(total, 180.0, epsilon = 1e-9);
}

#[test]
fn each_slice_is_a_wedge_arc() {
    let mut frame = RenderFrame::new(Size::new(100.0, 100.0));
    draw_pie_data_set(&mut frame, &quarters(), Point::new(50.0, 50.0), 40.0, 270.0, 1.0);
    frame.validate().expect("valid frame");
    let arcs: Vec<_> = frame.arcs().collect();
    assert_eq!(arcs.len(), 5);
    assert!(arcs.iter().all(|arc| arc.use_center));
    assert!(arcs.iter().all(|arc| (arc.radius - 40.0).abs() <= 1e-9));
}

#[test]
fn highlighted_slice_is_pushed_out_along_its_midpoint() {
    let mut frame = RenderFrame::new(Size::new(100.0, 100.0));
    let data_set = PieDataSet::from_values(&[50.0, 50.0], "halves").expect("data set");
    draw_pie_highlight(&mut frame, &data_set, Point::new(50.0, 50.0), 40.0, 0.0, 1.0, 0);
    let arc = frame.arcs().next().expect("highlight arc");
    // the first half spans 0..180 degrees, midpoint straight down
    assert_abs_diff_eq!(arc.center_x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(arc.center_y, 68.0, epsilon = 1e-9);
}

#[test]
fn legend_has_one_entry_per_slice() {
    let data_set = PieDataSet::new(
        vec![PieEntry::labeled(1.0, "apples"), PieEntry::labeled(2.0, "pears")],
        DataSetStyle::new("fruit"),
    )
    .expect("data set");
    let labels: Vec<String> = pie_legend_entries(&data_set)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, vec!["apples", "pears"]);
}

#[test]
fn pie_chart_draws_slices_then_the_hole() {
    let mut frame = RenderFrame::new(Size::new(200.0, 200.0));
    let data = PieData::single(quarters());
    let frame_config = ChartFrameConfig::default().with_legend(LegendConfig::disabled());
    let config = PieChartConfig::default().with_center_text("total");
    draw_pie_chart(&mut frame, Size::new(200.0, 200.0), &data, &frame_config, &config, 1.0);
    frame.validate().expect("valid frame");

    assert!(matches!(frame.commands[0], DrawCommand::Rect(_)));
    assert!(matches!(frame.commands[1], DrawCommand::PushClip(_)));
    assert_eq!(frame.arcs().count(), 5);

    let circles: Vec<_> = frame.circles().collect();
    assert_eq!(circles.len(), 2);
    // radius 85 from the 170 px content square
    assert_abs_diff_eq!(circles[0].radius, 85.0 * 0.55, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[1].radius, 85.0 * 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(circles[1].center_x, 100.0);

    let center_text = frame.texts().next().expect("center text");
    assert_eq!(center_text.text, "total");
    assert!(matches!(frame.commands.last(), Some(DrawCommand::PopClip)));
}

#[test]
fn pie_without_hole_draws_only_slices() {
    let mut frame = RenderFrame::new(Size::new(200.0, 200.0));
    let data = PieData::single(quarters());
    let frame_config = ChartFrameConfig::default().with_legend(LegendConfig::disabled());
    let config = PieChartConfig::default().without_hole();
    draw_pie_chart(&mut frame, Size::new(200.0, 200.0), &data, &frame_config, &config, 1.0);
    assert_eq!(frame.circles().count(), 0);
    assert_eq!(frame.arcs().count(), 5);
}
