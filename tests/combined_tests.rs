use approx::assert_abs_diff_eq;
use chart_canvas::api::{
    ChartFrameConfig, DEFAULT_DRAW_ORDER, DrawOrder, combined_legend_entries, draw_bar_chart,
    draw_bar_data, draw_combined_chart, draw_combined_data,
};
use chart_canvas::core::{
    BarData, BarDataSet, CombinedData, DataBounds, Insets, LineData, LineDataSet, ScatterData,
    ScatterDataSet, Size, Viewport,
};
use chart_canvas::render::{DrawCommand, RenderFrame};

fn viewport() -> Viewport {
    Viewport::create(
        Size::new(300.0, 200.0),
        Insets::uniform(10.0),
        DataBounds::new(-1.0, 3.0, 0.0, 10.0),
    )
}

fn bars() -> BarData {
    BarData::single(BarDataSet::from_values(&[4.0, 6.0, 2.0], "bars").expect("data set"))
}

fn line() -> LineData {
    LineData::single(LineDataSet::from_values(&[1.0, 8.0, 3.0], "line").expect("data set"))
}

#[test]
fn bar_only_combined_matches_the_standalone_renderer() {
    let data = CombinedData::default().with_bar_data(bars());
    let mut combined = RenderFrame::new(Size::new(300.0, 200.0));
    draw_combined_data(&mut combined, &data, &viewport(), &[DrawOrder::Bar], 1.0);

    let mut standalone = RenderFrame::new(Size::new(300.0, 200.0));
    draw_bar_data(&mut standalone, &bars(), &viewport(), 1.0);

    assert!(!combined.is_empty());
    assert_eq!(combined, standalone);
}

#[test]
fn bar_only_combined_chart_matches_the_bar_chart() {
    let config = ChartFrameConfig::default();
    let data = CombinedData::default().with_bar_data(bars());
    let mut combined = RenderFrame::new(Size::new(300.0, 200.0));
    draw_combined_chart(&mut combined, Size::new(300.0, 200.0), &data, &DEFAULT_DRAW_ORDER, &config, 1.0);

    let mut standalone = RenderFrame::new(Size::new(300.0, 200.0));
    draw_bar_chart(&mut standalone, Size::new(300.0, 200.0), &bars(), &config, 1.0);

    assert_eq!(combined, standalone);
}

#[test]
fn layers_follow_the_requested_order() {
    let data = CombinedData::default().with_bar_data(bars()).with_line_data(line());
    let mut frame = RenderFrame::new(Size::new(300.0, 200.0));
    draw_combined_data(&mut frame, &data, &viewport(), &[DrawOrder::Line, DrawOrder::Bar], 1.0);

    let first_rect = frame
        .commands
        .iter()
        .position(|command| matches!(command, DrawCommand::Rect(_)))
        .expect("bar");
    let last_line = frame
        .commands
        .iter()
        .rposition(|command| matches!(command, DrawCommand::Line(_)))
        .expect("line");
    assert!(last_line < first_rect);
}

#[test]
fn default_order_puts_bars_under_lines() {
    let data = CombinedData::default().with_line_data(line()).with_bar_data(bars());
    let mut frame = RenderFrame::new(Size::new(300.0, 200.0));
    draw_combined_data(&mut frame, &data, &viewport(), &DEFAULT_DRAW_ORDER, 1.0);
    assert!(matches!(frame.commands[0], DrawCommand::Rect(_)));
}

#[test]
fn layers_missing_from_the_order_are_not_drawn() {
    let data = CombinedData::default().with_bar_data(bars()).with_line_data(line());
    let mut frame = RenderFrame::new(Size::new(300.0, 200.0));
    draw_combined_data(&mut frame, &data, &viewport(), &[DrawOrder::Line], 1.0);
    assert_eq!(frame.rects().count(), 0);
    assert!(frame.lines().count() > 0);
}

#[test]
fn bounds_union_pads_bars_only() {
    let data = CombinedData::default().with_bar_data(bars()).with_line_data(line());
    let bounds = data.bounds();
    assert_abs_diff_eq!(bounds.x_min, -0.425, epsilon = 1e-9);
    assert_abs_diff_eq!(bounds.x_max, 2.425, epsilon = 1e-9);
    assert_abs_diff_eq!(bounds.y_min, 0.0);
    assert_abs_diff_eq!(bounds.y_max, 8.0);
}

#[test]
fn empty_combined_data_has_default_bounds() {
    let data = CombinedData::default();
    assert!(data.is_empty());
    assert_eq!(data.bounds(), DataBounds::default());
}

#[test]
fn legend_lists_line_then_bar_then_scatter() {
    let scatter = ScatterData::single(
        ScatterDataSet::from_pairs(&[(0.0, 1.0)], "points").expect("data set"),
    );
    let data = CombinedData::default()
        .with_scatter_data(scatter)
        .with_bar_data(bars())
        .with_line_data(line());
    let labels: Vec<String> = combined_legend_entries(&data)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, vec!["line", "bars", "points"]);
}
