use approx::assert_abs_diff_eq;
use chart_canvas::api::{
    AxisConfig, AxisLabelPolicy, AxisSide, LimitLabelPosition, LimitLineConfig, XAxisConfig,
    XAxisPosition, YAxisConfig, YAxisLabelPosition, axis_tick_values, compute_axis_values,
    default_axis_label, draw_x_axis, draw_x_limit_lines, draw_y_axis, draw_y_limit_lines,
};
use chart_canvas::core::{DataBounds, Insets, Size, Viewport};
use chart_canvas::render::{RenderFrame, TextHAlign};

fn viewport() -> Viewport {
    Viewport::create(
        Size::new(500.0, 300.0),
        Insets::new(50.0, 30.0, 50.0, 30.0),
        DataBounds::new(0.0, 10.0, 0.0, 100.0),
    )
}

fn frame() -> RenderFrame {
    RenderFrame::new(Size::new(500.0, 300.0))
}

#[test]
fn six_labels_subdivide_the_range_evenly() {
    assert_eq!(compute_axis_values(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn label_count_below_two_falls_back_to_the_endpoints() {
    assert_eq!(compute_axis_values(0.0, 10.0, 1), vec![0.0, 10.0]);
    assert_eq!(compute_axis_values(0.0, 10.0, 0), vec![0.0, 10.0]);
}

#[test]
fn inverted_or_flat_range_returns_both_endpoints() {
    assert_eq!(compute_axis_values(5.0, 5.0, 6), vec![5.0, 5.0]);
    assert_eq!(compute_axis_values(9.0, 1.0, 4), vec![9.0, 1.0]);
}

#[test]
fn default_label_is_integer_when_whole() {
    assert_eq!(default_axis_label(40.0), "40");
    assert_eq!(default_axis_label(-0.0), "0");
    assert_eq!(default_axis_label(12.34), "12.3");
}

#[test]
fn x_axis_draws_gridlines_axis_line_and_labels() {
    let mut frame = frame();
    let config = XAxisConfig::default().with_position(XAxisPosition::Bottom);
    draw_x_axis(&mut frame, &viewport(), &config);
    frame.validate().expect("valid frame");

    let texts: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "2", "4", "6", "8", "10"]);
    // six gridlines plus the bottom axis line
    assert_eq!(frame.lines().count(), 7);
    for text in frame.texts() {
        assert_eq!(text.h_align, TextHAlign::Center);
        assert_abs_diff_eq!(text.y, 274.0);
    }
}

#[test]
fn both_sided_x_axis_labels_each_tick_twice() {
    let mut frame = frame();
    let config = XAxisConfig::default().with_position(XAxisPosition::BothSided);
    draw_x_axis(&mut frame, &viewport(), &config);
    assert_eq!(frame.texts().count(), 12);
    // grid plus top and bottom axis lines
    assert_eq!(frame.lines().count(), 8);
}

#[test]
fn disabled_axis_draws_nothing() {
    let mut frame = frame();
    let config = XAxisConfig::default().with_axis(AxisConfig::disabled());
    draw_x_axis(&mut frame, &viewport(), &config);
    draw_y_axis(&mut frame, &viewport(), &YAxisConfig::disabled(), AxisSide::Left);
    assert!(frame.is_empty());
}

#[test]
fn overlapping_x_labels_are_thinned() {
    let mut frame = frame();
    let narrow = Viewport::create(
        Size::new(120.0, 100.0),
        Insets::new(10.0, 10.0, 10.0, 10.0),
        DataBounds::new(0.0, 100_000.0, 0.0, 1.0),
    );
    let config = XAxisConfig::default()
        .with_axis(AxisConfig::default().with_label_count(11))
        .with_position(XAxisPosition::Bottom);
    draw_x_axis(&mut frame, &narrow, &config);

    let mut previous_end = f64::NEG_INFINITY;
    let mut drawn = 0;
    for text in frame.texts() {
        let width = frame.metrics.measure(&text.text, text.font_size_px).width;
        let start = text.x - width / 2.0;
        assert!(start >= previous_end, "label {} overlaps its neighbour", text.text);
        previous_end = start + width;
        drawn += 1;
    }
    assert!(drawn < 11);
    assert!(drawn >= 2);
}

#[test]
fn left_y_axis_labels_are_right_aligned_outside_the_content() {
    let mut frame = frame();
    draw_y_axis(&mut frame, &viewport(), &YAxisConfig::default(), AxisSide::Left);
    frame.validate().expect("valid frame");
    assert_eq!(frame.texts().count(), 6);
    for text in frame.texts() {
        assert_eq!(text.h_align, TextHAlign::Right);
        assert_abs_diff_eq!(text.x, 42.0);
    }
}

#[test]
fn flat_range_draws_a_single_tick() {
    assert_eq!(axis_tick_values(&AxisConfig::default(), 5.0, 5.0), vec![5.0]);

    let flat = Viewport::create(
        Size::new(500.0, 300.0),
        Insets::new(50.0, 30.0, 50.0, 30.0),
        DataBounds::new(0.0, 10.0, 5.0, 5.0),
    );
    let mut frame = frame();
    draw_y_axis(&mut frame, &flat, &YAxisConfig::default(), AxisSide::Left);
    frame.validate().expect("valid frame");

    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["5"]);
    let gridlines = frame.lines().filter(|line| line.y1 == line.y2).count();
    assert_eq!(gridlines, 1);
}

#[test]
fn inside_right_y_axis_labels_sit_within_the_content() {
    let mut frame = frame();
    let config = YAxisConfig {
        label_position: YAxisLabelPosition::InsideChart,
        ..YAxisConfig::default()
    };
    draw_y_axis(&mut frame, &viewport(), &config, AxisSide::Right);
    for text in frame.texts() {
        assert_eq!(text.h_align, TextHAlign::Right);
        assert_abs_diff_eq!(text.x, 442.0);
    }
}

#[test]
fn custom_formatter_replaces_default_labels() {
    let mut frame = frame();
    let axis = AxisConfig::default().with_formatter(|value| format!("{value:.0}%"));
    draw_y_axis(&mut frame, &viewport(), &YAxisConfig::default().with_axis(axis), AxisSide::Left);
    assert!(frame.texts().all(|text| text.text.ends_with('%')));
}

#[test]
fn percent_policy_formats_labels() {
    let mut frame = frame();
    let axis = AxisConfig::default().with_label_policy(AxisLabelPolicy::Percent { precision: 0 });
    draw_y_axis(&mut frame, &viewport(), &YAxisConfig::default().with_axis(axis), AxisSide::Left);
    assert!(frame.texts().all(|text| text.text.ends_with('%')));
}

#[test]
fn zero_line_is_drawn_when_zero_is_visible() {
    let mut frame = frame();
    let viewport = viewport().with_bounds(DataBounds::new(0.0, 10.0, -50.0, 50.0));
    let config = YAxisConfig::default()
        .with_axis(AxisConfig {
            draw_grid_lines: false,
            draw_axis_line: false,
            draw_labels: false,
            ..AxisConfig::default()
        })
        .with_zero_line(true);
    draw_y_axis(&mut frame, &viewport, &config, AxisSide::Left);
    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_abs_diff_eq!(lines[0].y1, 150.0);
}

#[test]
fn y_limit_line_spans_the_content_width_with_corner_label() {
    let mut frame = frame();
    let axis = AxisConfig::default().with_limit_line(
        LimitLineConfig::new(50.0, "target").with_label_position(LimitLabelPosition::LeftBottom),
    );
    draw_y_limit_lines(&mut frame, &viewport(), &axis);
    frame.validate().expect("valid frame");

    let line = frame.lines().next().expect("limit line");
    assert_abs_diff_eq!(line.x1, 50.0);
    assert_abs_diff_eq!(line.x2, 450.0);
    assert_abs_diff_eq!(line.y1, 150.0);
    let label = frame.texts().next().expect("limit label");
    assert_eq!(label.text, "target");
    assert_abs_diff_eq!(label.x, 54.0);
    assert_abs_diff_eq!(label.y, 152.0);
}

#[test]
fn x_limit_line_outside_the_range_is_skipped() {
    let mut frame = frame();
    let axis = AxisConfig::default()
        .with_limit_line(LimitLineConfig::new(5.0, "mid"))
        .with_limit_line(LimitLineConfig::new(25.0, "beyond"));
    draw_x_limit_lines(&mut frame, &viewport(), &axis);
    assert_eq!(frame.lines().count(), 1);
    let texts: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["mid"]);
}

#[test]
fn y_space_and_overrides_shape_the_displayed_range() {
    let config = YAxisConfig::default().with_space(10.0, 0.0);
    let bounds = config.apply_to_bounds(DataBounds::new(0.0, 1.0, 0.0, 100.0));
    assert_abs_diff_eq!(bounds.y_max, 110.0);
    assert_abs_diff_eq!(bounds.y_min, 0.0);

    let pinned = config.with_axis(AxisConfig::default().with_range(Some(-5.0), None));
    let bounds = pinned.apply_to_bounds(DataBounds::new(0.0, 1.0, 0.0, 100.0));
    assert_abs_diff_eq!(bounds.y_min, -5.0);
    assert_abs_diff_eq!(bounds.y_max, 110.0);
}
