use approx::assert_abs_diff_eq;
use chart_canvas::api::{
    ChartFrameConfig, LegendConfig, RadarChartConfig, RadarGeometry, RadarWebStyle,
    draw_radar_chart, draw_radar_data_set, draw_radar_labels, draw_radar_web, radar_vertices,
};
use chart_canvas::core::{Point, RadarData, RadarDataSet, Size};
use chart_canvas::render::{Color, DrawCommand, PaintStyle, RenderFrame};

fn geometry(axis_count: usize) -> RadarGeometry {
    RadarGeometry::new(Point::new(50.0, 50.0), 40.0, 270.0, axis_count)
}

fn frame() -> RenderFrame {
    RenderFrame::new(Size::new(100.0, 100.0))
}

#[test]
fn vertices_lie_on_their_axis_rays() {
    let data_set = RadarDataSet::from_values(&[10.0, 5.0, 10.0, 5.0], "kite").expect("data set");
    let vertices = radar_vertices(&data_set, geometry(4), 10.0, 1.0);
    let expected = [
        Point::new(50.0, 10.0),
        Point::new(70.0, 50.0),
        Point::new(50.0, 90.0),
        Point::new(30.0, 50.0),
    ];
    assert_eq!(vertices.len(), 4);
    for (vertex, expected) in vertices.iter().zip(expected) {
        assert_abs_diff_eq!(vertex.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(vertex.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn phase_pulls_vertices_toward_the_center() {
    let data_set = RadarDataSet::from_values(&[10.0, 10.0, 10.0], "grow").expect("data set");
    let vertices = radar_vertices(&data_set, geometry(3), 10.0, 0.5);
    for vertex in vertices {
        let distance = ((vertex.x - 50.0).powi(2) + (vertex.y - 50.0).powi(2)).sqrt();
        assert_abs_diff_eq!(distance, 20.0, epsilon = 1e-9);
    }
}

#[test]
fn fewer_than_three_axes_is_a_no_op() {
    let data_set = RadarDataSet::from_values(&[4.0, 8.0], "line").expect("data set");
    let labels = vec!["a".to_owned(), "b".to_owned()];
    let mut frame = frame();
    draw_radar_web(&mut frame, geometry(2), &RadarWebStyle::default());
    draw_radar_data_set(&mut frame, &data_set, geometry(2), 8.0, 1.0);
    draw_radar_labels(&mut frame, geometry(2), &labels, 10.0, Color::BLACK);
    assert!(frame.is_empty());
    assert!(radar_vertices(&data_set, geometry(2), 8.0, 1.0).is_empty());
}

#[test]
fn zero_max_value_draws_nothing() {
    let data_set = RadarDataSet::from_values(&[0.0, 0.0, 0.0], "zero").expect("data set");
    let mut frame = frame();
    draw_radar_data_set(&mut frame, &data_set, geometry(3), 0.0, 1.0);
    assert!(frame.is_empty());
}

#[test]
fn filled_data_set_draws_fill_then_outline() {
    let data_set = RadarDataSet::from_values(&[1.0, 2.0, 3.0], "filled").expect("data set");
    let mut frame = frame();
    draw_radar_data_set(&mut frame, &data_set, geometry(3), 3.0, 1.0);
    frame.validate().expect("valid frame");
    let paths: Vec<_> = frame.paths().collect();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].paint.style, PaintStyle::Fill);
    assert_eq!(paths[1].paint.style, PaintStyle::Stroke);

    let outline_only = data_set.without_fill();
    let mut frame = self::frame();
    draw_radar_data_set(&mut frame, &outline_only, geometry(3), 3.0, 1.0);
    assert_eq!(frame.paths().count(), 1);
}

#[test]
fn web_draws_spokes_and_rings() {
    let mut frame = frame();
    draw_radar_web(&mut frame, geometry(6), &RadarWebStyle::default());
    frame.validate().expect("valid frame");
    assert_eq!(frame.lines().count(), 6);
    assert_eq!(frame.paths().count(), 5);
}

#[test]
fn skipped_spokes_are_not_drawn() {
    let web = RadarWebStyle {
        skip_line_count: 1,
        ..RadarWebStyle::default()
    };
    let mut frame = frame();
    draw_radar_web(&mut frame, geometry(6), &web);
    assert_eq!(frame.lines().count(), 3);
}

#[test]
fn labels_sit_outside_the_outer_ring() {
    let labels: Vec<String> = ["n", "e", "s", "w"].iter().map(|label| (*label).to_owned()).collect();
    let mut frame = frame();
    draw_radar_labels(&mut frame, geometry(4), &labels, 10.0, Color::BLACK);
    let texts: Vec<_> = frame.texts().collect();
    assert_eq!(texts.len(), 4);
    // "n" is centered above the top spoke, 16 px past the ring
    assert_abs_diff_eq!(texts[0].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(texts[0].y, 50.0 - 56.0 - 6.0, epsilon = 1e-9);
}

#[test]
fn radar_chart_draws_web_under_the_data() {
    let data = RadarData::new(vec![
        RadarDataSet::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0], "first").expect("data set"),
    ])
    .with_labels(["a", "b", "c", "d", "e"]);
    let frame_config = ChartFrameConfig::default().with_legend(LegendConfig::disabled());
    let mut frame = RenderFrame::new(Size::new(300.0, 300.0));
    draw_radar_chart(
        &mut frame,
        Size::new(300.0, 300.0),
        &data,
        &frame_config,
        &RadarChartConfig::default(),
        1.0,
    );
    frame.validate().expect("valid frame");

    let first_web = frame
        .commands
        .iter()
        .position(|command| matches!(command, DrawCommand::Line(_)))
        .expect("spoke");
    let clip = frame
        .commands
        .iter()
        .position(|command| matches!(command, DrawCommand::PushClip(_)))
        .expect("clip");
    assert!(first_web < clip);
    assert_eq!(frame.texts().count(), 5);
}
