use approx::assert_abs_diff_eq;
use chart_canvas::api::{
    BUBBLE_ALPHA, bubble_radius, draw_bubble_data_set, draw_bubble_highlight,
};
use chart_canvas::core::{
    BubbleData, BubbleDataSet, BubbleStyle, DataBounds, Insets, Size, Viewport,
};
use chart_canvas::render::{PaintStyle, RenderFrame};

// content width 100, so the largest bubble gets a 10 px radius
fn viewport() -> Viewport {
    Viewport::create(
        Size::new(100.0, 100.0),
        Insets::default(),
        DataBounds::new(0.0, 10.0, 0.0, 10.0),
    )
}

fn frame() -> RenderFrame {
    RenderFrame::new(Size::new(100.0, 100.0))
}

fn bubbles() -> BubbleDataSet {
    BubbleDataSet::from_triples(&[(2.0, 2.0, 1.0), (5.0, 5.0, 2.0), (8.0, 8.0, 4.0)], "sizes")
        .expect("data set")
}

#[test]
fn normalized_radii_scale_against_the_largest_size() {
    let data_set = bubbles();
    let mut frame = frame();
    draw_bubble_data_set(&mut frame, &data_set, &viewport(), data_set.max_size(), 1.0);
    frame.validate().expect("valid frame");

    let radii: Vec<f64> = frame.circles().map(|circle| circle.radius).collect();
    assert_eq!(radii, vec![2.5, 5.0, 10.0]);
    for circle in frame.circles() {
        assert_abs_diff_eq!(circle.paint.color.alpha, BUBBLE_ALPHA);
    }
}

#[test]
fn all_zero_sizes_draw_nothing() {
    let data_set = BubbleDataSet::from_triples(&[(2.0, 2.0, 0.0), (5.0, 5.0, 0.0)], "flat")
        .expect("data set");
    let mut frame = frame();
    draw_bubble_data_set(&mut frame, &data_set, &viewport(), data_set.max_size(), 1.0);
    assert!(frame.is_empty());
}

#[test]
fn zero_max_size_never_divides() {
    assert_abs_diff_eq!(bubble_radius(3.0, 0.0, 10.0, true, 1.0), 0.0);
    assert_abs_diff_eq!(bubble_radius(3.0, 0.0, 10.0, false, 1.0), 3.0);
}

#[test]
fn raw_sizes_are_used_without_normalization() {
    let data_set = bubbles().with_bubble_style(BubbleStyle {
        normalize_size: false,
        ..BubbleStyle::default()
    });
    let mut frame = frame();
    draw_bubble_data_set(&mut frame, &data_set, &viewport(), data_set.max_size(), 0.5);
    let radii: Vec<f64> = frame.circles().map(|circle| circle.radius).collect();
    assert_eq!(radii, vec![0.5, 1.0, 2.0]);
}

#[test]
fn shared_max_size_keeps_data_sets_comparable() {
    let small = BubbleDataSet::from_triples(&[(1.0, 1.0, 2.0)], "small").expect("data set");
    let large = BubbleDataSet::from_triples(&[(2.0, 2.0, 8.0)], "large").expect("data set");
    let data = BubbleData::new(vec![small, large]);
    assert_abs_diff_eq!(data.max_bubble_size(), 8.0);

    let mut frame = frame();
    draw_bubble_data_set(&mut frame, &data.data_sets()[0], &viewport(), data.max_bubble_size(), 1.0);
    let circle = frame.circles().next().expect("bubble");
    assert_abs_diff_eq!(circle.radius, 2.5);
}

#[test]
fn highlight_rings_the_bubble() {
    let data_set = bubbles();
    let mut frame = frame();
    draw_bubble_highlight(&mut frame, &data_set, &viewport(), data_set.max_size(), 1.0, 2);
    let ring = frame.circles().next().expect("ring");
    assert_abs_diff_eq!(ring.radius, 12.5);
    assert_eq!(ring.paint.style, PaintStyle::Stroke);

    let mut frame = self::frame();
    draw_bubble_highlight(&mut frame, &data_set, &viewport(), data_set.max_size(), 1.0, 9);
    assert!(frame.is_empty());
}
