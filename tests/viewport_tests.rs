use approx::assert_abs_diff_eq;
use chart_canvas::core::{DataBounds, Insets, Point, Size, Viewport};

fn viewport() -> Viewport {
    Viewport::create(
        Size::new(400.0, 300.0),
        Insets::new(40.0, 20.0, 10.0, 30.0),
        DataBounds::new(0.0, 10.0, -50.0, 50.0),
    )
}

#[test]
fn content_rect_is_canvas_minus_insets() {
    let content = viewport().content_rect();
    assert_abs_diff_eq!(content.left, 40.0);
    assert_abs_diff_eq!(content.top, 20.0);
    assert_abs_diff_eq!(content.right, 390.0);
    assert_abs_diff_eq!(content.bottom, 270.0);
}

#[test]
fn y_axis_is_inverted() {
    let viewport = viewport();
    assert_abs_diff_eq!(viewport.data_to_pixel_y(-50.0), 270.0);
    assert_abs_diff_eq!(viewport.data_to_pixel_y(50.0), 20.0);
    assert_abs_diff_eq!(viewport.data_to_pixel_y(0.0), 145.0);
    assert_abs_diff_eq!(viewport.baseline_y(), 145.0);
}

#[test]
fn pixel_to_data_inverts_data_to_pixel() {
    let viewport = viewport();
    for value in [0.0, 2.5, 7.25, 10.0] {
        let pixel = viewport.data_to_pixel_x(value);
        assert_abs_diff_eq!(viewport.pixel_to_data_x(pixel), value, epsilon = 1e-9);
    }
    for value in [-50.0, -3.3, 0.0, 49.9] {
        let pixel = viewport.data_to_pixel_y(value);
        assert_abs_diff_eq!(viewport.pixel_to_data_y(pixel), value, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_range_uses_one_data_unit() {
    let viewport = Viewport::create(
        Size::new(200.0, 100.0),
        Insets::default(),
        DataBounds::new(5.0, 5.0, 3.0, 3.0),
    );
    assert_abs_diff_eq!(viewport.x_range(), 1.0);
    assert_abs_diff_eq!(viewport.y_range(), 1.0);
    let x = viewport.data_to_pixel_x(5.0);
    let y = viewport.data_to_pixel_y(3.0);
    assert!(x.is_finite() && y.is_finite());
    assert_abs_diff_eq!(x, 0.0);
    assert_abs_diff_eq!(y, 100.0);
}

#[test]
fn in_bounds_checks_are_inclusive() {
    let viewport = viewport();
    assert!(viewport.is_in_bounds_x(40.0));
    assert!(viewport.is_in_bounds_x(390.0));
    assert!(!viewport.is_in_bounds_x(39.0));
    assert!(!viewport.is_in_bounds_x(391.0));
    assert!(viewport.is_in_bounds(Point::new(40.0, 270.0)));
    assert!(!viewport.is_in_bounds(Point::new(100.0, 271.0)));
    // the projected right edge must count as visible despite rounding
    assert!(viewport.is_in_bounds_x(viewport.data_to_pixel_x(10.0)));
}

#[test]
fn non_finite_bounds_fall_back_to_unit_range() {
    let viewport = Viewport::create(
        Size::new(100.0, 100.0),
        Insets::default(),
        DataBounds::new(f64::NAN, 4.0, 0.0, f64::INFINITY),
    );
    assert!(viewport.data_to_pixel_x(0.5).is_finite());
    assert!(viewport.data_to_pixel_y(0.5).is_finite());
}

#[test]
fn oversized_insets_collapse_the_content_rect() {
    let viewport = Viewport::create(
        Size::new(50.0, 40.0),
        Insets::uniform(30.0),
        DataBounds::new(0.0, 1.0, 0.0, 1.0),
    );
    assert_abs_diff_eq!(viewport.content_width(), 0.0);
    assert_abs_diff_eq!(viewport.content_height(), 0.0);
    assert_abs_diff_eq!(viewport.pixel_to_data_x(12.0), 0.0);
}

#[test]
fn swapped_exchanges_data_ranges() {
    let swapped = viewport().swapped();
    assert_abs_diff_eq!(swapped.x_min(), -50.0);
    assert_abs_diff_eq!(swapped.x_max(), 50.0);
    assert_abs_diff_eq!(swapped.y_min(), 0.0);
    assert_abs_diff_eq!(swapped.y_max(), 10.0);
    assert_eq!(swapped.content_rect(), viewport().content_rect());
}
