use tracing::{trace, warn};

use crate::core::{ChartDataSet, Entry, LineDataSet, LineMode, Point, Viewport};
use crate::render::{CirclePrimitive, DrawSurface, LinePrimitive, Paint, PathPrimitive};

use super::value_labels::draw_value_label;

/// Bezier control points for the segment `previous -> current`, pulled along
/// the neighbouring chords by `intensity`.
#[must_use]
pub fn cubic_control_points(
    before_previous: Point,
    previous: Point,
    current: Point,
    next: Point,
    intensity: f64,
) -> (Point, Point) {
    let control1 = Point::new(
        previous.x + (current.x - before_previous.x) * intensity,
        previous.y + (current.y - before_previous.y) * intensity,
    );
    let control2 = Point::new(
        current.x - (next.x - previous.x) * intensity,
        current.y - (next.y - previous.y) * intensity,
    );
    (control1, control2)
}

/// Index range of entries to draw: the entries inside the X bounds plus one
/// neighbour on each side so segments reach the content edges.
fn visible_range(entries: &[Entry], viewport: &Viewport) -> Option<(usize, usize)> {
    let first = entries
        .iter()
        .position(|entry| entry.x >= viewport.x_min())?;
    let last = entries
        .iter()
        .rposition(|entry| entry.x <= viewport.x_max())?;
    if first > last {
        return None;
    }
    Some((first.saturating_sub(1), (last + 1).min(entries.len() - 1)))
}

/// Appends the plotted curve through `points` to `path`, starting with a
/// `MoveTo` unless `connect` is set.
fn trace_curve(path: &mut PathPrimitive, points: &[Point], mode: LineMode, intensity: f64, connect: bool) {
    let Some(first) = points.first().copied() else {
        return;
    };
    if connect {
        path.line_to(first);
    } else {
        path.move_to(first);
    }
    let last_index = points.len() - 1;
    for index in 1..points.len() {
        let previous = points[index - 1];
        let current = points[index];
        match mode {
            LineMode::Linear => path.line_to(current),
            LineMode::Stepped => {
                path.line_to(Point::new(current.x, previous.y));
                path.line_to(current);
            }
            LineMode::CubicBezier => {
                let before_previous = points[index.saturating_sub(2)];
                let next = points[(index + 1).min(last_index)];
                let (control1, control2) =
                    cubic_control_points(before_previous, previous, current, next, intensity);
                path.cubic_to(control1, control2, current);
            }
            LineMode::HorizontalBezier => {
                let mid_x = previous.x + (current.x - previous.x) / 2.0;
                path.cubic_to(
                    Point::new(mid_x, previous.y),
                    Point::new(mid_x, current.y),
                    current,
                );
            }
        }
    }
}

/// Draws the optional area fill, the line itself and the point circles.
pub fn draw_line_data_set(
    surface: &mut dyn DrawSurface,
    data_set: &LineDataSet,
    viewport: &Viewport,
    phase: f64,
) {
    if !data_set.is_visible() || data_set.is_empty() {
        return;
    }
    let entries = data_set.entries();
    let Some((start, end)) = visible_range(entries, viewport) else {
        trace!(label = data_set.label(), "line data set outside x bounds");
        return;
    };
    trace!(
        label = data_set.label(),
        entries = end - start + 1,
        "drawing line data set"
    );

    let style = data_set.style();
    let line = data_set.line_style();
    let intensity = line.effective_cubic_intensity();
    let points: Vec<Point> = entries[start..=end]
        .iter()
        .map(|entry| viewport.data_to_pixel(entry.x, entry.y * phase))
        .collect();

    if line.fill.enabled && points.len() > 1 {
        let baseline = viewport.baseline_y();
        let mut fill = PathPrimitive::with_capacity(
            points.len() * 2 + 3,
            Paint::fill(line.fill.color.with_alpha(line.fill.alpha)),
        );
        fill.move_to(Point::new(points[0].x, baseline));
        trace_curve(&mut fill, &points, line.mode, intensity, true);
        fill.line_to(Point::new(points[points.len() - 1].x, baseline));
        fill.close();
        surface.draw_path(fill);
    }

    if line.line_width > 0.0 && points.len() > 1 {
        match line.mode {
            LineMode::Linear | LineMode::Stepped => {
                for (offset, pair) in points.windows(2).enumerate() {
                    let color = style.color(start + offset);
                    let (from, to) = (pair[0], pair[1]);
                    if line.mode == LineMode::Stepped {
                        let corner = Point::new(to.x, from.y);
                        surface.draw_line(
                            LinePrimitive::between(from, corner, line.line_width, color)
                                .with_cap(line.line_cap)
                                .with_dash(line.dash.clone()),
                        );
                        surface.draw_line(
                            LinePrimitive::between(corner, to, line.line_width, color)
                                .with_cap(line.line_cap)
                                .with_dash(line.dash.clone()),
                        );
                    } else {
                        surface.draw_line(
                            LinePrimitive::between(from, to, line.line_width, color)
                                .with_cap(line.line_cap)
                                .with_dash(line.dash.clone()),
                        );
                    }
                }
            }
            LineMode::CubicBezier | LineMode::HorizontalBezier => {
                let paint = Paint::stroke(style.first_color(), line.line_width)
                    .with_cap(line.line_cap)
                    .with_dash(line.dash.clone());
                let mut path = PathPrimitive::with_capacity(points.len() + 1, paint);
                trace_curve(&mut path, &points, line.mode, intensity, false);
                surface.draw_path(path);
            }
        }
    }

    let circle = &line.circle;
    if circle.enabled && circle.radius > 0.0 {
        let draw_hole = circle.hole_enabled && circle.hole_radius > 0.0;
        if draw_hole && circle.hole_radius >= circle.radius {
            warn!(
                hole_radius = circle.hole_radius,
                radius = circle.radius,
                "circle hole not smaller than circle, skipping holes"
            );
        }
        for (offset, point) in points.iter().enumerate() {
            if !viewport.is_in_bounds(*point) {
                continue;
            }
            surface.draw_circle(CirclePrimitive::new(
                *point,
                circle.radius,
                Paint::fill(circle.color(start + offset)),
            ));
            if draw_hole && circle.hole_radius < circle.radius {
                surface.draw_circle(CirclePrimitive::new(
                    *point,
                    circle.hole_radius,
                    Paint::fill(circle.hole_color),
                ));
            }
        }
    }

    if style.draw_values {
        for (entry, point) in entries[start..=end].iter().zip(&points) {
            if viewport.is_in_bounds(*point) {
                draw_value_label(surface, style, entry.y, *point);
            }
        }
    }
}
