use serde::{Deserialize, Serialize};

use crate::core::{DataBounds, Insets, Point, Rect, Size};

const EDGE_TOLERANCE_PX: f64 = 1e-6;

/// Affine mapping between data space and the pixel-space content rectangle.
///
/// Rebuilt for every draw from the current canvas size, insets and data
/// bounds; never cache one across a data or size change. The Y axis is
/// inverted because the screen origin is top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    canvas: Size,
    content: Rect,
    bounds: DataBounds,
}

impl Viewport {
    /// Builds the mapping. Never fails: non-finite input is sanitized
    /// (canvas dimensions to `0`, data bounds to `[0, 1]`) and an inset larger
    /// than the canvas collapses the content rectangle to zero extent.
    #[must_use]
    pub fn create(canvas: Size, insets: Insets, bounds: DataBounds) -> Self {
        let canvas = Size::new(finite_or(canvas.width, 0.0), finite_or(canvas.height, 0.0));
        let insets = Insets::new(
            finite_or(insets.left, 0.0),
            finite_or(insets.top, 0.0),
            finite_or(insets.right, 0.0),
            finite_or(insets.bottom, 0.0),
        );
        let mut content = Rect::from_size(canvas).inset(insets);
        if content.right < content.left {
            content.right = content.left;
        }
        if content.bottom < content.top {
            content.bottom = content.top;
        }

        Self {
            canvas,
            content,
            bounds: sanitize_bounds(bounds),
        }
    }

    /// Same canvas and content rectangle with the data bounds replaced.
    #[must_use]
    pub fn with_bounds(self, bounds: DataBounds) -> Self {
        Self {
            bounds: sanitize_bounds(bounds),
            ..self
        }
    }

    /// Viewport with the X and Y data ranges exchanged, for charts whose
    /// value axis runs horizontally.
    #[must_use]
    pub fn swapped(self) -> Self {
        self.with_bounds(DataBounds::new(
            self.bounds.y_min,
            self.bounds.y_max,
            self.bounds.x_min,
            self.bounds.x_max,
        ))
    }

    #[must_use]
    pub fn canvas_size(self) -> Size {
        self.canvas
    }

    #[must_use]
    pub fn content_rect(self) -> Rect {
        self.content
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        self.content.width()
    }

    #[must_use]
    pub fn content_height(self) -> f64 {
        self.content.height()
    }

    #[must_use]
    pub fn bounds(self) -> DataBounds {
        self.bounds
    }

    #[must_use]
    pub fn x_min(self) -> f64 {
        self.bounds.x_min
    }

    #[must_use]
    pub fn x_max(self) -> f64 {
        self.bounds.x_max
    }

    #[must_use]
    pub fn y_min(self) -> f64 {
        self.bounds.y_min
    }

    #[must_use]
    pub fn y_max(self) -> f64 {
        self.bounds.y_max
    }

    /// Data X range; a degenerate (zero) range counts as one data unit.
    #[must_use]
    pub fn x_range(self) -> f64 {
        non_zero_range(self.bounds.x_max - self.bounds.x_min)
    }

    #[must_use]
    pub fn y_range(self) -> f64 {
        non_zero_range(self.bounds.y_max - self.bounds.y_min)
    }

    /// Pixels per data unit along X.
    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.content_width() / self.x_range()
    }

    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.content_height() / self.y_range()
    }

    #[must_use]
    pub fn data_to_pixel_x(self, x: f64) -> f64 {
        self.content.left + (x - self.bounds.x_min) * self.scale_x()
    }

    #[must_use]
    pub fn data_to_pixel_y(self, y: f64) -> f64 {
        self.content.bottom - (y - self.bounds.y_min) * self.scale_y()
    }

    #[must_use]
    pub fn data_to_pixel(self, x: f64, y: f64) -> Point {
        Point::new(self.data_to_pixel_x(x), self.data_to_pixel_y(y))
    }

    /// Inverse of [`Self::data_to_pixel_x`]. A zero-width content rectangle
    /// has no inverse; every pixel then maps to `x_min`.
    #[must_use]
    pub fn pixel_to_data_x(self, pixel_x: f64) -> f64 {
        let scale = self.scale_x();
        if scale == 0.0 {
            return self.bounds.x_min;
        }
        self.bounds.x_min + (pixel_x - self.content.left) / scale
    }

    #[must_use]
    pub fn pixel_to_data_y(self, pixel_y: f64) -> f64 {
        let scale = self.scale_y();
        if scale == 0.0 {
            return self.bounds.y_min;
        }
        self.bounds.y_min + (self.content.bottom - pixel_y) / scale
    }

    /// Inclusive test of a pixel X against the content rectangle, tolerant of
    /// sub-micropixel rounding at the edges.
    #[must_use]
    pub fn is_in_bounds_x(self, pixel_x: f64) -> bool {
        pixel_x >= self.content.left - EDGE_TOLERANCE_PX
            && pixel_x <= self.content.right + EDGE_TOLERANCE_PX
    }

    #[must_use]
    pub fn is_in_bounds_y(self, pixel_y: f64) -> bool {
        pixel_y >= self.content.top - EDGE_TOLERANCE_PX
            && pixel_y <= self.content.bottom + EDGE_TOLERANCE_PX
    }

    #[must_use]
    pub fn is_in_bounds(self, point: Point) -> bool {
        self.is_in_bounds_x(point.x) && self.is_in_bounds_y(point.y)
    }

    /// Pixel Y of data value `0`, clamped into the content rectangle.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.data_to_pixel_y(0.0)
            .clamp(self.content.top, self.content.bottom)
    }

    /// Pixel X of data value `0`, clamped into the content rectangle.
    #[must_use]
    pub fn baseline_x(self) -> f64 {
        self.data_to_pixel_x(0.0)
            .clamp(self.content.left, self.content.right)
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn non_zero_range(range: f64) -> f64 {
    if range == 0.0 { 1.0 } else { range }
}

fn sanitize_bounds(bounds: DataBounds) -> DataBounds {
    let (x_min, x_max) = sanitize_range(bounds.x_min, bounds.x_max);
    let (y_min, y_max) = sanitize_range(bounds.y_min, bounds.y_max);
    DataBounds::new(x_min, x_max, y_min, y_max)
}

fn sanitize_range(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min > max { (max, min) } else { (min, max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_maps_to_finite_pixels() {
        let viewport = Viewport::create(
            Size::new(200.0, 100.0),
            Insets::uniform(10.0),
            DataBounds::new(5.0, 5.0, 3.0, 3.0),
        );
        assert_eq!(viewport.x_range(), 1.0);
        assert_eq!(viewport.data_to_pixel_x(5.0), 10.0);
        assert_eq!(viewport.data_to_pixel_y(3.0), 90.0);
    }

    #[test]
    fn oversized_insets_collapse_content() {
        let viewport = Viewport::create(
            Size::new(20.0, 20.0),
            Insets::uniform(15.0),
            DataBounds::new(0.0, 1.0, 0.0, 1.0),
        );
        assert_eq!(viewport.content_width(), 0.0);
        assert_eq!(viewport.pixel_to_data_x(15.0), 0.0);
    }
}
