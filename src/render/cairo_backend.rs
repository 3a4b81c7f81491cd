use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, DashPattern, DrawCommand, LineCap, Paint, PathCommand, RenderFrame,
    Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub shapes_drawn: usize,
    pub texts_drawn: usize,
    pub clips_pushed: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a widget draw callback owned by the host toolkit).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.set_line_cap(map_line_cap(line.cap));
                    apply_dash(context, line.dash.as_ref());
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Rect(rect) => {
                    context.new_path();
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    paint_current_path(context, &rect.paint)?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    context.new_path();
                    context.arc(
                        circle.center_x,
                        circle.center_y,
                        circle.radius,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    context.close_path();
                    paint_current_path(context, &circle.paint)?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Arc(arc) => {
                    append_arc_path(context, arc);
                    paint_current_path(context, &arc.paint)?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Path(path) => {
                    context.new_path();
                    for segment in &path.commands {
                        match *segment {
                            PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
                            PathCommand::LineTo(point) => context.line_to(point.x, point.y),
                            PathCommand::CubicTo {
                                control1,
                                control2,
                                to,
                            } => context.curve_to(
                                control1.x, control1.y, control2.x, control2.y, to.x, to.y,
                            ),
                            PathCommand::Close => context.close_path(),
                        }
                    }
                    paint_current_path(context, &path.paint)?;
                    stats.shapes_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    let font_description =
                        FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&text.text);

                    let (text_width, _text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(context, text.color);
                    context.move_to(x, text.y);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
                DrawCommand::PushClip(rect) => {
                    context
                        .save()
                        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
                    context.new_path();
                    context.rectangle(rect.left, rect.top, rect.width(), rect.height());
                    context.clip();
                    stats.clips_pushed += 1;
                }
                DrawCommand::PopClip => {
                    context
                        .restore()
                        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_dash(context: &Context, dash: Option<&DashPattern>) {
    match dash {
        Some(dash) => context.set_dash(&dash.intervals, dash.phase),
        None => context.set_dash(&[], 0.0),
    }
}

fn map_line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

fn append_arc_path(context: &Context, arc: &ArcPrimitive) {
    let start = arc.start_angle_deg.to_radians();
    let end = (arc.start_angle_deg + arc.sweep_angle_deg).to_radians();
    context.new_path();
    if arc.use_center {
        context.move_to(arc.center_x, arc.center_y);
    }
    if arc.sweep_angle_deg >= 0.0 {
        context.arc(arc.center_x, arc.center_y, arc.radius, start, end);
    } else {
        context.arc_negative(arc.center_x, arc.center_y, arc.radius, start, end);
    }
    if arc.use_center {
        context.close_path();
    }
}

fn paint_current_path(context: &Context, paint: &Paint) -> ChartResult<()> {
    if paint.style.fills() {
        apply_color(context, paint.color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }
    if paint.style.strokes() {
        apply_color(context, paint.resolved_stroke_color());
        context.set_line_width(paint.stroke_width);
        context.set_line_cap(map_line_cap(paint.cap));
        apply_dash(context, paint.dash.as_ref());
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }
    context.new_path();
    Ok(())
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
