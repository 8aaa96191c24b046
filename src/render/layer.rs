use kurbo::{PathEl, Shape};

use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgb8};
use crate::foundation::error::{PosterError, PosterResult};
use crate::render::composite::over_in_place;
use crate::render::frame::PosterFrame;

const PATH_TOLERANCE: f64 = 0.1;

/// A transparent vector layer rasterized by `vello_cpu`.
///
/// Shapes are accumulated into a fresh render context; [`ShapeLayer::composite_onto`] renders
/// the layer into a transparent pixmap and premul-overs it onto the frame.
pub(crate) struct ShapeLayer {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl ShapeLayer {
    pub(crate) fn new(canvas: Canvas) -> PosterResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PosterError::render("layer width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PosterError::render("layer height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self { ctx, width, height })
    }

    /// Fill any closed shape.
    pub(crate) fn fill_shape(&mut self, shape: &impl Shape, color: Rgb8, alpha: u8) {
        self.fill_path(&shape.to_path(PATH_TOLERANCE), color, alpha);
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgb8, alpha: u8) {
        if alpha == 0 {
            return;
        }
        self.ctx.set_paint(color.with_alpha(alpha));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgb8, alpha: u8) {
        if alpha == 0 {
            return;
        }
        self.ctx.set_paint(color.with_alpha(alpha));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    /// Fill a constant-width band following `points`.
    pub(crate) fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgb8, alpha: u8) {
        if let Some(path) = ribbon(points, width) {
            self.fill_path(&path, color, alpha);
        }
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    pub(crate) fn composite_onto(mut self, frame: &mut PosterFrame) -> PosterResult<()> {
        if u32::from(self.width) != frame.width || u32::from(self.height) != frame.height {
            return Err(PosterError::render("layer size does not match frame"));
        }
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        over_in_place(&mut frame.data, pixmap.data_as_u8_slice())
    }
}

/// Outline of a polyline thickened to `width`, as a closed polygon.
///
/// Each vertex is offset along the normal of its averaged tangent, so joints stay connected
/// without overlapping segments.
pub(crate) fn ribbon(points: &[Point], width: f64) -> Option<BezPath> {
    if points.len() < 2 || !width.is_finite() || width <= 0.0 {
        return None;
    }
    let half = width / 2.0;
    let n = points.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(n - 1)];
        let tangent = next - prev;
        let len = tangent.hypot();
        if len <= f64::EPSILON {
            continue;
        }
        let normal = kurbo::Vec2::new(-tangent.y / len, tangent.x / len) * half;
        left.push(points[i] + normal);
        right.push(points[i] - normal);
    }
    if left.len() < 2 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(left[0]);
    for p in &left[1..] {
        path.line_to(*p);
    }
    for p in right.iter().rev() {
        path.line_to(*p);
    }
    path.close_path();
    Some(path)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
