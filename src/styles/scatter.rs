use std::f64::consts::{PI, TAU};

use kurbo::{Circle, Ellipse, Shape};

use crate::design::modes::{CityMotif, ScatterFlavor};
use crate::design::palette::Palette;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8};
use crate::foundation::error::PosterResult;
use crate::foundation::math::px;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::layer::ShapeLayer;
use crate::render::noise::apply_noise;
use crate::styles::motifs::draw_motifs;

pub(crate) const SCATTER_ALPHA: u8 = 190;
pub(crate) const SCATTER_NOISE: f64 = 0.04;

const CYBERPUNK_LINE: Rgb8 = Rgb8::new(255, 0, 200);
const FILM_BORDER: Rgb8 = Rgb8::new(80, 60, 40);
const SHIMMER_DOT: Rgb8 = Rgb8::new(255, 255, 255);
const BRUTALIST_GRID: Rgb8 = Rgb8::new(170, 170, 170);
const SHIMMER_DOTS: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    Ellipse,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    const ALL: [ShapeKind; 3] = [Self::Ellipse, Self::Rectangle, Self::Triangle];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScatterShape {
    pub(crate) kind: ShapeKind,
    pub(crate) center: Point,
    pub(crate) size: f64,
    pub(crate) palette_index: usize,
    pub(crate) rotation: f64,
}

impl ScatterShape {
    fn path(&self) -> BezPath {
        let r = self.size;
        match self.kind {
            ShapeKind::Ellipse => {
                Ellipse::new(self.center, (r, r * 0.7), self.rotation).to_path(0.1)
            }
            ShapeKind::Rectangle => {
                let rect = Rect::from_center_size(self.center, (r * 1.6, r));
                Affine::rotate_about(self.rotation, self.center) * rect.to_path(0.1)
            }
            ShapeKind::Triangle => {
                let mut path = BezPath::new();
                for i in 0..3 {
                    let a = self.rotation + TAU * i as f64 / 3.0;
                    let p = Point::new(self.center.x + r * a.cos(), self.center.y + r * a.sin());
                    if i == 0 {
                        path.move_to(p);
                    } else {
                        path.line_to(p);
                    }
                }
                path.close_path();
                path
            }
        }
    }
}

pub(crate) fn shape_count(intensity: f64) -> usize {
    (8.0 + 52.0 * intensity).round() as usize
}

/// Per shape: kind, center x, center y, size, palette index, rotation.
pub(crate) fn sample_shapes(
    width: f64,
    height: f64,
    scale: f64,
    intensity: f64,
    palette_len: usize,
    rng: &mut PosterRng,
) -> Vec<ScatterShape> {
    (0..shape_count(intensity))
        .map(|_| {
            let kind = ShapeKind::ALL[rng.index(ShapeKind::ALL.len())];
            let x = rng.range_f64(0.0, width);
            let y = rng.range_f64(0.0, height);
            let size = rng.range_f64(200.0, 400.0) * scale * 0.5;
            let palette_index = rng.index(palette_len);
            let rotation = rng.range_f64(0.0, PI);
            ScatterShape {
                kind,
                center: Point::new(x, y),
                size,
                palette_index,
                rotation,
            }
        })
        .collect()
}

/// Overlapping translucent shapes, an art-style overlay, then city motifs and grain.
pub(crate) fn apply_shape_scatter(
    frame: &mut PosterFrame,
    palette: &Palette,
    intensity: f64,
    flavor: ScatterFlavor,
    motifs: &[CityMotif],
    rng: &mut PosterRng,
) -> PosterResult<()> {
    let canvas = frame.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let shapes = sample_shapes(w, h, canvas.scale(), intensity, palette.len(), rng);
    tracing::debug!(shapes = shapes.len(), flavor = flavor.as_str(), "shape scatter");

    let mut layer = ShapeLayer::new(canvas)?;
    for shape in &shapes {
        layer.fill_path(&shape.path(), palette.cyclic(shape.palette_index), SCATTER_ALPHA);
    }
    draw_flavor(&mut layer, flavor, w, h, canvas.scale(), rng);
    draw_motifs(&mut layer, motifs, palette, w, h, canvas.scale());
    layer.composite_onto(frame)?;

    apply_noise(frame, SCATTER_NOISE, rng);
    Ok(())
}

fn draw_flavor(
    layer: &mut ShapeLayer,
    flavor: ScatterFlavor,
    w: f64,
    h: f64,
    scale: f64,
    rng: &mut PosterRng,
) {
    let step = |reference: f64| f64::from(px(reference * scale, 1));
    match flavor {
        ScatterFlavor::Dreamy => {}
        ScatterFlavor::Cyberpunk => {
            let (spacing, line) = (step(40.0), step(3.0));
            vertical_lines(layer, w, h, spacing, line, CYBERPUNK_LINE);
        }
        ScatterFlavor::FilmMood => {
            let b = step(80.0).min(w / 2.0).min(h / 2.0);
            for rect in [
                Rect::new(0.0, 0.0, w, b),
                Rect::new(0.0, h - b, w, h),
                Rect::new(0.0, b, b, h - b),
                Rect::new(w - b, b, w, h - b),
            ] {
                layer.fill_rect(rect, FILM_BORDER, 255);
            }
        }
        ScatterFlavor::Shimmer => {
            let r = 8.0 * scale;
            for _ in 0..SHIMMER_DOTS {
                let x = rng.range_f64(0.0, w);
                let y = rng.range_f64(0.0, h);
                layer.fill_shape(&Circle::new((x, y), r), SHIMMER_DOT, 255);
            }
        }
        ScatterFlavor::BrutalistGrid => {
            let (spacing, line) = (step(120.0), step(4.0));
            let mut y = 0.0;
            while y < h {
                let rect = Rect::new(0.0, y - line / 2.0, w, y + line / 2.0);
                layer.fill_rect(rect, BRUTALIST_GRID, 255);
                y += spacing;
            }
            vertical_lines(layer, w, h, spacing, line, BRUTALIST_GRID);
        }
    }
}

fn vertical_lines(layer: &mut ShapeLayer, w: f64, h: f64, spacing: f64, line: f64, color: Rgb8) {
    let mut x = 0.0;
    while x < w {
        layer.fill_rect(Rect::new(x - line / 2.0, 0.0, x + line / 2.0, h), color, 255);
        x += spacing;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/styles/scatter.rs"]
mod tests;
