use std::f64::consts::PI;

use crate::design::modes::CityMotif;
use crate::design::palette::Palette;
use crate::foundation::core::{Point, Rect};
use crate::render::layer::ShapeLayer;

const ARC_SAMPLES: usize = 24;

/// Draw each motif once, in [`CityMotif::ALL`] order. Consumes no randomness.
pub(crate) fn draw_motifs(
    layer: &mut ShapeLayer,
    motifs: &[CityMotif],
    palette: &Palette,
    w: f64,
    h: f64,
    scale: f64,
) {
    for motif in CityMotif::ALL {
        if !motifs.contains(&motif) {
            continue;
        }
        match motif {
            CityMotif::VerticalLines => vertical_lines(layer, palette, w, h, scale),
            CityMotif::PixelGrid => pixel_grid(layer, palette, w, h, scale),
            CityMotif::ArcRows => arc_rows(layer, palette, w, h, scale),
        }
    }
}

fn vertical_lines(layer: &mut ShapeLayer, palette: &Palette, w: f64, h: f64, scale: f64) {
    let color = palette.cyclic(1);
    let half = (2.0 * scale).max(1.0) / 2.0;
    let spacing = w / 12.0;
    for k in 1..12 {
        let x = spacing * f64::from(k);
        layer.fill_rect(Rect::new(x - half, 0.0, x + half, h), color, 120);
    }
}

fn pixel_grid(layer: &mut ShapeLayer, palette: &Palette, w: f64, h: f64, scale: f64) {
    let color = palette.cyclic(2);
    let cell = (48.0 * scale).max(2.0);
    let square = (6.0 * scale).max(1.0);
    let inset = (cell - square) / 2.0;
    let mut y = 0.0;
    while y < h {
        let mut x = 0.0;
        while x < w {
            layer.fill_rect(
                Rect::from_origin_size((x + inset, y + inset), (square, square)),
                color,
                150,
            );
            x += cell;
        }
        y += cell;
    }
}

fn arc_rows(layer: &mut ShapeLayer, palette: &Palette, w: f64, h: f64, scale: f64) {
    let color = palette.cyclic(0);
    let r = w / 16.0;
    let line = (3.0 * scale).max(1.0);
    let row_step = h / 10.0;
    for row in 1..=5 {
        let base_y = h / 2.0 + row_step * f64::from(row) - row_step / 2.0;
        let mut cx = r;
        while cx - r < w {
            let points: Vec<Point> = (0..=ARC_SAMPLES)
                .map(|s| {
                    let a = PI * s as f64 / ARC_SAMPLES as f64;
                    Point::new(cx - r * a.cos(), base_y - r * a.sin())
                })
                .collect();
            layer.stroke_polyline(&points, line, color, 140);
            cx += 2.0 * r;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/styles/motifs.rs"]
mod tests;
