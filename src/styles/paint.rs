use std::f64::consts::TAU;

use crate::design::palette::Palette;
use crate::foundation::core::Point;
use crate::foundation::error::PosterResult;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::layer::ShapeLayer;
use crate::render::noise::apply_noise;
use crate::styles::blur_scaled;

pub(crate) const PAINT_STROKES: usize = 60;
pub(crate) const PAINT_SEGMENTS: usize = 24;
pub(crate) const PAINT_BLUR: f64 = 6.0;
pub(crate) const PAINT_NOISE: f64 = 0.06;

const SAMPLES_PER_SEGMENT: usize = 8;

/// A vertical sine-wave brush stroke spanning the full height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PaintStroke {
    pub(crate) x0: f64,
    pub(crate) phase: f64,
    pub(crate) wavelength: f64,
    pub(crate) width: f64,
    pub(crate) palette_index: usize,
}

impl PaintStroke {
    pub(crate) fn x_at(&self, y: f64, amplitude: f64) -> f64 {
        self.x0 + amplitude * (TAU * y / self.wavelength + self.phase).sin()
    }
}

/// Per stroke: `x0`, phase, wavelength, width, palette index.
pub(crate) fn sample_strokes(
    width: f64,
    height: f64,
    scale: f64,
    palette_len: usize,
    rng: &mut PosterRng,
) -> Vec<PaintStroke> {
    (0..PAINT_STROKES)
        .map(|_| PaintStroke {
            x0: rng.range_f64(0.0, width),
            phase: rng.range_f64(0.0, TAU),
            wavelength: rng.range_f64(0.15 * height, 0.45 * height),
            width: f64::from(rng.range_i32_inclusive(6, 18)) * scale,
            palette_index: rng.index(palette_len),
        })
        .collect()
}

/// Alpha of segment `k`; strokes fade out toward the bottom.
pub(crate) fn segment_alpha(intensity: f64, k: usize) -> u8 {
    let fade = 1.0 - k as f64 / PAINT_SEGMENTS as f64;
    ((40.0 + 100.0 * intensity) * fade).round().clamp(0.0, 255.0) as u8
}

pub(crate) fn apply_flowing_paint(
    frame: &mut PosterFrame,
    palette: &Palette,
    intensity: f64,
    rng: &mut PosterRng,
) -> PosterResult<()> {
    let canvas = frame.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let strokes = sample_strokes(w, h, canvas.scale(), palette.len(), rng);
    let amplitude = (12.0 + 60.0 * intensity) * canvas.scale();

    let mut layer = ShapeLayer::new(canvas)?;
    let seg_h = h / PAINT_SEGMENTS as f64;
    for stroke in &strokes {
        let color = palette.cyclic(stroke.palette_index);
        for k in 0..PAINT_SEGMENTS {
            let y0 = seg_h * k as f64;
            let points: Vec<Point> = (0..=SAMPLES_PER_SEGMENT)
                .map(|s| {
                    let y = y0 + seg_h * s as f64 / SAMPLES_PER_SEGMENT as f64;
                    Point::new(stroke.x_at(y, amplitude), y)
                })
                .collect();
            layer.stroke_polyline(&points, stroke.width, color, segment_alpha(intensity, k));
        }
    }
    layer.composite_onto(frame)?;

    blur_scaled(frame, PAINT_BLUR)?;
    apply_noise(frame, PAINT_NOISE, rng);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/styles/paint.rs"]
mod tests;
