use crate::design::palette::Palette;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::PosterResult;
use crate::foundation::math::lerp;
use crate::render::frame::PosterFrame;

/// Color of the vertical gradient at `t` in `[0, 1]`.
///
/// `stops` has at least two entries and defines `stops.len() - 1` equal segments.
pub(crate) fn gradient_color(stops: &[Rgb8], t: f64) -> Rgb8 {
    let segments = stops.len().saturating_sub(1).max(1);
    let pos = t.clamp(0.0, 1.0) * segments as f64;
    let idx = (pos.floor() as usize).min(segments - 1);
    let frac = pos - idx as f64;
    let a = stops[idx];
    let b = stops[(idx + 1).min(stops.len() - 1)];
    let mix = |x: u8, y: u8| -> u8 {
        lerp(f64::from(x), f64::from(y), frac)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb8::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Build the opaque base layer: a multi-stop top-to-bottom gradient of the palette.
///
/// Row `y` samples the gradient at `t = y / (height - 1)` (a single-row canvas uses `t = 0`).
/// No randomness is involved.
pub fn build_gradient(canvas: Canvas, palette: &Palette) -> PosterResult<PosterFrame> {
    let stops = palette.gradient_stops();
    let mut frame = PosterFrame::filled(canvas, stops[0])?;
    let h1 = canvas.height.saturating_sub(1);
    let row_len = (canvas.width as usize) * 4;
    for (y, row) in frame.data.chunks_exact_mut(row_len).enumerate() {
        let t = if h1 == 0 {
            0.0
        } else {
            (y as f64) / f64::from(h1)
        };
        let c = gradient_color(&stops, t);
        let px = [c.r, c.g, c.b, 255];
        for dst in row.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
