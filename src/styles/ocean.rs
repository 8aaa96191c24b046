use kurbo::RoundedRect;

use crate::design::palette::Palette;
use crate::foundation::core::Rect;
use crate::foundation::error::PosterResult;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::layer::ShapeLayer;
use crate::render::noise::apply_noise;
use crate::styles::blur_scaled;

pub(crate) const OCEAN_BANDS: usize = 42;
pub(crate) const OCEAN_BLUR: f64 = 10.0;
pub(crate) const OCEAN_NOISE: f64 = 0.075;

/// One horizontal wave band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WaveBand {
    pub(crate) rect: Rect,
    pub(crate) palette_index: usize,
}

/// Draw all band geometry. Per band: `y`, `len`, `x`, `thickness`, palette index.
pub(crate) fn sample_bands(
    width: f64,
    height: f64,
    scale: f64,
    palette_len: usize,
    rng: &mut PosterRng,
) -> Vec<WaveBand> {
    (0..OCEAN_BANDS)
        .map(|_| {
            let y = rng.range_f64(0.0, height);
            let len = rng.range_f64(0.4 * width, 0.9 * width);
            let x = rng.range_f64(0.0, width - len);
            let thickness = f64::from(rng.range_i32_inclusive(8, 26)) * scale;
            let palette_index = rng.index(palette_len);
            WaveBand {
                rect: Rect::new(x, y, x + len, y + thickness),
                palette_index,
            }
        })
        .collect()
}

/// Lightened translucent bands suggesting water, softened by a blur.
pub(crate) fn apply_ocean(
    frame: &mut PosterFrame,
    palette: &Palette,
    intensity: f64,
    rng: &mut PosterRng,
) -> PosterResult<()> {
    let canvas = frame.canvas();
    let bands = sample_bands(
        f64::from(canvas.width),
        f64::from(canvas.height),
        canvas.scale(),
        palette.len(),
        rng,
    );
    let alpha = (110.0 * intensity).round().clamp(0.0, 255.0) as u8;
    tracing::debug!(bands = bands.len(), alpha, "ocean bands");

    let mut layer = ShapeLayer::new(canvas)?;
    for band in &bands {
        let color = palette.cyclic(band.palette_index).lighten(0.5);
        let radius = band.rect.height() / 2.0;
        layer.fill_shape(&RoundedRect::from_rect(band.rect, radius), color, alpha);
    }
    layer.composite_onto(frame)?;

    blur_scaled(frame, OCEAN_BLUR)?;
    apply_noise(frame, OCEAN_NOISE, rng);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/styles/ocean.rs"]
mod tests;
