use crate::foundation::error::PosterResult;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::noise::apply_noise;
use crate::styles::blur_scaled;

pub(crate) const MINIMAL_NOISE: f64 = 0.03;

/// Lower intensity means a softer, emptier field.
pub(crate) fn minimal_radius(intensity: f64) -> f64 {
    6.0 + 22.0 * (1.0 - intensity)
}

pub(crate) fn apply_clean_minimal(
    frame: &mut PosterFrame,
    intensity: f64,
    rng: &mut PosterRng,
) -> PosterResult<()> {
    blur_scaled(frame, minimal_radius(intensity))?;
    apply_noise(frame, MINIMAL_NOISE, rng);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/styles/minimal.rs"]
mod tests;
