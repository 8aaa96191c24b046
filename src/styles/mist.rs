use crate::foundation::error::PosterResult;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::noise::apply_noise;
use crate::styles::blur_scaled;

pub(crate) const MIST_NOISE: f64 = 0.05;

/// Blur radius (reference pixels) grows with intensity.
pub(crate) fn mist_radius(intensity: f64) -> f64 {
    10.0 + 25.0 * intensity
}

/// Soft haze: a strong blur of the gradient, then light grain.
pub(crate) fn apply_mist(
    frame: &mut PosterFrame,
    intensity: f64,
    rng: &mut PosterRng,
) -> PosterResult<()> {
    blur_scaled(frame, mist_radius(intensity))?;
    apply_noise(frame, MIST_NOISE, rng);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/styles/mist.rs"]
mod tests;
