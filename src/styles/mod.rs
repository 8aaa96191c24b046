//! Stylistic layers drawn over the gradient background.
//!
//! Every style finishes with its own grain pass, so one call to [`apply_style`] takes a frame
//! from "gradient built" to "style applied".

pub(crate) mod minimal;
pub(crate) mod mist;
pub(crate) mod motifs;
pub(crate) mod ocean;
pub(crate) mod paint;
pub(crate) mod scatter;

use crate::design::modes::StyleMode;
use crate::design::params::PosterDesign;
use crate::foundation::error::PosterResult;
use crate::foundation::math::px;
use crate::foundation::rng::PosterRng;
use crate::render::blur::blur_frame;
use crate::render::frame::PosterFrame;

/// Draw the design's style onto `frame`, consuming randomness from `rng` in the style's
/// documented order.
#[tracing::instrument(skip_all, fields(style = %design.style, intensity = design.intensity))]
pub fn apply_style(
    frame: &mut PosterFrame,
    design: &PosterDesign,
    rng: &mut PosterRng,
) -> PosterResult<()> {
    match design.style {
        StyleMode::MistyGradient => mist::apply_mist(frame, design.intensity, rng),
        StyleMode::OceanMotion => {
            ocean::apply_ocean(frame, &design.palette, design.intensity, rng)
        }
        StyleMode::FlowingPaint => {
            paint::apply_flowing_paint(frame, &design.palette, design.intensity, rng)
        }
        StyleMode::CleanMinimal => minimal::apply_clean_minimal(frame, design.intensity, rng),
        StyleMode::ShapeScatter(flavor) => scatter::apply_shape_scatter(
            frame,
            &design.palette,
            design.intensity,
            flavor,
            &design.motifs,
            rng,
        ),
    }
}

/// Blur by a radius authored for the 1080-px reference width.
pub(crate) fn blur_scaled(frame: &mut PosterFrame, reference_radius: f64) -> PosterResult<()> {
    let radius = px(reference_radius * frame.canvas().scale(), 1);
    blur_frame(frame, radius)
}

#[cfg(test)]
#[path = "../../tests/unit/styles/mod.rs"]
mod tests;
