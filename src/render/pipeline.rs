use std::fmt;

use crate::assets::font::FontData;
use crate::design::params::DesignParameters;
use crate::encode::png::encode_png;
use crate::foundation::core::Canvas;
use crate::foundation::error::PosterResult;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;
use crate::render::gradient::build_gradient;
use crate::render::typography::apply_typography;
use crate::styles::apply_style;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Per-render settings that are not part of the design itself.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Output size.
    pub canvas: Canvas,
    /// Seed of the single randomness stream.
    pub seed: u64,
    /// Draw the caption band and text.
    pub typography: bool,
    /// Caption font. Without one the band is still drawn but text is skipped.
    pub font: Option<FontData>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            seed: DEFAULT_SEED,
            typography: true,
            font: None,
        }
    }
}

/// Progress of a single render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Parameters accepted.
    Received,
    /// Palette decoded (or replaced by a fallback).
    PaletteNormalized,
    /// Background gradient rasterized.
    GradientBuilt,
    /// Style layer and grain applied.
    StyleApplied,
    /// Caption drawn.
    TypographyApplied,
    /// PNG bytes produced.
    Encoded,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Received => "received",
            Self::PaletteNormalized => "palette_normalized",
            Self::GradientBuilt => "gradient_built",
            Self::StyleApplied => "style_applied",
            Self::TypographyApplied => "typography_applied",
            Self::Encoded => "encoded",
        })
    }
}

/// Render a poster to an opaque RGBA8 frame.
///
/// Pipeline:
/// 1. [`DesignParameters::resolve`] (defaults, intensity clamp, palette normalization)
/// 2. [`build_gradient`]
/// 3. style layer plus grain, drawn from one PRNG stream seeded with `opts.seed`
/// 4. caption band and text, when `opts.typography` is set
///
/// Output is a pure function of `(params, opts)`.
#[tracing::instrument(
    skip(params, opts),
    fields(seed = opts.seed, w = opts.canvas.width, h = opts.canvas.height)
)]
pub fn render_poster(params: &DesignParameters, opts: &RenderOptions) -> PosterResult<PosterFrame> {
    opts.canvas.validate()?;
    tracing::debug!(stage = %Stage::Received);

    let design = params.resolve();
    tracing::debug!(
        stage = %Stage::PaletteNormalized,
        colors = design.palette.len(),
        style = %design.style,
        intensity = design.intensity,
    );

    let mut frame = build_gradient(opts.canvas, &design.palette)?;
    tracing::debug!(stage = %Stage::GradientBuilt);

    let mut rng = PosterRng::new(opts.seed);
    apply_style(&mut frame, &design, &mut rng)?;
    tracing::debug!(stage = %Stage::StyleApplied);

    if opts.typography {
        apply_typography(
            &mut frame,
            &design.title,
            &design.subtitle,
            design.focus,
            opts.font.as_ref(),
        )?;
        tracing::debug!(stage = %Stage::TypographyApplied);
    }
    Ok(frame)
}

/// [`render_poster`] followed by PNG encoding.
pub fn render_poster_png(params: &DesignParameters, opts: &RenderOptions) -> PosterResult<Vec<u8>> {
    let frame = render_poster(params, opts)?;
    let png = encode_png(&frame)?;
    tracing::debug!(stage = %Stage::Encoded, bytes = png.len());
    Ok(png)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
