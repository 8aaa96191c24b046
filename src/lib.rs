//! cityposter turns a short memory about a city into a procedurally rendered poster.
//!
//! An [`Analyzer`] maps free text to [`DesignParameters`] (title, mood, palette, intensity,
//! style). [`render_poster`] then synthesizes a layered raster from those parameters and a seed.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `DesignParameters -> PosterDesign` (defaults, intensity clamp, palette
//!    normalization with fallbacks)
//! 2. **Gradient**: vertical multi-stop gradient over the palette
//! 3. **Style**: one of the [`StyleMode`] strategies, finished with film grain
//! 4. **Typography** (optional): translucent caption band with title and subtitle
//! 5. **Encode** (optional): opaque RGB8 PNG
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: output is a pure function of parameters, canvas and seed. All randomness
//!   comes from one seeded [`PosterRng`] per render.
//! - **Forgiving input**: malformed design values are defaulted, clamped or dropped, never
//!   rejected. Only invalid canvases and encoder failures are errors.
//! - **No IO in the renderer**: fonts are loaded by the caller and passed in [`RenderOptions`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analyze;
mod assets;
mod design;
mod encode;
mod foundation;
mod render;
mod styles;

pub use analyze::Analyzer;
pub use analyze::fallback::FallbackAnalyzer;
pub use analyze::local::LocalAnalyzer;
pub use assets::font::{FontData, discover_system_font, load_font_file};
pub use design::modes::{CityMotif, ScatterFlavor, StyleMode, TypographyFocus};
pub use design::palette::{
    FALLBACK_PALETTE, Palette, PaletteEntry, TaggedColor, fallback_palette, normalize_palette,
};
pub use design::params::{
    DEFAULT_INTENSITY, DEFAULT_SUBTITLE, DEFAULT_TITLE, DesignParameters, PosterDesign,
};
pub use encode::png::encode_png;
pub use foundation::core::{Canvas, CanvasPreset, MAX_CANVAS_DIM, Rgb8};
pub use foundation::error::{PosterError, PosterResult};
pub use foundation::rng::PosterRng;
pub use render::frame::PosterFrame;
pub use render::gradient::build_gradient;
pub use render::noise::apply_noise;
pub use render::pipeline::{DEFAULT_SEED, RenderOptions, Stage, render_poster, render_poster_png};
pub use render::typography::apply_typography;
pub use styles::apply_style;
