use crate::foundation::error::{PosterError, PosterResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Largest accepted canvas edge. The layer rasterizer addresses pixels with `u16`, and anything
/// beyond this is treated as resource exhaustion rather than attempted.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        CanvasPreset::Story.canvas()
    }
}

impl Canvas {
    /// Construct a validated canvas.
    pub fn new(width: u32, height: u32) -> PosterResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject zero-sized and oversized canvases.
    pub fn validate(self) -> PosterResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PosterError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_DIM || self.height > MAX_CANVAS_DIM {
            return Err(PosterError::validation(format!(
                "canvas too large: {}x{} (max {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of pixels.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Byte length of a tightly packed RGBA8 buffer for this canvas.
    pub fn rgba_len(self) -> PosterResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| PosterError::render("frame buffer size overflow"))
    }

    /// Scale factor relative to the 1080-px reference width all style constants are authored for.
    pub fn scale(self) -> f64 {
        f64::from(self.width) / 1080.0
    }

    /// Full canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Named canvas sizes used by the poster variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasPreset {
    /// 1080x1920 portrait (phone story).
    #[default]
    Story,
    /// 1200x1500 print poster.
    Print,
    /// 800x1000 compact poster.
    Compact,
}

impl CanvasPreset {
    /// Dimensions of the preset.
    pub fn canvas(self) -> Canvas {
        let (width, height) = match self {
            Self::Story => (1080, 1920),
            Self::Print => (1200, 1500),
            Self::Compact => (800, 1000),
        };
        Canvas { width, height }
    }
}

/// Straight (opaque) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Mix toward white by `t` in `[0, 1]`.
    pub fn lighten(self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 {
            let c = f64::from(c);
            (c + (255.0 - c) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }

    /// `vello_cpu` paint color with straight alpha.
    pub(crate) fn with_alpha(self, a: u8) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
