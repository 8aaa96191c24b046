use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{PosterError, PosterResult};

/// A poster raster as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed, row-major. Every pipeline stage keeps the
/// frame fully opaque, so premultiplied and straight values coincide and the frame encodes
/// directly as RGB8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PosterFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl PosterFrame {
    /// Opaque frame filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgb8) -> PosterResult<Self> {
        canvas.validate()?;
        let len = canvas.rgba_len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            PosterError::render(format!(
                "allocate {}x{} frame: {e}",
                canvas.width, canvas.height
            ))
        })?;
        let px = [color.r, color.g, color.b, 255];
        for _ in 0..canvas.area() {
            data.extend_from_slice(&px);
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Canvas of this frame.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Whether every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Drop the alpha channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}
