use image::ImageEncoder;
use image::codecs::png::PngEncoder;

use crate::foundation::error::{PosterError, PosterResult};
use crate::render::frame::PosterFrame;

/// Encode an opaque frame as an 8-bit RGB PNG.
pub fn encode_png(frame: &PosterFrame) -> PosterResult<Vec<u8>> {
    let expected = frame.canvas().rgba_len()?;
    if frame.data.len() != expected {
        return Err(PosterError::encode(format!(
            "frame buffer is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }
    if !frame.is_opaque() {
        tracing::warn!("frame has translucent pixels, alpha dropped on encode");
    }
    let rgb = frame.to_rgb8();
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&rgb, frame.width, frame.height, image::ExtendedColorType::Rgb8)
        .map_err(|e| PosterError::encode(format!("png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
