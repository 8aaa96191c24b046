use crate::foundation::error::{PosterError, PosterResult};
use crate::render::frame::PosterFrame;

/// Fixed-point one.
const Q16_ONE: u32 = 1 << 16;

/// Gaussian blur of the frame's color channels in place, `sigma = radius / 2`.
///
/// Separable: rows go into one RGB scratch buffer, columns come back into the frame. Sampling
/// clamps to the edge. Alpha is left alone since every frame stays opaque.
pub(crate) fn blur_frame(frame: &mut PosterFrame, radius: u32) -> PosterResult<()> {
    if radius == 0 {
        return Ok(());
    }
    let kernel = BlurKernel::gaussian(radius);
    let w = frame.width as usize;
    let h = frame.height as usize;

    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(w * h * 3)
        .map_err(|e| PosterError::render(format!("allocate blur scratch: {e}")))?;
    scratch.resize(w * h * 3, 0u8);

    for (src, dst) in frame
        .data
        .chunks_exact(w * 4)
        .zip(scratch.chunks_exact_mut(w * 3))
    {
        for x in 0..w {
            let rgb = kernel.apply(x, w, |sx| &src[sx * 4..sx * 4 + 3]);
            dst[x * 3..x * 3 + 3].copy_from_slice(&rgb);
        }
    }

    let rows: &[u8] = &scratch;
    for y in 0..h {
        for x in 0..w {
            let rgb = kernel.apply(y, h, move |sy| {
                let idx = (sy * w + x) * 3;
                &rows[idx..idx + 3]
            });
            let idx = (y * w + x) * 4;
            frame.data[idx..idx + 3].copy_from_slice(&rgb);
        }
    }
    Ok(())
}

/// Symmetric Q16 weights, `2 * radius + 1` taps summing to exactly [`Q16_ONE`].
///
/// The exact sum keeps flat regions bit-identical after blurring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BlurKernel {
    weights: Vec<u32>,
}

impl BlurKernel {
    pub(crate) fn gaussian(radius: u32) -> Self {
        let r = i64::from(radius);
        let sigma = f64::from(radius.max(1)) / 2.0;
        let falloff: Vec<f64> = (-r..=r)
            .map(|i| {
                let x = i as f64;
                (-x * x / (2.0 * sigma * sigma)).exp()
            })
            .collect();
        let total: f64 = falloff.iter().sum();

        let mut weights: Vec<u32> = falloff
            .iter()
            .map(|f| ((f / total) * f64::from(Q16_ONE)).round() as u32)
            .collect();
        // Rounding drift goes to the center tap.
        let sum: u32 = weights.iter().sum();
        let center = weights.len() / 2;
        weights[center] = (weights[center] + Q16_ONE).saturating_sub(sum);
        Self { weights }
    }

    fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// Weighted RGB around `center` on a line of `len` samples.
    fn apply<'a>(
        &self,
        center: usize,
        len: usize,
        sample: impl Fn(usize) -> &'a [u8],
    ) -> [u8; 3] {
        let r = self.radius();
        let mut acc = [0u32; 3];
        for (i, &weight) in self.weights.iter().enumerate() {
            let at = (center + i).saturating_sub(r).min(len - 1);
            for (a, &c) in acc.iter_mut().zip(sample(at)) {
                *a += weight * u32::from(c);
            }
        }
        acc.map(|a| ((a + Q16_ONE / 2) >> 16).min(255) as u8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
