use crate::foundation::math::clamp_unit;
use crate::foundation::rng::PosterRng;
use crate::render::frame::PosterFrame;

/// Peak perturbation in 8-bit steps for an amplitude fraction.
pub(crate) fn noise_amplitude(amount: f64) -> i16 {
    (clamp_unit(amount) * 255.0).floor() as i16
}

/// Add uniform grain of peak `amount * 255` to every color channel, clamping to `[0, 255]`.
///
/// The whole random field (`width * height * 3` draws, row-major, channels R, G, B) is drawn
/// from `rng` before being added. A zero amplitude is a no-op and consumes no randomness.
/// Alpha is untouched.
pub fn apply_noise(frame: &mut PosterFrame, amount: f64, rng: &mut PosterRng) {
    let amp = noise_amplitude(amount);
    if amp == 0 {
        return;
    }
    let mut field = vec![0i16; frame.canvas().area() * 3];
    rng.fill_symmetric_i16(&mut field, amp);

    for (px, delta) in frame.data.chunks_exact_mut(4).zip(field.chunks_exact(3)) {
        for c in 0..3 {
            px[c] = (i16::from(px[c]) + delta[c]).clamp(0, 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/noise.rs"]
mod tests;
