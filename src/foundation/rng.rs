//! The single seeded randomness stream of a poster render.
//!
//! A [`PosterRng`] is created once per render from the caller's seed and threaded by `&mut`
//! through the style and noise stages. Nothing reseeds it mid-render, so the draw order
//! documented on each stage fully determines the output. ChaCha8 is used because its output
//! stream is stable across platforms and `rand` releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic per-render random stream.
#[derive(Clone, Debug)]
pub struct PosterRng {
    inner: ChaCha8Rng,
}

impl PosterRng {
    /// Seed a fresh stream.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform `f64` in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..hi)
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn range_i32_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.random_range(0..len)
    }

    /// Fill `out` with integers uniform in `[-amp, amp]`.
    pub(crate) fn fill_symmetric_i16(&mut self, out: &mut [i16], amp: i16) {
        let amp = amp.max(0);
        for v in out.iter_mut() {
            *v = self.inner.random_range(-amp..=amp);
        }
    }
}
