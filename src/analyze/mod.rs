//! Turning a city and a memory into [`DesignParameters`](crate::DesignParameters).
//!
//! The renderer never calls an analyzer itself. Callers pick an implementation and hand the
//! result to [`render_poster`](crate::render_poster).

pub(crate) mod fallback;
pub(crate) mod local;

use crate::design::params::DesignParameters;
use crate::foundation::error::{PosterError, PosterResult};

/// Source of design parameters for a memory text.
pub trait Analyzer {
    /// Analyze `memory` about `city`.
    fn analyze(&self, city: &str, memory: &str) -> PosterResult<DesignParameters>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn analyze(&self, city: &str, memory: &str) -> PosterResult<DesignParameters> {
        (**self).analyze(city, memory)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, city: &str, memory: &str) -> PosterResult<DesignParameters> {
        (**self).analyze(city, memory)
    }
}

/// Both inputs must contain something other than whitespace.
pub(crate) fn require_input(city: &str, memory: &str) -> PosterResult<()> {
    if city.trim().is_empty() {
        return Err(PosterError::validation("city must not be empty"));
    }
    if memory.trim().is_empty() {
        return Err(PosterError::validation("memory must not be empty"));
    }
    Ok(())
}
