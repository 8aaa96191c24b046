/// Convenience result type used across cityposter.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy used by the rendering APIs.
///
/// Malformed design input never surfaces here; it is repaired with defaults. Only invalid
/// canvases, oversized allocations and encoder/IO failures are reported.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Invalid caller-provided configuration (canvas size, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while rasterizing a poster stage.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the finished frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PosterError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
