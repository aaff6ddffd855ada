/// Convenience result type used across dithershade.
pub type DitherResult<T> = Result<T, DitherError>;

/// Top-level error taxonomy used by renderer and driver APIs.
#[derive(thiserror::Error, Debug)]
pub enum DitherError {
    /// Rendering surface or worker setup failed. No frame can ever be produced.
    #[error("initialization error: {0}")]
    Init(String),

    /// Source image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided configuration or illegal driver state transition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame snapshot could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DitherError {
    /// Build a [`DitherError::Init`] value.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Build a [`DitherError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`DitherError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DitherError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether the error means the pipeline can never produce frames.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Init(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
