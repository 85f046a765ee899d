/// Convenience result type used across padicon.
pub type IconResult<T> = Result<T, IconError>;

/// Error taxonomy for decoding, resizing and encoding icon assets.
///
/// Every variant is terminal for the current invocation; the pipeline never retries.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Source file unreadable or not a recognized raster format.
    #[error("decode error: {0}")]
    Decode(String),

    /// Illegal target size, padding ratio or pipeline option.
    #[error("invalid spec: {0}")]
    InvalidSpec(String),

    /// Degenerate or malformed pixel data (zero dimensions, wrong buffer length).
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Output could not be serialized or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Empty, non-square or out-of-range multi-size container entries.
    #[error("invalid container: {0}")]
    InvalidContainer(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`IconError::InvalidSpec`] value.
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }

    /// Build an [`IconError::InvalidImage`] value.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Build an [`IconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::InvalidContainer`] value.
    pub fn invalid_container(msg: impl Into<String>) -> Self {
        Self::InvalidContainer(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
