/// Convenience result type used across layerflow.
pub type LayerflowResult<T> = Result<T, LayerflowError>;

/// Top-level error taxonomy used by construction and configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayerflowError {
    /// A size, count, duration or reference that cannot describe a valid component.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerflowError {
    /// Build a [`LayerflowError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`LayerflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for [`LayerflowError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
