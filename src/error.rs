//! Error types for caption rendering
//!
//! Every failure aborts the render and is returned to the caller. Text that
//! does not fit is not an error: it is reported through
//! [`LayoutResult::overflow`](crate::caption::LayoutResult) and rendered anyway.

use thiserror::Error;

/// Which injected resource failed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Background,
    Font,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Background => write!(f, "background"),
            ResourceKind::Font => write!(f, "font"),
        }
    }
}

/// Centralized error type for rendering, encoding and storage
#[derive(Error, Debug)]
pub enum RenderError {
    /// Background or font could not be loaded/decoded
    #[error("Failed to load {kind}: {message}")]
    Resource { kind: ResourceKind, message: String },

    /// Requested target dimensions are rejected before any pixel work
    #[error("Invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Configuration values are unusable
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Resize operation failed
    #[error("Resize failed: {0}")]
    Resize(String),

    /// Encoding to the output format failed
    #[error("Failed to encode to {format}: {message}")]
    Encode { format: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn resource(kind: ResourceKind, message: impl Into<String>) -> Self {
        RenderError::Resource {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        RenderError::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    pub fn resize_failed(message: impl Into<String>) -> Self {
        RenderError::Resize(message.into())
    }

    pub fn encode_failed(format: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::Encode {
            format: format.into(),
            message: message.into(),
        }
    }

    /// True when retrying with different request parameters could succeed.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RenderError::InvalidDimensions { .. } | RenderError::InvalidConfig(_)
        )
    }
}
