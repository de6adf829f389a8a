//! Error type for geometry construction and tiling.
//!
//! Transforms never fail. Errors only come from bad seed parameters or a bad
//! pruning index, and both are reported before any state changes.

/// Everything that can go wrong while building shapes or inflating a tiling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A regular polygon cannot be built from these parameters
    /// (radius not positive, non-finite input, or fewer than 3 sides).
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// A pruning index does not address one of the inflation children.
    #[error("child index {index} out of range (a tile inflates into {children} children)")]
    IndexOutOfRange { index: usize, children: usize },
}

impl GeometryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GeometryError::InvalidGeometry { reason: reason.into() }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;
