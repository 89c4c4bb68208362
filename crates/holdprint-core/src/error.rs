//! Error types for `Holdprint`.
//!
//! Scoring never fails: degenerate input degrades to an infinite distance or
//! a zero similarity. Errors only come from catalog bookkeeping, point
//! validation at the collaborator boundary, and configuration.

use thiserror::Error;

/// Result type alias for `Holdprint` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `Holdprint` operations.
///
/// Error codes follow the pattern `HOLD-XXX`.
#[derive(Error, Debug)]
pub enum Error {
    /// Route not found (HOLD-001).
    #[error("[HOLD-001] Route '{0}' not found")]
    RouteNotFound(String),

    /// Image not found on a route (HOLD-002).
    #[error("[HOLD-002] Image '{image_id}' not found on route '{route_id}'")]
    ImageNotFound {
        /// Route that was searched.
        route_id: String,
        /// Image id that was requested.
        image_id: String,
    },

    /// Point with a non-finite coordinate (HOLD-003).
    #[error("[HOLD-003] Invalid point at index {index}: ({x}, {y}) is not finite")]
    InvalidPoint {
        /// Position of the point in its set.
        index: usize,
        /// X coordinate as received.
        x: f64,
        /// Y coordinate as received.
        y: f64,
    },

    /// Configuration error (HOLD-004).
    #[error("[HOLD-004] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "HOLD-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RouteNotFound(_) => "HOLD-001",
            Self::ImageNotFound { .. } => "HOLD-002",
            Self::InvalidPoint { .. } => "HOLD-003",
            Self::Config(_) => "HOLD-004",
        }
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
