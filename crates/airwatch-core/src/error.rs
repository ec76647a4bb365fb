//! Error types for Airwatch.
//!
//! Every upstream outcome that is not a clean payload maps to exactly one
//! variant here, and each variant maps to one client-facing HTTP status.

use thiserror::Error;

/// Main error type for the Airwatch library.
#[derive(Debug, Error)]
pub enum AirwatchError {
    // Transport-level failures
    #[error("timeout waiting for upstream response")]
    UpstreamTimeout,

    #[error("connection to upstream failed")]
    UpstreamUnreachable,

    // Upstream HTTP failures
    #[error("city or location not found")]
    NotFound,

    #[error("upstream rejected the API token")]
    InvalidToken,

    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16 },

    // Upstream envelope failures
    #[error("upstream rejected the request: {detail}")]
    UpstreamRejected { detail: String },

    #[error("unexpected response envelope from upstream")]
    UpstreamMalformed,

    // Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Airwatch operations.
pub type Result<T> = std::result::Result<T, AirwatchError>;

impl From<reqwest::Error> for AirwatchError {
    fn from(err: reqwest::Error) -> Self {
        // Timeout is classified before connect failure; a timed-out connect
        // attempt reports as a timeout.
        if err.is_timeout() {
            AirwatchError::UpstreamTimeout
        } else if err.is_connect() {
            AirwatchError::UpstreamUnreachable
        } else if let Some(status) = err.status() {
            AirwatchError::Upstream {
                status: status.as_u16(),
            }
        } else {
            // Remaining transport failures read as unreachable.
            AirwatchError::UpstreamUnreachable
        }
    }
}

impl AirwatchError {
    /// Convert to the user-visible HTTP status code.
    ///
    /// `Upstream` carries the upstream's own status through unchanged;
    /// everything unclassified is an internal error.
    pub fn to_http_status(&self) -> u16 {
        match self {
            AirwatchError::UpstreamTimeout => 504,
            AirwatchError::UpstreamUnreachable => 503,
            AirwatchError::NotFound => 404,
            AirwatchError::InvalidToken => 403,
            AirwatchError::Upstream { status } => *status,
            AirwatchError::UpstreamRejected { .. } | AirwatchError::UpstreamMalformed => 400,
            AirwatchError::Config { .. } => 500,
        }
    }
}
