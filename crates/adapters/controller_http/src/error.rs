//! Controller adapter error types.

use casa_domain::error::CasaError;

/// Errors specific to the controller adapter.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection failure, timeout or body error.
    #[error("request to controller failed")]
    Request(#[source] reqwest::Error),

    /// The controller answered with a non-success status.
    #[error("controller answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid controller base URL {url:?}")]
    InvalidBaseUrl { url: String },

    #[error("controller timeout must be non-zero")]
    ZeroTimeout,
}

impl From<ControllerError> for CasaError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(Box::new(err))
    }
}
