//! # casa-adapter-controller-http
//!
//! Relays commands to the physical controller (an ESP32 board on the home
//! network) with a plain `GET <base_url><path>`.
//!
//! Forwarding is best effort: one attempt, bounded by the configured
//! timeout, no retry. It is disabled unless explicitly turned on, since a
//! server running outside the home network cannot reach the board.
//!
//! ## Dependency rule
//!
//! Depends on `casa-app` (port traits) and `casa-domain` only.

pub mod config;
pub mod error;

use casa_app::ports::CommandForwarder;
use casa_domain::command::Command;
use casa_domain::error::CasaError;

pub use config::ControllerConfig;
pub use error::ControllerError;

/// [`CommandForwarder`] backed by a `reqwest` client.
pub struct HttpForwarder {
    client: reqwest::Client,
    base_url: String,
    enabled: bool,
}

impl HttpForwarder {
    /// Build a forwarder from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ControllerError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enabled: config.forward,
        })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn send(&self, command: Command) -> Result<(), ControllerError> {
        let url = format!("{}{}", self.base_url, command.path());
        tracing::info!(%url, "sending command to controller");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ControllerError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ControllerError::Status(status));
        }
        Ok(())
    }
}

impl CommandForwarder for HttpForwarder {
    async fn forward(&self, command: Command) -> Result<(), CasaError> {
        if !self.enabled {
            tracing::debug!(%command, "forwarding disabled, command not sent");
            return Ok(());
        }
        self.send(command).await.map_err(CasaError::from)
    }
}
