//! Controller forwarding configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ControllerError;

/// Where and whether to relay commands to the physical controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Base URL of the controller, e.g. `http://192.168.1.50`.
    pub base_url: String,
    /// Relay commands at all. Off by default: a cloud deployment cannot
    /// reach the controller on the home network.
    pub forward: bool,
    /// Per-request timeout, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.1.50".to_string(),
            forward: false,
            timeout_ms: 3000,
        }
    }
}

impl ControllerConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the settings that matter when forwarding is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::ZeroTimeout`] or
    /// [`ControllerError::InvalidBaseUrl`].
    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.timeout_ms == 0 {
            return Err(ControllerError::ZeroTimeout);
        }
        if !self.forward {
            return Ok(());
        }
        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ControllerError::InvalidBaseUrl {
                url: self.base_url.clone(),
            }),
        }
    }
}
