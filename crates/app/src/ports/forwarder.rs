//! Forwarder port — best-effort relay of commands to the physical controller.

use std::future::Future;

use casa_domain::command::Command;
use casa_domain::error::CasaError;

/// Relays a [`Command`] to the controller that drives the real devices.
///
/// Delivery is **not guaranteed**. Implementations must bound the time they
/// spend (the HTTP adapter uses a fixed timeout) and must not retry. The
/// error is returned for logging only: callers never roll back or fail the
/// state change that produced the command.
pub trait CommandForwarder {
    fn forward(&self, command: Command) -> impl Future<Output = Result<(), CasaError>> + Send;
}

impl<T: CommandForwarder + Send + Sync> CommandForwarder for std::sync::Arc<T> {
    fn forward(&self, command: Command) -> impl Future<Output = Result<(), CasaError>> + Send {
        (**self).forward(command)
    }
}
