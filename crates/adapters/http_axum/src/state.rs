//! Shared application state for axum handlers.

use std::sync::Arc;

use casa_app::ports::CommandForwarder;
use casa_app::services::house_service::HouseService;

/// Application state shared across all axum handlers.
///
/// Generic over the forwarder to avoid dynamic dispatch. `Clone` is
/// implemented manually so the forwarder itself does not need to be
/// `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<F> {
    /// Owner of the house state.
    pub house_service: Arc<HouseService<F>>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            house_service: Arc::clone(&self.house_service),
        }
    }
}

impl<F> AppState<F>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(house_service: HouseService<F>) -> Self {
        Self {
            house_service: Arc::new(house_service),
        }
    }
}
