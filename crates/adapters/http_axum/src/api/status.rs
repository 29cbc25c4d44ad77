//! Full house snapshot.

use axum::Json;
use axum::extract::State;

use casa_app::ports::CommandForwarder;
use casa_domain::house::HouseState;

use crate::state::AppState;

/// `GET /status`
pub async fn get<F>(State(state): State<AppState<F>>) -> Json<HouseState>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    Json(state.house_service.snapshot())
}
