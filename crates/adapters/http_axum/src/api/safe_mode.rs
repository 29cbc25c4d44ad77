//! Safe mode activation.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use casa_app::ports::CommandForwarder;
use casa_domain::house::HouseState;

use crate::state::AppState;

#[derive(Serialize)]
pub struct SafeModeResponse {
    pub message: &'static str,
    pub status: HouseState,
}

/// `GET|POST /modo/seguro`
///
/// Lights off, doors closed, motion sensing on, ultrasonic sensing off.
/// Answers with the whole house state.
pub async fn enter<F>(State(state): State<AppState<F>>) -> Json<SafeModeResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let status = state.house_service.enter_safe_mode().await;
    Json(SafeModeResponse {
        message: "MODO SEGURO ACTIVADO",
        status,
    })
}
