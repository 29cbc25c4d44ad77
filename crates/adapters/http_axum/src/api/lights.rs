//! Room light commands.

use axum::Json;
use serde::Serialize;

use casa_app::ports::CommandForwarder;
use casa_domain::light::{Light, Room};

use crate::state::AppState;

#[derive(Serialize)]
pub struct LightResponse {
    pub message: String,
    pub light: Light,
}

/// `GET|POST /{room}/on` and `/{room}/off`
pub async fn switch<F>(state: AppState<F>, room: Room, on: bool) -> Json<LightResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let light = state.house_service.set_light(room, on).await;
    let verb = if on { "encendida" } else { "apagada" };
    Json(LightResponse {
        message: format!("Luz {} {verb}", label(room)),
        light,
    })
}

/// Room name as spoken in messages; `dorm` is spelled out.
fn label(room: Room) -> &'static str {
    match room {
        Room::Bedroom => "dormitorio",
        other => other.as_str(),
    }
}
