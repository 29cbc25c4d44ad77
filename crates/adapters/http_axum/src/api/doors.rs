//! Door commands.

use axum::Json;
use serde::Serialize;

use casa_app::ports::CommandForwarder;
use casa_domain::door::{Door, DoorId};

use crate::state::AppState;

/// Body of every door command response.
#[derive(Serialize)]
pub struct DoorResponse {
    pub message: String,
    pub door: Door,
}

/// `GET|POST /{door}/open`
pub async fn open<F>(state: AppState<F>, id: DoorId) -> Json<DoorResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let door = state.house_service.open_door(id).await;
    Json(DoorResponse {
        message: format!("Puerta {id} abierta"),
        door,
    })
}

/// `GET|POST /{door}/close`
pub async fn close<F>(state: AppState<F>, id: DoorId) -> Json<DoorResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let door = state.house_service.close_door(id).await;
    Json(DoorResponse {
        message: format!("Puerta {id} cerrada"),
        door,
    })
}
