//! Motion (PIR) and ultrasonic sensor handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use casa_app::ports::CommandForwarder;
use casa_domain::sensor::{DistanceReading, MotionSensor, UltrasonicSensor};

use super::body::parse_json;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PirResponse {
    pub message: &'static str,
    pub pir: MotionSensor,
}

#[derive(Serialize)]
pub struct UltraResponse {
    pub message: &'static str,
    pub ultra: UltrasonicSensor,
}

/// Request body sent by the controller with its latest measurement.
#[derive(Deserialize)]
pub struct DistanceRequest {
    pub distance_cm: f64,
}

/// `GET|POST /pir/on`
pub async fn pir_on<F>(State(state): State<AppState<F>>) -> Json<PirResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let pir = state.house_service.set_motion_sensor(true).await;
    Json(PirResponse {
        message: "PIR activado",
        pir,
    })
}

/// `GET|POST /pir/off`
pub async fn pir_off<F>(State(state): State<AppState<F>>) -> Json<PirResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let pir = state.house_service.set_motion_sensor(false).await;
    Json(PirResponse {
        message: "PIR desactivado",
        pir,
    })
}

/// `GET|POST /ultra/on`
pub async fn ultra_on<F>(State(state): State<AppState<F>>) -> Json<UltraResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let ultra = state.house_service.set_ultrasonic(true).await;
    Json(UltraResponse {
        message: "Ultrasonido activado",
        ultra,
    })
}

/// `GET|POST /ultra/off`
pub async fn ultra_off<F>(State(state): State<AppState<F>>) -> Json<UltraResponse>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let ultra = state.house_service.set_ultrasonic(false).await;
    Json(UltraResponse {
        message: "Ultrasonido desactivado",
        ultra,
    })
}

/// `POST /ultra/distance`
pub async fn record_distance<F>(
    State(state): State<AppState<F>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UltraResponse>, ApiError>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let req: DistanceRequest = parse_json(&headers, &body)?;
    let reading = DistanceReading::new(req.distance_cm)?;
    let ultra = state.house_service.record_distance(reading);
    Ok(Json(UltraResponse {
        message: "Distancia actualizada",
        ultra,
    }))
}
