//! Climate (DHT) readings.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use casa_app::ports::CommandForwarder;
use casa_domain::sensor::{ClimateReading, ClimateSensor};

use super::body::parse_json;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body sent by the controller with a new reading.
#[derive(Deserialize)]
pub struct ClimateRequest {
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Serialize)]
pub struct ClimateResponse {
    pub message: &'static str,
    pub dht: ClimateSensor,
}

/// `GET /dht`
pub async fn get<F>(State(state): State<AppState<F>>) -> Json<ClimateSensor>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    Json(state.house_service.climate())
}

/// `POST /dht/update`
pub async fn update<F>(
    State(state): State<AppState<F>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ClimateResponse>, ApiError>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let req: ClimateRequest = parse_json(&headers, &body)?;
    let reading = ClimateReading::new(req.temperature, req.humidity)?;
    let dht = state.house_service.record_climate(reading);
    Ok(Json(ClimateResponse {
        message: "DHT actualizado",
        dht,
    }))
}
