//! JSON API handler modules.
//!
//! Doors and lights have one route per identifier, generated from the closed
//! [`DoorId`] and [`Room`] sets; an unknown door or room is a plain 404.

mod body;
pub mod climate;
pub mod doors;
pub mod lights;
pub mod safe_mode;
pub mod sensors;
pub mod status;

use axum::Router;
use axum::extract::State;
use axum::routing::{MethodFilter, get, on, post};

use casa_app::ports::CommandForwarder;
use casa_domain::door::DoorId;
use casa_domain::light::Room;

use crate::state::AppState;

/// Command endpoints answer both methods.
const GET_OR_POST: MethodFilter = MethodFilter::GET.or(MethodFilter::POST);

/// Build the API router.
pub fn routes<F>() -> Router<AppState<F>>
where
    F: CommandForwarder + Send + Sync + 'static,
{
    let mut router = Router::new()
        // State
        .route("/status", get(status::get::<F>))
        // Sensors
        .route("/pir/on", on(GET_OR_POST, sensors::pir_on::<F>))
        .route("/pir/off", on(GET_OR_POST, sensors::pir_off::<F>))
        .route("/ultra/on", on(GET_OR_POST, sensors::ultra_on::<F>))
        .route("/ultra/off", on(GET_OR_POST, sensors::ultra_off::<F>))
        .route("/ultra/distance", post(sensors::record_distance::<F>))
        // Climate
        .route("/dht", get(climate::get::<F>))
        .route("/dht/update", post(climate::update::<F>))
        // Safe mode
        .route("/modo/seguro", on(GET_OR_POST, safe_mode::enter::<F>));

    for door in DoorId::ALL {
        router = router
            .route(
                &format!("/{door}/open"),
                on(GET_OR_POST, move |State(state): State<AppState<F>>| {
                    doors::open(state, door)
                }),
            )
            .route(
                &format!("/{door}/close"),
                on(GET_OR_POST, move |State(state): State<AppState<F>>| {
                    doors::close(state, door)
                }),
            );
    }

    for room in Room::ALL {
        router = router
            .route(
                &format!("/{room}/on"),
                on(GET_OR_POST, move |State(state): State<AppState<F>>| {
                    lights::switch(state, room, true)
                }),
            )
            .route(
                &format!("/{room}/off"),
                on(GET_OR_POST, move |State(state): State<AppState<F>>| {
                    lights::switch(state, room, false)
                }),
            );
    }

    router
}
