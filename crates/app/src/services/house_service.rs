//! House service — the one place where the house state is read and mutated.

use std::sync::{Mutex, MutexGuard, PoisonError};

use casa_domain::command::Command;
use casa_domain::door::{Door, DoorId};
use casa_domain::house::HouseState;
use casa_domain::light::{Light, Room};
use casa_domain::sensor::{
    ClimateReading, ClimateSensor, DistanceReading, MotionSensor, UltrasonicSensor,
};
use casa_domain::time::{Timestamp, now};

use crate::ports::CommandForwarder;

/// Application service owning the process-wide [`HouseState`].
///
/// Each operation edits the state under a short lock, takes a snapshot of
/// what changed and releases the lock before the command is forwarded. The
/// forward never blocks other requests and never undoes the edit.
pub struct HouseService<F> {
    state: Mutex<HouseState>,
    forwarder: F,
}

impl<F: CommandForwarder + Sync> HouseService<F> {
    /// Create a service with the initial house state.
    pub fn new(forwarder: F) -> Self {
        Self {
            state: Mutex::new(HouseState::default()),
            forwarder,
        }
    }

    /// Full snapshot of the house.
    pub fn snapshot(&self) -> HouseState {
        self.lock().clone()
    }

    /// Latest climate reading.
    pub fn climate(&self) -> ClimateSensor {
        self.lock().dht().clone()
    }

    /// Open a door, leaving safe mode, and relay the command.
    pub async fn open_door(&self, id: DoorId) -> Door {
        let door = self.update(|state, ts| state.open_door(id, ts).clone());
        self.forward(Command::Door {
            door: id,
            open: true,
        })
        .await;
        door
    }

    /// Close a door and relay the command.
    pub async fn close_door(&self, id: DoorId) -> Door {
        let door = self.update(|state, ts| state.close_door(id, ts).clone());
        self.forward(Command::Door {
            door: id,
            open: false,
        })
        .await;
        door
    }

    /// Switch a room light and relay the command.
    pub async fn set_light(&self, room: Room, on: bool) -> Light {
        let light = self.update(|state, ts| state.set_light(room, on, ts).clone());
        self.forward(Command::Light { room, on }).await;
        light
    }

    /// Enable or disable the motion sensor and relay the command.
    pub async fn set_motion_sensor(&self, active: bool) -> MotionSensor {
        let pir = self.update(|state, ts| state.set_motion_sensor(active, ts).clone());
        self.forward(Command::MotionSensor { active }).await;
        pir
    }

    /// Enable or disable the ultrasonic sensor and relay the command.
    pub async fn set_ultrasonic(&self, active: bool) -> UltrasonicSensor {
        let ultra = self.update(|state, ts| state.set_ultrasonic(active, ts).clone());
        self.forward(Command::Ultrasonic { active }).await;
        ultra
    }

    /// Store a distance reported by the controller. Nothing is relayed.
    pub fn record_distance(&self, reading: DistanceReading) -> UltrasonicSensor {
        self.update(|state, ts| state.record_distance(reading, ts).clone())
    }

    /// Store a climate reading reported by the controller. Nothing is relayed.
    pub fn record_climate(&self, reading: ClimateReading) -> ClimateSensor {
        self.update(|state, ts| state.record_climate(reading, ts).clone())
    }

    /// Put the house in safe mode, relay the command and return the full state.
    pub async fn enter_safe_mode(&self) -> HouseState {
        let snapshot = self.update(|state, ts| {
            state.enter_safe_mode(ts);
            state.clone()
        });
        self.forward(Command::SafeMode).await;
        snapshot
    }

    /// Apply `edit` under the lock with a timestamp taken while holding it,
    /// so concurrent edits get ordered timestamps.
    fn update<T>(&self, edit: impl FnOnce(&mut HouseState, Timestamp) -> T) -> T {
        let mut state = self.lock();
        edit(&mut state, now())
    }

    fn lock(&self) -> MutexGuard<'_, HouseState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn forward(&self, command: Command) {
        if let Err(err) = self.forwarder.forward(command).await {
            tracing::warn!(error = ?err, %command, "controller did not take command, state kept");
        }
    }
}
