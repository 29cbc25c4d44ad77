//! `HouseState` — the aggregate owning every door, light and sensor.
//!
//! Sub-entities have no life of their own: they are created together with
//! the house and never added or removed. All mutations go through the
//! methods below, which refresh the relevant `last_update`.

use serde::{Deserialize, Serialize};

use crate::door::{Door, DoorId, Doors};
use crate::light::{Light, Lights, Room};
use crate::sensor::{
    ClimateReading, ClimateSensor, DistanceReading, MotionSensor, UltrasonicSensor,
};
use crate::time::{Timestamp, now};

/// Current truth about every monitored or controlled device in the house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseState {
    doors: Doors,
    lights: Lights,
    pir: MotionSensor,
    ultra: UltrasonicSensor,
    dht: ClimateSensor,
    #[serde(alias = "modo_seguro")]
    safe_mode: bool,
}

impl Default for HouseState {
    fn default() -> Self {
        Self::new(now())
    }
}

impl HouseState {
    /// Initial state: doors closed, lights off, both switchable sensors
    /// inactive, no readings, safe mode off.
    #[must_use]
    pub fn new(ts: Timestamp) -> Self {
        Self {
            doors: Doors::new(ts),
            lights: Lights::new(ts),
            pir: MotionSensor::inactive(ts),
            ultra: UltrasonicSensor::inactive(ts),
            dht: ClimateSensor::default(),
            safe_mode: false,
        }
    }

    #[must_use]
    pub fn doors(&self) -> &Doors {
        &self.doors
    }

    #[must_use]
    pub fn door(&self, id: DoorId) -> &Door {
        self.doors.get(id)
    }

    #[must_use]
    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    #[must_use]
    pub fn light(&self, room: Room) -> &Light {
        self.lights.get(room)
    }

    #[must_use]
    pub fn pir(&self) -> &MotionSensor {
        &self.pir
    }

    #[must_use]
    pub fn ultra(&self) -> &UltrasonicSensor {
        &self.ultra
    }

    #[must_use]
    pub fn dht(&self) -> &ClimateSensor {
        &self.dht
    }

    #[must_use]
    pub fn safe_mode(&self) -> bool {
        self.safe_mode
    }

    /// Open a door. Opening any door leaves safe mode.
    pub fn open_door(&mut self, id: DoorId, ts: Timestamp) -> &Door {
        self.safe_mode = false;
        let door = self.doors.get_mut(id);
        door.set_open(true, ts);
        door
    }

    /// Close a door. Safe mode is left as is.
    pub fn close_door(&mut self, id: DoorId, ts: Timestamp) -> &Door {
        let door = self.doors.get_mut(id);
        door.set_open(false, ts);
        door
    }

    /// Switch a light. Turning a light on does not leave safe mode.
    pub fn set_light(&mut self, room: Room, is_on: bool, ts: Timestamp) -> &Light {
        let light = self.lights.get_mut(room);
        light.set_on(is_on, ts);
        light
    }

    pub fn set_motion_sensor(&mut self, active: bool, ts: Timestamp) -> &MotionSensor {
        self.pir.set_active(active, ts);
        &self.pir
    }

    pub fn set_ultrasonic(&mut self, active: bool, ts: Timestamp) -> &UltrasonicSensor {
        self.ultra.set_active(active, ts);
        &self.ultra
    }

    pub fn record_distance(
        &mut self,
        reading: DistanceReading,
        ts: Timestamp,
    ) -> &UltrasonicSensor {
        self.ultra.record(reading, ts);
        &self.ultra
    }

    pub fn record_climate(&mut self, reading: ClimateReading, ts: Timestamp) -> &ClimateSensor {
        self.dht.record(reading, ts);
        &self.dht
    }

    /// Lights off, doors closed, motion sensing on, ultrasonic sensing off.
    pub fn enter_safe_mode(&mut self, ts: Timestamp) {
        for light in self.lights.iter_mut() {
            light.set_on(false, ts);
        }
        for door in self.doors.iter_mut() {
            door.set_open(false, ts);
        }
        self.pir.set_active(true, ts);
        self.ultra.set_active(false, ts);
        self.safe_mode = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn tick(ts: Timestamp, millis: i64) -> Timestamp {
        ts + TimeDelta::milliseconds(millis)
    }

    #[test]
    fn should_start_with_everything_off() {
        let state = HouseState::default();

        assert!(state.doors().iter().all(|door| !door.is_open()));
        assert!(state.lights().iter().all(|light| !light.is_on()));
        assert!(!state.pir().active());
        assert!(!state.ultra().active());
        assert_eq!(state.ultra().last_distance_cm(), None);
        assert_eq!(state.dht().temperature(), None);
        assert_eq!(state.dht().humidity(), None);
        assert_eq!(state.dht().last_update(), None);
        assert!(!state.safe_mode());
    }

    #[test]
    fn should_close_door_after_open_with_increasing_timestamps() {
        let start = now();
        let mut state = HouseState::new(start);

        for id in DoorId::ALL {
            let opened_at = state.open_door(id, tick(start, 1)).last_update();
            let closed = state.close_door(id, tick(start, 2));

            assert!(!closed.is_open());
            assert!(opened_at > start);
            assert!(closed.last_update() > opened_at);
        }
    }

    #[test]
    fn should_leave_safe_mode_when_door_opens() {
        let start = now();
        let mut state = HouseState::new(start);
        state.enter_safe_mode(tick(start, 1));
        assert!(state.safe_mode());

        state.open_door(DoorId::Garage, tick(start, 2));

        assert!(!state.safe_mode());
    }

    #[test]
    fn should_keep_safe_mode_off_when_door_opens_outside_safe_mode() {
        let mut state = HouseState::default();
        state.open_door(DoorId::Principal, now());
        assert!(!state.safe_mode());
    }

    #[test]
    fn should_stay_in_safe_mode_when_door_closes() {
        let start = now();
        let mut state = HouseState::new(start);
        state.enter_safe_mode(tick(start, 1));

        state.close_door(DoorId::Principal, tick(start, 2));

        assert!(state.safe_mode());
    }

    #[test]
    fn should_stay_in_safe_mode_when_light_turns_on() {
        let start = now();
        let mut state = HouseState::new(start);
        state.enter_safe_mode(tick(start, 1));

        state.set_light(Room::Kitchen, true, tick(start, 2));

        assert!(state.light(Room::Kitchen).is_on());
        assert!(state.safe_mode());
    }

    #[test]
    fn should_force_devices_into_safe_configuration() {
        let start = now();
        let mut state = HouseState::new(start);
        state.open_door(DoorId::Principal, tick(start, 1));
        state.open_door(DoorId::Garage, tick(start, 1));
        for room in Room::ALL {
            state.set_light(room, true, tick(start, 1));
        }
        state.set_ultrasonic(true, tick(start, 1));

        let at = tick(start, 2);
        state.enter_safe_mode(at);

        assert!(state.lights().iter().all(|light| !light.is_on()));
        assert!(state.lights().iter().all(|light| light.last_update() == at));
        assert!(state.doors().iter().all(|door| !door.is_open()));
        assert!(state.doors().iter().all(|door| door.last_update() == at));
        assert!(state.pir().active());
        assert_eq!(state.pir().last_update(), at);
        assert!(!state.ultra().active());
        assert_eq!(state.ultra().last_update(), at);
        assert!(state.safe_mode());
    }

    #[test]
    fn should_keep_readings_through_safe_mode() {
        let start = now();
        let mut state = HouseState::new(start);
        state.record_distance(DistanceReading::new(12.0).unwrap(), tick(start, 1));
        state.record_climate(ClimateReading::new(19.5, 60.0).unwrap(), tick(start, 1));

        state.enter_safe_mode(tick(start, 2));

        assert_eq!(state.ultra().last_distance_cm(), Some(12.0));
        assert_eq!(state.dht().temperature(), Some(19.5));
    }

    #[test]
    fn should_end_with_light_off_after_rapid_toggles() {
        let start = now();
        let mut state = HouseState::new(start);

        state.set_light(Room::LivingRoom, true, tick(start, 1));
        state.set_light(Room::LivingRoom, false, tick(start, 2));
        state.set_light(Room::LivingRoom, true, tick(start, 3));
        let second_off = tick(start, 4);
        let light = state.set_light(Room::LivingRoom, false, second_off);

        assert!(!light.is_on());
        assert!(light.last_update() >= second_off);
    }

    #[test]
    fn should_serialize_full_snapshot() {
        let state = HouseState::default();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["doors"]["principal"]["is_open"], false);
        assert_eq!(json["lights"]["dorm"]["is_on"], false);
        assert_eq!(json["pir"]["active"], false);
        assert!(json["ultra"]["last_distance_cm"].is_null());
        assert!(json["dht"]["last_update"].is_null());
        assert_eq!(json["safe_mode"], false);
    }

    #[test]
    fn should_accept_legacy_safe_mode_key() {
        let mut json = serde_json::to_value(HouseState::default()).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("safe_mode");
        object.insert("modo_seguro".to_string(), serde_json::Value::Bool(true));

        let state: HouseState = serde_json::from_value(json).unwrap();

        assert!(state.safe_mode());
    }
}
