//! Lights — one per room.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, advance};

/// Room a light belongs to. Serialized with the controller's room names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "cocina")]
    Kitchen,
    #[serde(rename = "sala")]
    LivingRoom,
    #[serde(rename = "dorm")]
    Bedroom,
}

impl Room {
    /// Every room, in display order.
    pub const ALL: [Self; 3] = [Self::Kitchen, Self::LivingRoom, Self::Bedroom];

    /// Wire name, also used as the path segment (`/cocina/on`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kitchen => "cocina",
            Self::LivingRoom => "sala",
            Self::Bedroom => "dorm",
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On/off status of a room light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    room: Room,
    is_on: bool,
    last_update: Timestamp,
}

impl Light {
    /// A light that is off, last updated at `ts`.
    #[must_use]
    pub fn off(room: Room, ts: Timestamp) -> Self {
        Self {
            room,
            is_on: false,
            last_update: ts,
        }
    }

    #[must_use]
    pub fn room(&self) -> Room {
        self.room
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Switch the light and refresh `last_update`.
    pub fn set_on(&mut self, is_on: bool, ts: Timestamp) {
        self.is_on = is_on;
        self.last_update = advance(self.last_update, ts);
    }
}

/// The fixed set of lights, serialized as `{"cocina": …, "sala": …, "dorm": …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lights {
    cocina: Light,
    sala: Light,
    dorm: Light,
}

impl Lights {
    /// All lights off, last updated at `ts`.
    #[must_use]
    pub fn new(ts: Timestamp) -> Self {
        Self {
            cocina: Light::off(Room::Kitchen, ts),
            sala: Light::off(Room::LivingRoom, ts),
            dorm: Light::off(Room::Bedroom, ts),
        }
    }

    #[must_use]
    pub fn get(&self, room: Room) -> &Light {
        match room {
            Room::Kitchen => &self.cocina,
            Room::LivingRoom => &self.sala,
            Room::Bedroom => &self.dorm,
        }
    }

    pub fn get_mut(&mut self, room: Room) -> &mut Light {
        match room {
            Room::Kitchen => &mut self.cocina,
            Room::LivingRoom => &mut self.sala,
            Room::Bedroom => &mut self.dorm,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        [&self.cocina, &self.sala, &self.dorm].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Light> {
        [&mut self.cocina, &mut self.sala, &mut self.dorm].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;
    use chrono::TimeDelta;

    #[test]
    fn should_start_off() {
        let lights = Lights::new(now());
        assert!(lights.iter().all(|light| !light.is_on()));
    }

    #[test]
    fn should_look_up_every_room() {
        let lights = Lights::new(now());
        for room in Room::ALL {
            assert_eq!(lights.get(room).room(), room);
        }
    }

    #[test]
    fn should_switch_only_the_addressed_light() {
        let start = now();
        let mut lights = Lights::new(start);

        lights
            .get_mut(Room::LivingRoom)
            .set_on(true, start + TimeDelta::milliseconds(1));

        assert!(lights.get(Room::LivingRoom).is_on());
        assert!(!lights.get(Room::Kitchen).is_on());
        assert!(!lights.get(Room::Bedroom).is_on());
        assert_eq!(lights.get(Room::Kitchen).last_update(), start);
    }

    #[test]
    fn should_serialize_room_with_controller_names() {
        let lights = Lights::new(now());
        let json = serde_json::to_value(&lights).unwrap();
        assert_eq!(json["cocina"]["room"], "cocina");
        assert_eq!(json["sala"]["room"], "sala");
        assert_eq!(json["dorm"]["room"], "dorm");
    }

    #[test]
    fn should_parse_room_from_wire_name() {
        let room: Room = serde_json::from_str("\"dorm\"").unwrap();
        assert_eq!(room, Room::Bedroom);
        assert!(serde_json::from_str::<Room>("\"bedroom\"").is_err());
    }
}
