//! Doors — the two motorised doors of the house.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, advance};

/// Stable identifier of a door.
///
/// The set is closed: a door is either the main entrance or the garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorId {
    Principal,
    Garage,
}

impl DoorId {
    /// Every door, in display order.
    pub const ALL: [Self; 2] = [Self::Principal, Self::Garage];

    /// Wire name, also used as the path segment (`/principal/open`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Garage => "garage",
        }
    }
}

impl std::fmt::Display for DoorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open/closed status of one door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    name: DoorId,
    is_open: bool,
    last_update: Timestamp,
}

impl Door {
    /// A closed door, last updated at `ts`.
    #[must_use]
    pub fn closed(name: DoorId, ts: Timestamp) -> Self {
        Self {
            name,
            is_open: false,
            last_update: ts,
        }
    }

    #[must_use]
    pub fn name(&self) -> DoorId {
        self.name
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Set the open flag and refresh `last_update`.
    pub fn set_open(&mut self, is_open: bool, ts: Timestamp) {
        self.is_open = is_open;
        self.last_update = advance(self.last_update, ts);
    }
}

/// The fixed set of doors, serialized as `{"principal": …, "garage": …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doors {
    principal: Door,
    garage: Door,
}

impl Doors {
    /// All doors closed, last updated at `ts`.
    #[must_use]
    pub fn new(ts: Timestamp) -> Self {
        Self {
            principal: Door::closed(DoorId::Principal, ts),
            garage: Door::closed(DoorId::Garage, ts),
        }
    }

    #[must_use]
    pub fn get(&self, id: DoorId) -> &Door {
        match id {
            DoorId::Principal => &self.principal,
            DoorId::Garage => &self.garage,
        }
    }

    pub fn get_mut(&mut self, id: DoorId) -> &mut Door {
        match id {
            DoorId::Principal => &mut self.principal,
            DoorId::Garage => &mut self.garage,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Door> {
        [&self.principal, &self.garage].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Door> {
        [&mut self.principal, &mut self.garage].into_iter()
    }
}
