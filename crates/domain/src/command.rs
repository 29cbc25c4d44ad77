//! Commands relayed to the physical controller.
//!
//! The controller exposes the same paths as the inbound API, so a command
//! is fully described by its [`path`](Command::path).

use crate::door::DoorId;
use crate::light::Room;

/// A state change the physical controller must act on.
///
/// Sensor readings are inbound reports and have no command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Door { door: DoorId, open: bool },
    Light { room: Room, on: bool },
    MotionSensor { active: bool },
    Ultrasonic { active: bool },
    SafeMode,
}

impl Command {
    /// Controller path for this command, e.g. `/garage/close`.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Door { door, open } => {
                format!("/{door}/{}", if open { "open" } else { "close" })
            }
            Self::Light { room, on } => format!("/{room}/{}", on_off(on)),
            Self::MotionSensor { active } => format!("/pir/{}", on_off(active)),
            Self::Ultrasonic { active } => format!("/ultra/{}", on_off(active)),
            Self::SafeMode => "/modo/seguro".to_string(),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_door_paths() {
        let open = Command::Door {
            door: DoorId::Principal,
            open: true,
        };
        let close = Command::Door {
            door: DoorId::Garage,
            open: false,
        };
        assert_eq!(open.path(), "/principal/open");
        assert_eq!(close.path(), "/garage/close");
    }

    #[test]
    fn should_build_light_paths_with_room_names() {
        let on = Command::Light {
            room: Room::Kitchen,
            on: true,
        };
        let off = Command::Light {
            room: Room::Bedroom,
            on: false,
        };
        assert_eq!(on.path(), "/cocina/on");
        assert_eq!(off.path(), "/dorm/off");
    }

    #[test]
    fn should_build_sensor_paths() {
        assert_eq!(Command::MotionSensor { active: true }.path(), "/pir/on");
        assert_eq!(Command::Ultrasonic { active: false }.path(), "/ultra/off");
    }

    #[test]
    fn should_build_safe_mode_path() {
        assert_eq!(Command::SafeMode.to_string(), "/modo/seguro");
    }
}
