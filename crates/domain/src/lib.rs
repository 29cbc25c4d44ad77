//! # casa-domain
//!
//! Pure domain model for the casa home controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **sub-entities**: doors, lights, the motion sensor (PIR),
//!   the ultrasonic distance sensor and the climate sensor (DHT)
//! - Define the **`HouseState`** aggregate that owns every sub-entity, and
//!   its mutation rules (timestamps, safe mode)
//! - Define **Commands** relayed to the physical controller
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod door;
pub mod house;
pub mod light;
pub mod sensor;
