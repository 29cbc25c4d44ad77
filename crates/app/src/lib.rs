//! # casa-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CommandForwarder` — relay a command to the physical controller
//! - Define the **driving/inbound** use-case struct:
//!   - `HouseService` — the single owner of the `HouseState`; every read and
//!     every mutation goes through it
//! - Orchestrate domain objects without knowing *how* commands reach the
//!   controller
//!
//! ## Dependency rule
//! Depends on `casa-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
