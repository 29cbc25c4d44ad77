//! # casa-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** used by the dashboard and by the controller
//!   (`/status`, `/principal/open`, `/cocina/on`, `/dht/update`, …)
//! - Reject malformed request bodies before they reach the house state
//! - Map HTTP requests into `HouseService` calls (driving adapter)
//! - Map application results into JSON responses
//!
//! Command endpoints accept both `GET` and `POST` so that a browser link or
//! a bare `curl` can drive them.
//!
//! ## Dependency rule
//! Depends on `casa-app` (for port traits and services) and `casa-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
