//! HTTP server exposing the profile engine.
//!
//! The server is an adapter only: it keeps no state between requests beyond
//! the shared, immutable [`Engine`](crate::engine::Engine).
//!
//! # Endpoints
//!
//! - `GET  /health` — Liveness probe
//! - `POST /assess` — Assess a set of raw selections
//! - `POST /reduce` — Advance questionnaire state by one action

pub mod routes;

pub use routes::{app_router, AppState, AssessResponse, ReduceRequest};
