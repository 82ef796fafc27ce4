// src/routes/check.rs
//! Liveness endpoint for the greenhouse backend.
//!
//! This module defines the `/check` route the frontend polls to verify that
//! the service is running and able to respond to HTTP requests. It is a
//! sibling module in the `routes` directory and follows the Explicit Module
//! Boundary Pattern (EMBP):
//! - Internal to this file: endpoint handler(s) and related types
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/check` route
//!
//! The gateway merges this subrouter into the top-level API router so that
//! `main.rs` does not need to know about individual endpoints.

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON response body for the `/check` endpoint.
#[derive(Serialize)]
struct CheckResponse {
    status: &'static str,
    mensaje: &'static str,
    timestamp: DateTime<Utc>,
}

/// Handle `GET /check`.
///
/// Returns a static status plus the current timestamp (RFC 3339). This
/// endpoint is deliberately lightweight and does not touch the database, so
/// it reports liveness even when the store is unavailable.
async fn check() -> Json<CheckResponse> {
    Json(CheckResponse {
        status: "OK",
        mensaje: "Servidor y base de datos activos",
        timestamp: Utc::now(),
    })
}

/// Create a subrouter containing the `/check` route.
///
/// This router is generic over the application state so it can merge cleanly
/// with the gateway router, regardless of the state type (e.g., `SqlitePool`).
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/check", get(check))
}
