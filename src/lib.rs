//! Library surface for the `orquideas-backend` service.
//!
//! The binary in `main.rs` is a thin bootstrap; everything it wires together
//! lives here so the integration tests can spawn the same router in-process
//! against an in-memory database.

pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;
pub mod schema;
pub mod sim;

pub use config::Config;
