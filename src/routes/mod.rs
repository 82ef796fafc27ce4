use axum::Router;
use sqlx::SqlitePool;

mod check;
mod lecturas;
mod riego;
mod sensores;
mod usuarios;

// ---

pub fn router(pool: SqlitePool) -> Router {
    // ---
    Router::new()
        .merge(usuarios::router())
        .merge(sensores::router())
        .merge(lecturas::router())
        .merge(riego::router())
        .merge(check::router())
        .with_state(pool)
}

/// Presence check shared by the POST handlers: `None` and the empty string
/// both count as a missing text field.
fn presente(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
