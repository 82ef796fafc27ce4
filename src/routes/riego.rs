//! Watering schedule routes: `GET /calendario_riego` and `POST /calendario_riego`.
//!
//! Entries are weekday + time rules with an active flag; there is no
//! execution logic behind them, the frontend only plans against the list.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{NuevoRiego, Riego, RiegoCreado};
use crate::repo;

// ---

pub fn router() -> Router<SqlitePool> {
    // ---
    Router::new().route("/calendario_riego", get(listar).post(crear))
}

async fn listar(State(pool): State<SqlitePool>) -> Result<Json<Vec<Riego>>, ApiError> {
    // ---
    let riegos = repo::list_riegos(&pool)
        .await
        .map_err(ApiError::store("No se pudo obtener el calendario de riego"))?;
    debug!("GET /calendario_riego - {} rows", riegos.len());
    Ok(Json(riegos))
}

async fn crear(
    State(pool): State<SqlitePool>,
    Json(body): Json<NuevoRiego>,
) -> Result<(StatusCode, Json<RiegoCreado>), ApiError> {
    // ---
    let (dia_semana, hora_riego) =
        match (super::presente(body.dia_semana), super::presente(body.hora_riego)) {
            (Some(dia_semana), Some(hora_riego)) => (dia_semana, hora_riego),
            _ => {
                return Err(ApiError::validation(
                    "Día de la semana y hora de riego son requeridos",
                ))
            }
        };
    let activo = body.activo.unwrap_or(true);

    let creado = repo::create_riego(&pool, &dia_semana, &hora_riego, activo)
        .await
        .map_err(ApiError::store("No se pudo registrar el calendario de riego"))?;
    Ok((StatusCode::CREATED, Json(creado)))
}
