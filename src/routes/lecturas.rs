//! Reading routes: `GET /lecturas` and `POST /lecturas`.
//!
//! The listing joins each reading with its sensor's name and returns the most
//! recent reading first. All three creation fields are required; the recorded
//! timestamp is assigned by the store.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{Lectura, LecturaCreada, NuevaLectura};
use crate::repo;

// ---

pub fn router() -> Router<SqlitePool> {
    // ---
    Router::new().route("/lecturas", get(listar).post(crear))
}

async fn listar(State(pool): State<SqlitePool>) -> Result<Json<Vec<Lectura>>, ApiError> {
    // ---
    let lecturas = repo::list_lecturas(&pool)
        .await
        .map_err(ApiError::store("No se pudieron obtener las lecturas"))?;
    debug!("GET /lecturas - {} rows", lecturas.len());
    Ok(Json(lecturas))
}

async fn crear(
    State(pool): State<SqlitePool>,
    Json(body): Json<NuevaLectura>,
) -> Result<(StatusCode, Json<LecturaCreada>), ApiError> {
    // ---
    let (id_sensor, humedad, temperatura) = match (body.id_sensor, body.humedad, body.temperatura)
    {
        (Some(id_sensor), Some(humedad), Some(temperatura)) => (id_sensor, humedad, temperatura),
        _ => {
            return Err(ApiError::validation(
                "id_sensor, humedad y temperatura son requeridos",
            ))
        }
    };

    let creada = repo::create_lectura(&pool, id_sensor, humedad, temperatura)
        .await
        .map_err(ApiError::store("No se pudo registrar la lectura"))?;
    Ok((StatusCode::CREATED, Json(creada)))
}
