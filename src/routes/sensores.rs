//! Sensor routes: `GET /sensores` and `POST /sensores`.
//!
//! Only the sensor name is required on creation; connection type and location
//! fall back to the greenhouse defaults and the applied values are echoed in
//! the response.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{NuevoSensor, Sensor, SensorCreado};
use crate::repo;

// ---

const DEFAULT_TIPO_CONEXION: &str = "WiFi";
const DEFAULT_UBICACION: &str = "Invernadero";

pub fn router() -> Router<SqlitePool> {
    // ---
    Router::new().route("/sensores", get(listar).post(crear))
}

async fn listar(State(pool): State<SqlitePool>) -> Result<Json<Vec<Sensor>>, ApiError> {
    // ---
    let sensores = repo::list_sensores(&pool)
        .await
        .map_err(ApiError::store("No se pudieron obtener los sensores"))?;
    debug!("GET /sensores - {} rows", sensores.len());
    Ok(Json(sensores))
}

async fn crear(
    State(pool): State<SqlitePool>,
    Json(body): Json<NuevoSensor>,
) -> Result<(StatusCode, Json<SensorCreado>), ApiError> {
    // ---
    let Some(nombre_sensor) = super::presente(body.nombre_sensor) else {
        return Err(ApiError::validation("El nombre del sensor es requerido"));
    };
    let tipo_conexion = body
        .tipo_conexion
        .unwrap_or_else(|| DEFAULT_TIPO_CONEXION.to_string());
    let ubicacion = body
        .ubicacion
        .unwrap_or_else(|| DEFAULT_UBICACION.to_string());

    let creado = repo::create_sensor(&pool, &nombre_sensor, &tipo_conexion, &ubicacion)
        .await
        .map_err(ApiError::store("No se pudo registrar el sensor"))?;
    Ok((StatusCode::CREATED, Json(creado)))
}
