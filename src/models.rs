//! Data models for the greenhouse monitor.
//!
//! Field names mirror the SQLite columns and the JSON wire format consumed by
//! the existing frontend, which is Spanish throughout (`nombre`, `humedad`,
//! `fecha_registro`, ...). List models tolerate NULL columns because the
//! schema does not declare NOT NULL; creation responses echo the concrete
//! values that were inserted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---

/// A registered user, as stored in `usuarios`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Usuario {
    // ---
    pub id_usuario: i64,
    pub nombre: Option<String>,
    pub email: Option<String>,
}

/// A greenhouse sensor, as stored in `sensores`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Sensor {
    // ---
    pub id_sensor: i64,
    pub nombre_sensor: Option<String>,
    pub tipo_conexion: Option<String>,
    pub ubicacion: Option<String>,
}

/// A humidity/temperature sample joined with its sensor's name.
///
/// `nombre_sensor` comes from a LEFT JOIN, so a reading whose sensor no longer
/// exists still lists with a null name.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Lectura {
    // ---
    pub id_lectura: i64,
    pub id_sensor: Option<i64>,
    pub humedad: Option<f64>,
    pub temperatura: Option<f64>,
    pub fecha_registro: NaiveDateTime,
    pub nombre_sensor: Option<String>,
}

/// A watering schedule entry, as stored in `calendario_riego`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Riego {
    // ---
    pub id_riego: i64,
    pub dia_semana: Option<String>,
    pub hora_riego: Option<String>,
    pub activo: Option<bool>,
}

// ---

/// Request body for `POST /usuarios`.
#[derive(Debug, Deserialize)]
pub struct NuevoUsuario {
    // ---
    pub nombre: Option<String>,
    pub email: Option<String>,
}

/// Request body for `POST /sensores`.
#[derive(Debug, Deserialize)]
pub struct NuevoSensor {
    // ---
    pub nombre_sensor: Option<String>,
    pub tipo_conexion: Option<String>,
    pub ubicacion: Option<String>,
}

/// Request body for `POST /lecturas`.
#[derive(Debug, Deserialize)]
pub struct NuevaLectura {
    // ---
    pub id_sensor: Option<i64>,
    pub humedad: Option<f64>,
    pub temperatura: Option<f64>,
}

/// Request body for `POST /calendario_riego`.
#[derive(Debug, Deserialize)]
pub struct NuevoRiego {
    // ---
    pub dia_semana: Option<String>,
    pub hora_riego: Option<String>,
    pub activo: Option<bool>,
}

// ---

/// Response body for a created user: the assigned id plus the echoed input.
#[derive(Debug, Serialize)]
pub struct UsuarioCreado {
    // ---
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

/// Response body for a created sensor, with defaults applied.
#[derive(Debug, Serialize)]
pub struct SensorCreado {
    // ---
    pub id: i64,
    pub nombre_sensor: String,
    pub tipo_conexion: String,
    pub ubicacion: String,
}

/// Response body for a created reading.
#[derive(Debug, Serialize)]
pub struct LecturaCreada {
    // ---
    pub id: i64,
    pub id_sensor: i64,
    pub humedad: f64,
    pub temperatura: f64,
}

/// Response body for a created watering schedule entry.
#[derive(Debug, Serialize)]
pub struct RiegoCreado {
    // ---
    pub id: i64,
    pub dia_semana: String,
    pub hora_riego: String,
    pub activo: bool,
}
