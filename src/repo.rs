//! Repository layer: typed queries against the SQLite pool.
//!
//! One list + one insert per entity, nothing else; records are never updated
//! or deleted. Every function takes the pool as an injected dependency so
//! tests can substitute an in-memory database. Inserts return the rowid
//! assigned by the store together with the submitted fields rather than
//! re-reading the row.
//!
//! Presence validation happens in the HTTP layer before these functions are
//! called; arguments here are already-validated concrete values.

use sqlx::SqlitePool;

use crate::models::{
    Lectura, LecturaCreada, Riego, RiegoCreado, Sensor, SensorCreado, Usuario, UsuarioCreado,
};

// ---

pub async fn list_usuarios(pool: &SqlitePool) -> Result<Vec<Usuario>, sqlx::Error> {
    // ---
    sqlx::query_as("SELECT * FROM usuarios")
        .fetch_all(pool)
        .await
}

pub async fn create_usuario(
    pool: &SqlitePool,
    nombre: &str,
    email: &str,
) -> Result<UsuarioCreado, sqlx::Error> {
    // ---
    let result = sqlx::query("INSERT INTO usuarios (nombre, email) VALUES (?, ?)")
        .bind(nombre)
        .bind(email)
        .execute(pool)
        .await?;

    Ok(UsuarioCreado {
        id: result.last_insert_rowid(),
        nombre: nombre.to_string(),
        email: email.to_string(),
    })
}

// ---

pub async fn list_sensores(pool: &SqlitePool) -> Result<Vec<Sensor>, sqlx::Error> {
    // ---
    sqlx::query_as("SELECT * FROM sensores")
        .fetch_all(pool)
        .await
}

pub async fn create_sensor(
    pool: &SqlitePool,
    nombre_sensor: &str,
    tipo_conexion: &str,
    ubicacion: &str,
) -> Result<SensorCreado, sqlx::Error> {
    // ---
    let result = sqlx::query(
        "INSERT INTO sensores (nombre_sensor, tipo_conexion, ubicacion) VALUES (?, ?, ?)",
    )
    .bind(nombre_sensor)
    .bind(tipo_conexion)
    .bind(ubicacion)
    .execute(pool)
    .await?;

    Ok(SensorCreado {
        id: result.last_insert_rowid(),
        nombre_sensor: nombre_sensor.to_string(),
        tipo_conexion: tipo_conexion.to_string(),
        ubicacion: ubicacion.to_string(),
    })
}

// ---

/// List all readings, most recent first, with the owning sensor's name.
///
/// LEFT JOIN so a reading whose `id_sensor` no longer resolves still lists
/// (with a null `nombre_sensor`). `CURRENT_TIMESTAMP` has one-second
/// resolution, so the id is used as a tie-breaker to keep "most recent first"
/// deterministic for readings inserted within the same second.
pub async fn list_lecturas(pool: &SqlitePool) -> Result<Vec<Lectura>, sqlx::Error> {
    // ---
    sqlx::query_as(
        r#"
        SELECT l.id_lectura, l.id_sensor, l.humedad, l.temperatura,
               l.fecha_registro, s.nombre_sensor
        FROM lecturas l
        LEFT JOIN sensores s ON l.id_sensor = s.id_sensor
        ORDER BY l.fecha_registro DESC, l.id_lectura DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a reading; `fecha_registro` is assigned by the store.
pub async fn create_lectura(
    pool: &SqlitePool,
    id_sensor: i64,
    humedad: f64,
    temperatura: f64,
) -> Result<LecturaCreada, sqlx::Error> {
    // ---
    let result =
        sqlx::query("INSERT INTO lecturas (id_sensor, humedad, temperatura) VALUES (?, ?, ?)")
            .bind(id_sensor)
            .bind(humedad)
            .bind(temperatura)
            .execute(pool)
            .await?;

    Ok(LecturaCreada {
        id: result.last_insert_rowid(),
        id_sensor,
        humedad,
        temperatura,
    })
}

// ---

pub async fn list_riegos(pool: &SqlitePool) -> Result<Vec<Riego>, sqlx::Error> {
    // ---
    sqlx::query_as("SELECT * FROM calendario_riego")
        .fetch_all(pool)
        .await
}

pub async fn create_riego(
    pool: &SqlitePool,
    dia_semana: &str,
    hora_riego: &str,
    activo: bool,
) -> Result<RiegoCreado, sqlx::Error> {
    // ---
    let result = sqlx::query(
        "INSERT INTO calendario_riego (dia_semana, hora_riego, activo) VALUES (?, ?, ?)",
    )
    .bind(dia_semana)
    .bind(hora_riego)
    .bind(activo)
    .execute(pool)
    .await?;

    Ok(RiegoCreado {
        id: result.last_insert_rowid(),
        dia_semana: dia_semana.to_string(),
        hora_riego: hora_riego.to_string(),
        activo,
    })
}
