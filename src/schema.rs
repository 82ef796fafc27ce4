//! Database schema management for `orquideas-backend`.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs` (EMBP: single gateway call).

use anyhow::Result;
use sqlx::SqlitePool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the four tables behind the CRUD surface: `usuarios`, `sensores`,
/// `lecturas` and `calendario_riego`. Safe to call on every startup; no-op if
/// objects already exist. The columns stay nullable on purpose: presence is
/// enforced by the API layer, not the store.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id_usuario INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre     TEXT,
            email      TEXT
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sensores (
            id_sensor     INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre_sensor TEXT,
            tipo_conexion TEXT,
            ubicacion     TEXT
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lecturas (
            id_lectura     INTEGER PRIMARY KEY AUTOINCREMENT,
            id_sensor      INTEGER,
            humedad        REAL,
            temperatura    REAL,
            fecha_registro DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS calendario_riego (
            id_riego   INTEGER PRIMARY KEY AUTOINCREMENT,
            dia_semana TEXT,
            hora_riego TEXT,
            activo     INTEGER DEFAULT 1
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Basic indexes for the readings listing (sort + join columns)
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lecturas_fecha_registro
            ON lecturas (fecha_registro);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lecturas_id_sensor
            ON lecturas (id_sensor);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
