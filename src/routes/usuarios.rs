//! User routes: `GET /usuarios` and `POST /usuarios`.
//!
//! Sibling module in the `routes` directory following the Explicit Module
//! Boundary Pattern (EMBP): handlers stay private, the gateway (`mod.rs`)
//! only sees the subrouter.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{NuevoUsuario, Usuario, UsuarioCreado};
use crate::repo;

// ---

pub fn router() -> Router<SqlitePool> {
    // ---
    Router::new().route("/usuarios", get(listar).post(crear))
}

async fn listar(State(pool): State<SqlitePool>) -> Result<Json<Vec<Usuario>>, ApiError> {
    // ---
    let usuarios = repo::list_usuarios(&pool)
        .await
        .map_err(ApiError::store("No se pudieron obtener los usuarios"))?;
    debug!("GET /usuarios - {} rows", usuarios.len());
    Ok(Json(usuarios))
}

async fn crear(
    State(pool): State<SqlitePool>,
    Json(body): Json<NuevoUsuario>,
) -> Result<(StatusCode, Json<UsuarioCreado>), ApiError> {
    // ---
    let (nombre, email) = match (super::presente(body.nombre), super::presente(body.email)) {
        (Some(nombre), Some(email)) => (nombre, email),
        _ => return Err(ApiError::validation("Nombre y email son requeridos")),
    };

    let creado = repo::create_usuario(&pool, &nombre, &email)
        .await
        .map_err(ApiError::store("No se pudo crear el usuario"))?;
    Ok((StatusCode::CREATED, Json(creado)))
}
