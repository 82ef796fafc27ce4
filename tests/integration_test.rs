use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;

use orquideas_backend::{routes, schema};

// ---

/// Spawn the full application on an ephemeral port against a fresh in-memory
/// database and return its base URL.
async fn spawn_app() -> Result<String> {
    // ---
    // Single connection: each pooled in-memory connection would otherwise see
    // its own private database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    schema::create_schema(&pool).await?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, routes::router(pool)).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}

// ---

#[tokio::test]
async fn usuarios_create_and_list() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/usuarios"))
        .json(&json!({ "nombre": "Ana", "email": "ana@example.com" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ana: Value = resp.json().await?;
    assert_eq!(ana["nombre"], "Ana");
    assert_eq!(ana["email"], "ana@example.com");

    let resp = client
        .post(format!("{base}/usuarios"))
        .json(&json!({ "nombre": "Luis", "email": "luis@example.com" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let luis: Value = resp.json().await?;

    // Store-assigned ids are strictly increasing
    assert!(luis["id"].as_i64().unwrap() > ana["id"].as_i64().unwrap());

    let listed: Vec<Value> = client
        .get(format!("{base}/usuarios"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["nombre"], "Ana");

    // GET is idempotent: no intervening POST, identical array
    let again: Vec<Value> = client
        .get(format!("{base}/usuarios"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, again);

    Ok(())
}

#[tokio::test]
async fn usuarios_missing_email_is_rejected_without_insert() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/usuarios"))
        .json(&json!({ "nombre": "Ana" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["error"].as_str().unwrap().contains("requeridos"));

    // No row was inserted
    let listed: Vec<Value> = client
        .get(format!("{base}/usuarios"))
        .send()
        .await?
        .json()
        .await?;
    assert!(listed.is_empty());

    Ok(())
}

#[tokio::test]
async fn sensores_apply_defaults_when_omitted() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/sensores"))
        .json(&json!({ "nombre_sensor": "Sensor Norte" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let creado: Value = resp.json().await?;
    assert_eq!(creado["tipo_conexion"], "WiFi");
    assert_eq!(creado["ubicacion"], "Invernadero");

    let listed: Vec<Value> = client
        .get(format!("{base}/sensores"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["tipo_conexion"], "WiFi");

    let resp = client
        .post(format!("{base}/sensores"))
        .json(&json!({ "tipo_conexion": "LoRa" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[derive(Debug, Deserialize)]
struct Lectura {
    id_lectura: i64,
    id_sensor: Option<i64>,
    humedad: Option<f64>,
    temperatura: Option<f64>,
    nombre_sensor: Option<String>,
}

#[tokio::test]
async fn lecturas_echo_join_and_order() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let sensor: Value = client
        .post(format!("{base}/sensores"))
        .json(&json!({ "nombre_sensor": "Sensor Orquídeas" }))
        .send()
        .await?
        .json()
        .await?;
    let id_sensor = sensor["id"].as_i64().unwrap();

    let resp = client
        .post(format!("{base}/lecturas"))
        .json(&json!({ "id_sensor": id_sensor, "humedad": 75.5, "temperatura": 21.0 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let primera: Value = resp.json().await?;
    assert_eq!(primera["id_sensor"].as_i64(), Some(id_sensor));
    assert_eq!(primera["humedad"].as_f64(), Some(75.5));
    assert_eq!(primera["temperatura"].as_f64(), Some(21.0));

    // Second reading references a sensor that does not exist; the LEFT JOIN
    // keeps it listed with a null sensor name.
    let resp = client
        .post(format!("{base}/lecturas"))
        .json(&json!({ "id_sensor": 999, "humedad": 80.0, "temperatura": 22.5 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let segunda: Value = resp.json().await?;

    let listed: Vec<Lectura> = client
        .get(format!("{base}/lecturas"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 2);

    // Most recent first
    assert_eq!(listed[0].id_lectura, segunda["id"].as_i64().unwrap());
    assert_eq!(listed[0].id_sensor, Some(999));
    assert!(listed[0].nombre_sensor.is_none());

    assert_eq!(listed[1].id_sensor, Some(id_sensor));
    assert_eq!(listed[1].humedad, Some(75.5));
    assert_eq!(listed[1].temperatura, Some(21.0));
    assert_eq!(listed[1].nombre_sensor.as_deref(), Some("Sensor Orquídeas"));

    Ok(())
}

#[tokio::test]
async fn lecturas_missing_field_is_rejected() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/lecturas"))
        .json(&json!({ "id_sensor": 1, "humedad": 75.5 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert!(body["error"].as_str().unwrap().contains("temperatura"));

    Ok(())
}

#[tokio::test]
async fn calendario_riego_defaults_activo_to_true() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/calendario_riego"))
        .json(&json!({ "dia_semana": "lunes", "hora_riego": "07:30" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let creado: Value = resp.json().await?;
    assert_eq!(creado["activo"], Value::Bool(true));

    let resp = client
        .post(format!("{base}/calendario_riego"))
        .json(&json!({ "dia_semana": "jueves" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let listed: Vec<Value> = client
        .get(format!("{base}/calendario_riego"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["dia_semana"], "lunes");
    assert_eq!(listed[0]["hora_riego"], "07:30");

    Ok(())
}

#[tokio::test]
async fn check_reports_ok_with_parseable_timestamp() -> Result<()> {
    // ---
    let base = spawn_app().await?;
    let client = Client::new();

    let body: Value = client
        .get(format!("{base}/check"))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["status"], "OK");
    let timestamp = body["timestamp"].as_str().unwrap();
    let parsed: DateTime<Utc> = timestamp.parse()?;
    assert!(parsed <= Utc::now());

    Ok(())
}
