//! Reading simulation job.
//!
//! Recurring background task that fabricates greenhouse readings so the
//! frontend has data even without a real sensor feed. Each tick ensures at
//! least one sensor exists, then inserts a reading with bounded random
//! humidity/temperature for the first sensor on record.
//!
//! The job never terminates the process: a failed tick is logged and the next
//! tick is an independent attempt.

use std::time::Duration;

use rand::Rng;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::repo;

// ---

/// Sensor created automatically when the database holds none.
const DEFAULT_SENSOR_NOMBRE: &str = "Sensor Orquídeas 1";
const DEFAULT_SENSOR_CONEXION: &str = "WiFi";
const DEFAULT_SENSOR_UBICACION: &str = "Invernadero Principal";

/// Run the simulation loop forever with a fixed period.
///
/// Spawned from `main.rs` on the shared runtime; holds its own pool handle.
pub async fn run(pool: SqlitePool, period: Duration) {
    // ---
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;
        if let Err(e) = tick(&pool).await {
            warn!("simulation tick failed: {e}");
        }
    }
}

/// One simulation tick: ensure a sensor exists, insert a random reading.
pub async fn tick(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // ---
    let sensores = repo::list_sensores(pool).await?;

    let id_sensor = match sensores.first() {
        Some(sensor) => sensor.id_sensor,
        None => {
            let creado = repo::create_sensor(
                pool,
                DEFAULT_SENSOR_NOMBRE,
                DEFAULT_SENSOR_CONEXION,
                DEFAULT_SENSOR_UBICACION,
            )
            .await?;
            info!("simulation sensor created (id {})", creado.id);
            creado.id
        }
    };

    // ThreadRng is !Send, keep it out of scope before the insert awaits
    let (humedad, temperatura) = {
        let mut rng = rand::thread_rng();
        (
            round2(rng.gen_range(70.0..90.0)),  // 70–90 %
            round2(rng.gen_range(18.0..24.0)),  // 18–24 °C
        )
    };

    let lectura = repo::create_lectura(pool, id_sensor, humedad, temperatura).await?;
    info!(
        "simulated reading {}: {humedad}% humidity | {temperatura}°C",
        lectura.id
    );
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
