//! Configuration loader for the `orquideas-backend` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// SQLite connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// TCP port the HTTP server binds to.
    pub port: u16,

    /// Period of the reading simulation job, in seconds.
    pub sim_interval_secs: u64,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `DATABASE_URL` – SQLite connection string (default: `sqlite:orquideas.db?mode=rwc`)
/// - `PORT` – HTTP listen port (default: 3001)
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `SIM_INTERVAL_SECS` – simulation job period in seconds (default: 5)
///
/// Returns an error if any variable is present but unparseable.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = env_or!("DATABASE_URL", "sqlite:orquideas.db?mode=rwc");
    let db_pool_max = parse_env_u32!("DB_POOL_MAX", 5);
    let port = parse_env_u32!("PORT", 3001);
    let port = u16::try_from(port).map_err(|_| anyhow!("PORT out of range: {}", port))?;
    let sim_interval_secs = u64::from(parse_env_u32!("SIM_INTERVAL_SECS", 5));

    Ok(Config {
        db_url,
        db_pool_max,
        port,
        sim_interval_secs,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL      : {}", self.db_url);
        tracing::info!("  DB_POOL_MAX       : {}", self.db_pool_max);
        tracing::info!("  PORT              : {}", self.port);
        tracing::info!("  SIM_INTERVAL_SECS : {}", self.sim_interval_secs);
    }
}
