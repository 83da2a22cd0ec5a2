//! Runtime configuration loaded from the environment.
//!
//! `Config` is built once when the API starts and lives in its state.
//! Nothing reads environment variables after startup.

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub attendance_token_ttl_minutes: i64,
    pub geofence_radius_meters: f64,
    pub online_audit_probability: f64,
}

impl Config {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "course-rep"),
            log_level: var_or("LOG_LEVEL", "api=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: required("DATABASE_PATH")?,
            host: var_or("HOST", "127.0.0.1"),
            port: parsed("PORT", "4000")?,
            jwt_secret: required("JWT_SECRET")?,
            attendance_token_ttl_minutes: parsed("ATTENDANCE_TOKEN_TTL_MINUTES", "15")?,
            geofence_radius_meters: parsed("GEOFENCE_RADIUS_METERS", "50")?,
            online_audit_probability: parsed("ONLINE_AUDIT_PROBABILITY", "0.2")?,
        })
    }

    /// A configuration suitable for tests: in-memory database, fixed secret.
    pub fn for_tests() -> Self {
        Self {
            env: "test".into(),
            project_name: "course-rep".into(),
            log_level: "api=debug".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            database_path: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 4000,
            jwt_secret: "test-secret-do-not-use".into(),
            attendance_token_ttl_minutes: 15,
            geofence_radius_meters: 50.0,
            online_audit_probability: 0.2,
        }
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.into())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = var_or(name, default);
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value: raw })
}
