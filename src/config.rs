use crate::error::{config::ConfigError, AppError};

const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Whether SQL statements are logged by the connection pool.
    pub sqlx_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            sqlx_logging: parse_bool("SQLX_LOGGING", std::env::var("SQLX_LOGGING").ok())?,
        })
    }
}

/// Reads an optional boolean flag; absent means `false`.
fn parse_bool(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
