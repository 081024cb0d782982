//! Client configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `TALENT__`-prefixed environment variables. Every
//! field carries a default, so a machine with no configuration at all talks
//! to the local development API.

pub mod api;
pub mod logging;
pub mod polling;
pub mod realtime;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::polling::PollingConfig;
pub use self::realtime::RealtimeConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Persisted session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Chat WebSocket settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Background task polling settings.
    #[serde(default)]
    pub polling: PollingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `<dir>/default.toml`, `<dir>/<env>.toml`, and
    /// environment variables prefixed with `TALENT__` (e.g.
    /// `TALENT__API__BASE_URL`). Both files are optional.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.api.validate()?;
        Ok(loaded)
    }
}
