//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a serde default so a partial file (or none at
//! all) still yields a usable configuration.

pub mod app;
pub mod auth;
pub mod database;
pub mod geography;
pub mod logging;
pub mod office;
pub mod realtime;
pub mod reports;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::geography::GeographyConfig;
pub use self::logging::LoggingConfig;
pub use self::office::OfficeConfig;
pub use self::realtime::RealtimeConfig;
pub use self::reports::ReportsConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides (`LOSTPROP__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "LOSTPROP";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence backend settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Police office identity used for clocks and exported documents.
    #[serde(default)]
    pub office: OfficeConfig,
    /// Report submission limits.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Real-time snapshot settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Administrative-region lookup settings.
    #[serde(default)]
    pub geography: GeographyConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// `config/{env}.toml` and environment variables prefixed with
    /// `LOSTPROP`, using `__` as the section separator.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
