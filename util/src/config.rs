//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};
use strum::{Display, EnumString};

/// Address the HTTP server binds to. The port is fixed and not configurable.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// `EnvFilter` directive used when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "api=info,db=info,migration=info,seeder=info";

/// Which set of routes the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ServiceMode {
    /// `GET /` lists rows from the `weather` table. Requires `DB_URL`.
    #[default]
    Database,
    /// `GET /` returns a single hardcoded record.
    Static,
    /// Same routes as `Static`, without the request logging middleware.
    StaticQuiet,
    /// Only `POST /echo`.
    Echo,
}

impl ServiceMode {
    pub fn logs_requests(self) -> bool {
        !matches!(self, ServiceMode::StaticQuiet)
    }
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub service_mode: ServiceMode,
    /// Raw `SERVICE_MODE` value when it could not be parsed.
    pub unknown_service_mode: Option<String>,
    /// Connection string for the relational store. Empty values count as unset.
    pub db_url: Option<String>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Nothing here is required: a missing `DB_URL` only matters once the
    /// database mode tries to open a connection.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let raw_mode = env::var("SERVICE_MODE").unwrap_or_default();
        let (service_mode, unknown_service_mode) = if raw_mode.trim().is_empty() {
            (ServiceMode::default(), None)
        } else {
            match ServiceMode::from_str(raw_mode.trim()) {
                Ok(mode) => (mode, None),
                Err(_) => (ServiceMode::default(), Some(raw_mode)),
            }
        };

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "weather-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "true".into()) == "true",
            service_mode,
            unknown_service_mode,
            db_url: env::var("DB_URL").ok().filter(|url| !url.trim().is_empty()),
        }
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_service_mode(value: ServiceMode) {
        AppConfig::set_field(|cfg| {
            cfg.service_mode = value;
            cfg.unknown_service_mode = None;
        });
    }

    pub fn set_db_url(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.db_url = value.filter(|url| !url.trim().is_empty()));
    }
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn service_mode() -> ServiceMode {
    AppConfig::global().service_mode
}

pub fn unknown_service_mode() -> Option<String> {
    AppConfig::global().unknown_service_mode.clone()
}

pub fn db_url() -> Option<String> {
    AppConfig::global().db_url.clone()
}
