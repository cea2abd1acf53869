use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_WINDOW_DAYS, DEFAULT_WINDOW_DAYS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub recurrence: RecurrenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Controls how far around "today" recurring entries are expanded.
#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Days before and after today covered by the default window.
    pub window_days: u16,
    /// Longest window (in days, inclusive) a caller may ask for.
    pub max_window_days: u16,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("recurrence.window_days", i64::from(DEFAULT_WINDOW_DAYS))?
            .set_default(
                "recurrence.max_window_days",
                i64::from(DEFAULT_MAX_WINDOW_DAYS),
            )?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env overrides, e.g. LOGBOOK_RECURRENCE__WINDOW_DAYS=14
            .add_source(
                config::Environment::with_prefix("LOGBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks cross-field constraints that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the default window does not fit
    /// inside the configured maximum.
    pub fn validate(&self) -> CoreResult<()> {
        let default_span = u32::from(self.recurrence.window_days) * 2 + 1;
        if default_span > u32::from(self.recurrence.max_window_days) {
            return Err(CoreError::ConfigError(format!(
                "recurrence.window_days={} needs {default_span} days, over max_window_days={}",
                self.recurrence.window_days, self.recurrence.max_window_days
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        window_days = settings.recurrence.window_days,
        max_window_days = settings.recurrence.max_window_days,
        "Recurrence settings resolved"
    );
    Ok(settings)
}
