use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalyticsSettings, Config, DatabaseSettings, LoggingSettings, ServerSettings};

/// Prefix for environment overrides, e.g. `TOOLSPEND__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "TOOLSPEND";

/// Loads the application configuration from `config.toml` in the working
/// directory, if present, layered under `TOOLSPEND__*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Same as [`load_config`] but reading the given file. A missing file is not
/// an error: defaults and environment variables still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}
