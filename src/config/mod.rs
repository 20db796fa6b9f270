mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{ServerSettings, Settings};

/// Loads the configuration from the default file and environment variables.
///
/// Values found in `config/default` (any format the `config` crate
/// supports) override the built-in defaults, and environment variables
/// (`SERVER__PORT`, `SERVER__HOST`, `SERVER__ALLOWED_ORIGIN`) override
/// both.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("__"));

    let config = builder.build()?;

    // Try to deserialize what is available, then merge with defaults.
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
            allowed_origin: partial
                .server
                .as_ref()
                .and_then(|s| s.allowed_origin.clone())
                .or(default.server.allowed_origin),
        },
    })
}

#[cfg(test)]
mod tests;
