use crate::domain::config_types::{Host, LogFormat, LogLevel, Port};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub directory: DirectorySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: Host,
    pub port: Port,
    pub environment: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DirectorySettings {
    /// Reject signups once an activity reaches `max_participants`
    pub enforce_capacity: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Settings {
    /// Load settings from `./config` for the environment named by `ENVIRONMENT`
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load(Path::new("config"), &environment)
    }

    /// Layer defaults, `default`, `{environment}` and `local` files from
    /// `config_dir`, then `MERGINGTON__*` environment variables
    pub fn load(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        let file = |name: &str| {
            File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        let config = Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8000)?
            .set_default("application.environment", environment)?
            .set_default("application.static_dir", "static")?
            .set_default("directory.enforce_capacity", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            .add_source(Environment::with_prefix("MERGINGTON").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
