//! Configuration module for telecast bots.
//!
//! Settings are loaded with `figment` from defaults, TOML/YAML files and
//! `TELECAST_*` environment variables, then checked by [`validate_config`].

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    BotConfig, LogFormat, LogLevel, LogOutput, LogRotation, LoggingConfig, SpanEventConfig,
    TelecastConfig,
};
pub use validation::validate_config;
