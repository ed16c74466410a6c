//! Telecast Runtime - configuration and logging for telecast bots.
//!
//! This crate provides:
//! - Layered configuration (`TelecastConfig`, `ConfigLoader`)
//! - Configuration validation
//! - Logging setup (`LoggingBuilder`, `init_from_config`)
//!
//! # Example
//!
//! ```ignore
//! use telecast_runtime::{ConfigLoader, logging};
//!
//! let config = ConfigLoader::new().load()?;
//! logging::init_from_config(&config.logging);
//! ```
//!
//! A minimal `telecast.toml`:
//!
//! ```toml
//! [bot]
//! token = "123456:ABC-DEF1234ghIkl"
//! username = "echo_bot"
//! default_parse_mode = "HTML"
//!
//! [logging]
//! level = "info"
//! format = "compact"
//!
//! [logging.filters]
//! telecast_transport = "debug"
//! ```

pub mod config;
pub mod logging;

// Re-exports
pub use config::{
    BotConfig, ConfigError, ConfigLoader, ConfigResult, LoggingConfig, Profile, TelecastConfig,
    load_config, load_config_from_file,
};
pub use logging::{LoggingBuilder, SpanEvents, init_from_config};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides the logging macros, the `instrument` attribute and `Level`.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
