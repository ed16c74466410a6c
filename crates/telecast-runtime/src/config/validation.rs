//! Configuration validation utilities.

use secrecy::ExposeSecret;
use telecast_core::ParseMode;

use super::error::{ConfigError, ConfigResult};
use super::schema::{BotConfig, LogOutput, LoggingConfig, TelecastConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &TelecastConfig) -> ConfigResult<()> {
    validate_bot_config(&config.bot)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates bot credentials and API settings.
fn validate_bot_config(bot: &BotConfig) -> ConfigResult<()> {
    validate_token(bot.token.expose_secret())?;

    if bot.username.starts_with('@') {
        return Err(ConfigError::validation(
            "Bot username must not start with '@'",
        ));
    }

    validate_url(&bot.api_url)?;

    if bot.connect_timeout_secs == 0 {
        return Err(ConfigError::validation(
            "Connect timeout must be greater than 0",
        ));
    }
    if bot.request_timeout_secs == 0 {
        return Err(ConfigError::validation(
            "Request timeout must be greater than 0",
        ));
    }

    bot.default_parse_mode
        .parse::<ParseMode>()
        .map_err(|_| {
            ConfigError::validation(format!(
                "Invalid default parse mode: {}. Valid values are: HTML, Markdown",
                bot.default_parse_mode
            ))
        })?;

    Ok(())
}

/// Checks the `<bot id>:<secret>` shape without echoing the secret.
fn validate_token(token: &str) -> ConfigResult<()> {
    if token.is_empty() {
        return Err(ConfigError::missing_field("bot.token"));
    }

    let valid = match token.split_once(':') {
        Some((id, secret)) => {
            !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) && !secret.is_empty()
        }
        None => false,
    };
    if !valid {
        return Err(ConfigError::validation(
            "Bot token must have the form <bot id>:<secret>",
        ));
    }

    Ok(())
}

/// Validates an API base URL.
fn validate_url(url: &str) -> ConfigResult<()> {
    if url.is_empty() {
        return Err(ConfigError::missing_field("bot.api_url"));
    }

    let valid_schemes = ["http://", "https://"];
    if !valid_schemes.iter().any(|s| url.starts_with(s)) {
        return Err(ConfigError::invalid_url(
            url,
            format!("URL must start with one of: {:?}", valid_schemes),
        ));
    }

    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }

    if let Some(target) = logging.filters.keys().find(|t| t.trim().is_empty()) {
        return Err(ConfigError::validation(format!(
            "Invalid log filter target: {target:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use secrecy::SecretString;

    use super::*;
    use crate::config::LogLevel;

    fn valid_config() -> TelecastConfig {
        let mut config = TelecastConfig::default();
        config.bot.token = SecretString::from("123456:ABC-DEF".to_string());
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_token() {
        let config = TelecastConfig::default();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { field }) if field == "bot.token"
        ));
    }

    #[test]
    fn test_malformed_token() {
        for token in ["no-colon", ":hunter2", "12ab:hunter2", "123456:"] {
            let mut config = valid_config();
            config.bot.token = SecretString::from(token.to_string());
            let err = validate_config(&config).unwrap_err();
            assert!(matches!(err, ConfigError::ValidationError { .. }), "{token}");
            assert!(!err.to_string().contains("hunter2"));
        }
    }

    #[test]
    fn test_username_with_at() {
        let mut config = valid_config();
        config.bot.username = "@echo_bot".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = valid_config();
        config.bot.api_url = "ftp://api.telegram.org".into();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidUrl { .. })
        ));

        config.bot.api_url = "http://localhost:8081".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = valid_config();
        config.bot.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_mode() {
        let mut config = valid_config();
        config.bot.default_parse_mode = "markdown".into();
        assert!(validate_config(&config).is_ok());

        config.bot.default_parse_mode = "MarkdownV3".into();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_file_output_requires_path() {
        let mut config = valid_config();
        config.logging.output = LogOutput::File;
        assert!(validate_config(&config).is_err());

        config.logging.file_path = Some(PathBuf::from("logs/telecast.log"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_blank_filter_target() {
        let mut config = valid_config();
        config.logging.filters.insert(" ".into(), LogLevel::Debug);
        assert!(validate_config(&config).is_err());
    }
}
