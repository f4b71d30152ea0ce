//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HeaderModConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HeaderModConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<HeaderModConfig, ConfigError> {
    let config: HeaderModConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderName;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [headers.set]
            "User-Agent" = "headermod/0.1"

            [headers.add]
            "X-Custom-1" = ["one", "two"]

            [client]
            connect_secs = 2
            idle_secs = 30
            max_idle_per_host = 0

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        let user_agent = HeaderName::from_static("user-agent");
        let custom = HeaderName::from_static("x-custom-1");
        assert_eq!(config.headers.set.get_all(&user_agent), &["headermod/0.1"]);
        assert_eq!(config.headers.add.get_all(&custom), &["one", "two"]);
        assert_eq!(config.client.connect_secs, 2);
        assert_eq!(config.client.idle_secs, 30);
        assert_eq!(config.client.max_idle_per_host, 0);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.headers.set.is_empty());
        assert!(config.headers.add.is_empty());
        assert_eq!(config.client.connect_secs, 5);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_invalid_header_name_is_parse_error() {
        let err = parse_config(
            r#"
            [headers.set]
            "Bad Header" = "value"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_everything() {
        let err = parse_config(
            r#"
            [client]
            connect_secs = 0

            [observability]
            log_level = "loud"
            "#,
        )
        .unwrap_err();

        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("connect_secs"));
        assert!(message.contains("\"loud\""));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/headermod.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
