//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntax and header parsing)
//! - Validate value ranges (timeouts > 0)
//! - Validate the log level name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: HeaderModConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::HeaderModConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("client.connect_secs must be greater than zero")]
    ZeroConnectTimeout,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &HeaderModConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.client.connect_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
