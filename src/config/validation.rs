//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, display lengths)
//! - Validate the log level name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - The provider URL is left to the client library at creation time

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.provider.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "provider.rpc_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.provider.env_var.trim().is_empty() {
        errors.push(ValidationError::new("provider.env_var", "must not be empty"));
    }

    // Below 2 both halves of a shortened hash are empty.
    if config.display.hash_length < 2 {
        errors.push(ValidationError::new(
            "display.hash_length",
            format!("must be at least 2, got {}", config.display.hash_length),
        ));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = AppConfig::default();
        config.provider.rpc_timeout_secs = 0;
        config.display.hash_length = 1;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "provider.rpc_timeout_secs",
                "display.hash_length",
                "observability.log_level"
            ]
        );
    }

    #[test]
    fn test_malformed_url_is_not_rejected() {
        let mut config = AppConfig::default();
        config.provider.http_url = Some("not a url".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
