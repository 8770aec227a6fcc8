//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file, then apply
/// environment overrides.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise start from defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = AppConfig::default();
            apply_env_overrides(&mut config);
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Override file values with process environment variables.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Override file values using `lookup` as the variable source.
pub fn apply_overrides_from<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(&config.provider.env_var) {
        let url = url.trim();
        if url.is_empty() {
            tracing::debug!(env_var = %config.provider.env_var, "Ignoring empty provider override");
        } else {
            tracing::debug!(env_var = %config.provider.env_var, "Provider URL taken from environment");
            config.provider.http_url = Some(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let mut config = AppConfig::default();
        config.provider.http_url = Some("http://file:8545".to_string());

        apply_overrides_from(&mut config, |key| {
            (key == "HTTP_PROVIDER").then(|| "http://env:8545".to_string())
        });

        assert_eq!(config.provider.http_url.as_deref(), Some("http://env:8545"));
    }

    #[test]
    fn test_custom_env_var_name() {
        let mut config = AppConfig::default();
        config.provider.env_var = "VUE_APP_HTTP_PROVIDER".to_string();

        apply_overrides_from(&mut config, |key| match key {
            "VUE_APP_HTTP_PROVIDER" => Some("http://custom:8545".to_string()),
            _ => Some("http://wrong:8545".to_string()),
        });

        assert_eq!(config.provider.http_url.as_deref(), Some("http://custom:8545"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let mut config = AppConfig::default();
        apply_overrides_from(&mut config, |_| Some("   ".to_string()));
        assert!(config.provider.http_url.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!("explorer-shell-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[display]\nhash_length = 12\n\n[observability]\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.display.hash_length, 12);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError {
                field: "a",
                message: "bad".to_string(),
            },
            ValidationError {
                field: "b",
                message: "worse".to_string(),
            },
        ]);
        assert_eq!(err.to_string(), "Validation failed: a: bad, b: worse");
    }
}
