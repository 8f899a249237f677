//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        let report = schema.validate();
        if !report.is_valid() {
            let messages: Vec<String> = report.errors().iter().map(|e| e.to_string()).collect();
            return Err(Error::new(
                ErrorCode::ConfigValidationError,
                format!("Invalid configuration: {}", messages.join("; ")),
            )
            .with_context(config_path.clone().unwrap_or_else(|| "<defaults>".to_string())));
        }

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".grocer.toml", "grocer.toml", ".config/grocer.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path, e)).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}: {}", path, e),
        )
        .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.general.default_store, "Woolworths");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load(Some("/definitely/not/here/grocer.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nsort = \"popularity\"\ndirection = \"desc\"").unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.schema.search.sort, "popularity");
        assert_eq!(config.schema.search.direction, "desc");
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\nsort = ").unwrap();

        let err = Config::load(file.path().to_str()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_unknown_store_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ndefault_store = \"Costco\"").unwrap();

        let err = Config::load(file.path().to_str()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }
}
