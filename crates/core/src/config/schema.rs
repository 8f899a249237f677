//! Configuration schema definitions

use crate::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store names the configuration accepts, in canonical order.
pub const KNOWN_STORES: &[&str] = &["Woolworths", "Coles", "Aldi", "IGA"];

/// Sort keys the configuration accepts.
pub const KNOWN_SORT_KEYS: &[&str] = &["name", "price", "popularity"];

/// Sort directions the configuration accepts.
pub const KNOWN_DIRECTIONS: &[&str] = &["asc", "desc"];

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl ConfigSchema {
    /// Check every section for values the rest of the tool cannot interpret.
    pub fn validate(&self) -> ValidationResult {
        let mut validator = Validator::new()
            .one_of("general.default_store", &self.general.default_store, KNOWN_STORES)
            .one_of("search.sort", &self.search.sort, KNOWN_SORT_KEYS)
            .one_of("search.direction", &self.search.direction, KNOWN_DIRECTIONS)
            .required("telemetry.log_level", &self.telemetry.log_level);

        if let Some(preferred) = &self.general.preferred_store {
            validator = validator.one_of("general.preferred_store", preferred, KNOWN_STORES);
        }

        validator.validate()
    }
}

/// Store selection defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Store used for pricing when neither a store filter nor a preference is set
    #[serde(default = "default_store")]
    pub default_store: String,

    /// The user's preferred store, overriding the seeded profile
    #[serde(default)]
    pub preferred_store: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_store: default_store(),
            preferred_store: None,
        }
    }
}

fn default_store() -> String {
    "Woolworths".to_string()
}

/// Search defaults applied when the command line leaves them unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_sort")]
    pub sort: String,

    #[serde(default = "default_direction")]
    pub direction: String,

    /// Maximum results to print (0 = all)
    #[serde(default)]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            direction: default_direction(),
            max_results: 0,
        }
    }
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_direction() -> String {
    "asc".to_string()
}

/// Where application state is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the state blob; `~` is expanded
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

impl StorageConfig {
    /// The state directory with `~` and environment variables expanded.
    pub fn resolved_state_dir(&self) -> PathBuf {
        match shellexpand::full(&self.state_dir) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(&self.state_dir),
        }
    }
}

fn default_state_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("grocer")
        .to_string_lossy()
        .into_owned()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySection {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.general.default_store, "Woolworths");
        assert_eq!(schema.search.sort, "name");
        assert_eq!(schema.search.direction, "asc");
        assert!(schema.validate().is_valid());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [general]
            preferred_store = "Aldi"

            [search]
            sort = "price"
            "#,
        )
        .unwrap();

        assert_eq!(schema.general.preferred_store.as_deref(), Some("Aldi"));
        assert_eq!(schema.general.default_store, "Woolworths");
        assert_eq!(schema.search.sort, "price");
        assert_eq!(schema.search.direction, "asc");
        assert!(schema.validate().is_valid());
    }

    #[test]
    fn test_unknown_values_fail_validation() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [general]
            default_store = "Costco"

            [search]
            direction = "sideways"
            "#,
        )
        .unwrap();

        let result = schema.validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_state_dir_expands_home() {
        let storage = StorageConfig {
            state_dir: "~/grocer-state".to_string(),
        };
        let resolved = storage.resolved_state_dir();
        assert!(!resolved.to_string_lossy().starts_with('~'));
    }
}
