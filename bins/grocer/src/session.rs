//! Per-run context: configuration, logging and the loaded state.

use grocer_catalog::Store;
use grocer_cli::output::OutputFormat;
use grocer_core::config::Config;
use grocer_core::{Error, Result};
use grocer_lists::{AppState, FileStore};
use grocer_search::resolve_pricing_store;
use grocer_telemetry::{metrics, names, TelemetryConfig};
use std::path::PathBuf;

pub struct Session {
    pub config: Config,
    pub format: OutputFormat,
    pub state: AppState,
    store: FileStore,
}

impl Session {
    /// Load configuration, start logging and read the saved state.
    pub fn open(
        config_path: Option<&str>,
        state_dir: Option<PathBuf>,
        verbose: bool,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = Config::load(config_path)?;

        let telemetry = TelemetryConfig::with_level(config.schema.telemetry.log_level.clone());
        let telemetry = if verbose { telemetry.verbose() } else { telemetry };
        if let Err(e) = grocer_telemetry::init_with_config(telemetry) {
            return Err(Error::config(e.to_string()).with_suggestion(
                "Use a tracing filter such as \"warn\" or \"grocer_search=debug\" for telemetry.log_level",
            ));
        }

        let dir = state_dir.unwrap_or_else(|| config.schema.storage.resolved_state_dir());
        let store = FileStore::open(dir)?;
        let mut state = AppState::load(&store)?;

        if let Some(preferred) = &config.schema.general.preferred_store {
            state.user.preferred_store = Some(config_store("general.preferred_store", preferred)?);
        }

        tracing::debug!(
            config = config.path.as_deref().unwrap_or("<defaults>"),
            state_dir = %store.dir().display(),
            "Session opened"
        );

        Ok(Self {
            config,
            format,
            state,
            store,
        })
    }

    /// Store prices are shown at: `selected`, else the user's preferred
    /// store, else the configured default.
    pub fn pricing_store(&self, selected: Option<Store>) -> Result<Store> {
        let fallback = config_store(
            "general.default_store",
            &self.config.schema.general.default_store,
        )?;
        Ok(resolve_pricing_store(
            selected.or(self.state.selected_store),
            self.state.user.preferred_store,
            fallback,
        ))
    }

    /// Write the state back.
    pub fn save(&self) -> Result<()> {
        self.state.save(&self.store)?;
        metrics().increment(names::STATE_SAVES);
        tracing::debug!(
            saves = metrics().counter(names::STATE_SAVES),
            "State saved"
        );
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format.is_json()
    }
}

/// Parse a store name taken from the config file.
fn config_store(field: &str, value: &str) -> Result<Store> {
    value.parse::<Store>().map_err(|_| {
        Error::invalid_config_value(field, value)
            .with_suggestion("Use one of Woolworths, Coles, Aldi or IGA")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::error::exit_codes;
    use grocer_core::ErrorCode;

    #[test]
    fn test_config_store() {
        assert_eq!(config_store("general.default_store", "Coles").unwrap(), Store::Coles);

        let err = config_store("general.preferred_store", "Costco").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
        assert!(err.message.contains("general.preferred_store"));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
