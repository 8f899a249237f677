//! Config command - show the effective configuration

use crate::session::Session;
use grocer_cli::output::{print_json, Status};
use grocer_core::{Error, Result};

pub fn run(session: &Session) -> Result<()> {
    let config = &session.config;
    if session.is_json() {
        return print_json(&serde_json::json!({
            "path": config.path,
            "stateDir": config.schema.storage.resolved_state_dir(),
            "settings": config.schema,
        }));
    }

    let text = toml::to_string_pretty(&config.schema)
        .map_err(|e| Error::config(format!("Failed to render configuration: {}", e)))?;
    Status::header(config.path.as_deref().unwrap_or("Built-in defaults"));
    println!("{}", text);
    Ok(())
}
