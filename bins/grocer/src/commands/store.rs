//! Selected store command
//!
//! The selected store filters searches and prices the cart until cleared.

use crate::session::Session;
use grocer_catalog::Store;
use grocer_cli::output::{print_json, Status};
use grocer_core::Result;

pub fn run(session: &mut Session, name: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        session.state.selected_store = if name.trim().eq_ignore_ascii_case("all") {
            None
        } else {
            Some(name.parse::<Store>()?)
        };
        session.save()?;
    }

    let selected = session.state.selected_store;
    let pricing = session.pricing_store(None)?;
    if session.is_json() {
        return print_json(&serde_json::json!({
            "selectedStore": selected,
            "pricingStore": pricing,
        }));
    }

    match selected {
        Some(store) => Status::success(&format!("Selected store: {}", store)),
        None => Status::info(&format!("No store selected, prices shown at {}", pricing)),
    }
    Ok(())
}
