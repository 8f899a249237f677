//! Search and suggest commands

use super::search_error;
use crate::render::{self, ProductRow};
use crate::session::Session;
use clap::Args;
use grocer_catalog::{Category, Store};
use grocer_cli::format::{format_count, format_duration};
use grocer_cli::output::{print_json, Status};
use grocer_core::Result;
use grocer_search::{search, suggest as suggest_products, RawCriteria, SearchCriteria};
use grocer_telemetry::{metrics, names, Timer};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in names, categories, brands and tags
    pub query: Vec<String>,

    /// Only products in this category ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Only products in stock at this store ("all" for every store)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Sort by name, price or popularity
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction, asc or desc
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Maximum results to show (0 = all)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput<'a> {
    criteria: &'a SearchCriteria,
    pricing_store: Store,
    total: usize,
    products: Vec<ProductRow<'a>>,
}

/// Unset flags fall back to the configured defaults and the selected store.
fn raw_criteria(session: &Session, args: &SearchArgs) -> RawCriteria {
    let defaults = &session.config.schema.search;
    RawCriteria {
        query: args.query.join(" "),
        category: args.category.clone(),
        store: args
            .store
            .clone()
            .or_else(|| session.state.selected_store.map(|s| s.to_string())),
        sort: Some(args.sort.clone().unwrap_or_else(|| defaults.sort.clone())),
        direction: Some(
            args.direction
                .clone()
                .unwrap_or_else(|| defaults.direction.clone()),
        ),
    }
}

/// Run a catalog search
pub fn run(session: &Session, args: &SearchArgs) -> Result<()> {
    let criteria = SearchCriteria::try_from(&raw_criteria(session, args)).map_err(search_error)?;
    let pricing_store = session.pricing_store(criteria.store)?;
    let catalog = session.state.products.products();

    let timer = Timer::start(names::SEARCH_TIME);
    let mut results = search(catalog, &criteria, pricing_store);
    let elapsed = timer.stop();

    metrics().increment(names::SEARCHES);
    metrics().increment_by(names::SEARCH_RESULTS, results.len() as u64);
    metrics().gauge(names::CATALOG_SIZE, catalog.len() as u64);
    tracing::debug!(
        matched = results.len(),
        elapsed = %format_duration(elapsed),
        metrics = %metrics().export_json(),
        "Search finished"
    );

    let total = results.len();
    let limit = args.limit.unwrap_or(session.config.schema.search.max_results);
    if limit > 0 {
        results.truncate(limit);
    }

    if session.is_json() {
        return print_json(&SearchOutput {
            criteria: &criteria,
            pricing_store,
            total,
            products: results
                .iter()
                .map(|p| ProductRow::new(p, pricing_store))
                .collect(),
        });
    }

    if results.is_empty() {
        Status::info("No products match");
        return Ok(());
    }

    let heading = if results.len() < total {
        format!(
            "Showing {} of {} (prices at {})",
            results.len(),
            format_count(total, "product", "products"),
            pricing_store
        )
    } else {
        format!(
            "{} (prices at {})",
            format_count(total, "product", "products"),
            pricing_store
        )
    };
    Status::header(&heading);
    render::product_table(&results, pricing_store);
    Ok(())
}

/// Suggest products for a partly typed name
pub fn suggest(session: &Session, query: &str, category: Option<&str>, limit: usize) -> Result<()> {
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        .map(str::parse::<Category>)
        .transpose()?;
    let pricing_store = session.pricing_store(None)?;

    let mut suggestions = suggest_products(session.state.products.products(), query, category);
    suggestions.truncate(limit);

    if session.is_json() {
        let rows: Vec<ProductRow<'_>> = suggestions
            .iter()
            .map(|p| ProductRow::new(p, pricing_store))
            .collect();
        return print_json(&rows);
    }

    if suggestions.is_empty() {
        Status::info("No suggestions");
        return Ok(());
    }
    render::product_table(&suggestions, pricing_store);
    Ok(())
}
