//! Product commands

use crate::render;
use crate::session::Session;
use clap::Subcommand;
use grocer_catalog::{Category, NewProduct, Store, StoreOffer, Unit};
use grocer_cli::format::format_price;
use grocer_cli::output::{print_json, Status};
use grocer_core::Result;

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Show a product with its price at every store
    Show {
        /// Product id
        id: String,
    },

    /// Add a product that is missing from the catalog
    Add {
        /// Product name
        name: String,

        /// Category, e.g. "Pantry"
        #[arg(long, default_value = "Pantry")]
        category: String,

        /// Brand name
        #[arg(short, long)]
        brand: Option<String>,

        /// Unit it is sold in (each, kg, g, L, ml, pack)
        #[arg(short, long, default_value = "each")]
        unit: String,
    },

    /// Set what a store charges for a product
    Price {
        /// Product id
        id: String,

        /// Store name
        store: String,

        /// Shelf price in dollars
        price: f64,

        /// Unit the price is for (defaults to the current one)
        #[arg(short, long)]
        unit: Option<String>,

        /// Mark the product out of stock at this store
        #[arg(long)]
        out_of_stock: bool,
    },
}

pub fn run(session: &mut Session, command: ProductCommand) -> Result<()> {
    match command {
        ProductCommand::Show { id } => show(session, &id),
        ProductCommand::Add {
            name,
            category,
            brand,
            unit,
        } => add(session, name, &category, brand, &unit),
        ProductCommand::Price {
            id,
            store,
            price,
            unit,
            out_of_stock,
        } => set_price(session, &id, &store, price, unit.as_deref(), out_of_stock),
    }
}

fn show(session: &Session, id: &str) -> Result<()> {
    let product = session.state.products.require(id)?;
    if session.is_json() {
        return print_json(product);
    }
    render::product_detail(product, session.state.user.is_favorite(id));
    Ok(())
}

fn add(
    session: &mut Session,
    name: String,
    category: &str,
    brand: Option<String>,
    unit: &str,
) -> Result<()> {
    let new = NewProduct {
        name,
        category: category.parse::<Category>()?,
        brand,
        unit: unit.parse::<Unit>()?,
    };
    let product = session.state.products.add_custom(new)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&product);
    }
    Status::success(&format!("Added {} ({})", product.name, product.id));
    Ok(())
}

fn set_price(
    session: &mut Session,
    id: &str,
    store: &str,
    price: f64,
    unit: Option<&str>,
    out_of_stock: bool,
) -> Result<()> {
    let store = store.parse::<Store>()?;
    let current = session.state.products.require(id)?;
    let unit = match unit {
        Some(unit) => unit.parse::<Unit>()?,
        None => current
            .offer(store)
            .map(|offer| offer.unit)
            .or_else(|| current.default_unit())
            .unwrap_or_default(),
    };

    let offer = StoreOffer::new(price, unit, !out_of_stock);
    let product = session.state.products.set_offer(id, store, offer)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&product);
    }
    Status::success(&format!(
        "{} at {}: {}/{}",
        product.name,
        store,
        format_price(price),
        unit
    ));
    Ok(())
}
