//! Cart commands
//!
//! Cart lines are addressed by product id; the cart holds one line per product.

use crate::render;
use crate::session::Session;
use chrono::Utc;
use clap::Subcommand;
use grocer_catalog::Store;
use grocer_cli::format::{format_price, format_quantity};
use grocer_cli::output::{print_json, Status};
use grocer_core::{Error, ErrorCode, Result};
use grocer_lists::ShoppingItem;
use grocer_telemetry::Event;
use serde::Serialize;

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart and its subtotal
    Show {
        /// Price the cart at this store
        #[arg(short, long)]
        store: Option<String>,
    },

    /// Add a product to the cart
    Add {
        /// Product id
        product: String,

        #[arg(short, long, default_value = "1")]
        quantity: f64,
    },

    /// Change a product's quantity by a positive or negative amount
    Adjust {
        /// Product id
        product: String,

        #[arg(allow_hyphen_values = true)]
        delta: f64,
    },

    /// Set a product's quantity; 0 removes it
    Set {
        /// Product id
        product: String,

        quantity: f64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        product: String,
    },

    /// Empty the cart
    Clear,

    /// Turn the cart into a new shopping list
    Checkout,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartOutput<'a> {
    store: Store,
    items: &'a [ShoppingItem],
    subtotal: f64,
}

pub fn run(session: &mut Session, command: CartCommand) -> Result<()> {
    match command {
        CartCommand::Show { store } => show(session, store.as_deref()),
        CartCommand::Add { product, quantity } => add(session, &product, quantity),
        CartCommand::Adjust { product, delta } => {
            let item_id = cart_item(session, &product)?;
            let quantity = session.state.cart.adjust_quantity(&item_id, delta)?;
            session.save()?;
            report_quantity(session, &product, quantity);
            Ok(())
        }
        CartCommand::Set { product, quantity } => {
            let item_id = cart_item(session, &product)?;
            let quantity = session.state.cart.update_quantity(&item_id, quantity)?;
            session.save()?;
            report_quantity(session, &product, quantity);
            Ok(())
        }
        CartCommand::Remove { product } => {
            let item_id = cart_item(session, &product)?;
            session.state.cart.remove(&item_id)?;
            session.save()?;
            Status::success(&format!("Removed {} from the cart", product));
            Ok(())
        }
        CartCommand::Clear => {
            session.state.cart.clear();
            session.save()?;
            Status::success("Cart cleared");
            Ok(())
        }
        CartCommand::Checkout => checkout(session),
    }
}

/// Id of the cart line holding `product_id`.
fn cart_item(session: &Session, product_id: &str) -> Result<String> {
    session
        .state
        .cart
        .items()
        .iter()
        .find(|item| item.product_id.as_str() == product_id)
        .map(|item| item.id.clone())
        .ok_or_else(|| {
            Error::new(ErrorCode::ItemNotFound, format!("{} is not in the cart", product_id))
                .with_suggestion("Run `grocer cart show` to see what is in the cart")
        })
}

fn report_quantity(session: &Session, product_id: &str, quantity: Option<f64>) {
    let name = session
        .state
        .products
        .get(product_id)
        .map(|p| p.name.as_str())
        .unwrap_or(product_id);
    let unit = session
        .state
        .cart
        .items()
        .iter()
        .find(|item| item.product_id.as_str() == product_id)
        .map(|item| item.unit.as_str())
        .unwrap_or_default();
    match quantity {
        Some(quantity) => Status::success(&format!("{}: {}", name, format_quantity(quantity, unit))),
        None => Status::success(&format!("Removed {} from the cart", name)),
    }
}

fn show(session: &Session, store: Option<&str>) -> Result<()> {
    let selected = store.map(str::parse::<Store>).transpose()?;
    let store = session.pricing_store(selected)?;
    let cart = &session.state.cart;

    if session.is_json() {
        return print_json(&CartOutput {
            store,
            items: cart.items(),
            subtotal: cart.subtotal(&session.state.products, store),
        });
    }
    if cart.is_empty() {
        Status::info("The cart is empty");
        return Ok(());
    }
    render::cart(cart, &session.state.products, store);
    Ok(())
}

fn add(session: &mut Session, product_id: &str, quantity: f64) -> Result<()> {
    let store = session.pricing_store(None)?;
    let product = session.state.products.require(product_id)?;
    let mut item = ShoppingItem::for_product(product, store);
    item.quantity = quantity;
    let name = product.name.clone();

    let line = session.state.cart.add(item)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&line);
    }
    Status::success(&format!(
        "{} in cart: {}",
        name,
        format_quantity(line.quantity, line.unit.as_str())
    ));
    Ok(())
}

fn checkout(session: &mut Session) -> Result<()> {
    let store = session.pricing_store(None)?;
    let total = session.state.cart.subtotal(&session.state.products, store);
    let id = session.state.checkout(Utc::now())?;
    session.save()?;

    Event::new(
        "checkout",
        serde_json::json!({ "list": id, "subtotal": total, "store": store }),
    )
    .log();

    let list = session.state.lists.require(&id)?;
    if session.is_json() {
        return print_json(list);
    }
    Status::success(&format!(
        "Checked out {} items into {} ({}), {} at {}",
        list.items.len(),
        list.name,
        list.id,
        format_price(total),
        store
    ));
    Ok(())
}
