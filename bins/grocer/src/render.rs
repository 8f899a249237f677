//! Text rendering of products, lists and the cart.

use grocer_catalog::{Catalog, Product, Store};
use grocer_cli::format::{fit, format_count, format_price, format_quantity, progress_bar};
use grocer_cli::output::Status;
use grocer_lists::{Cart, ShoppingItem, ShoppingList};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 22;

/// One product as printed in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub price: Option<f64>,
    pub unit: Option<&'static str>,
    pub in_stock: bool,
}

impl<'a> ProductRow<'a> {
    pub fn new(product: &'a Product, store: Store) -> Self {
        let offer = product.offer(store);
        Self {
            id: product.id.as_str(),
            name: &product.name,
            category: product.category.as_str(),
            price: offer.map(|o| o.price),
            unit: offer.map(|o| o.unit.as_str()),
            in_stock: product.in_stock_at(store),
        }
    }
}

fn price_cell(price: Option<f64>, unit: Option<&str>) -> String {
    match (price, unit) {
        (Some(price), Some(unit)) => format!("{}/{}", format_price(price), unit),
        _ => "-".to_string(),
    }
}

pub fn product_table(products: &[&Product], store: Store) {
    for product in products {
        let row = ProductRow::new(product, store);
        let stock = if row.in_stock {
            String::new()
        } else {
            "out of stock".if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
        };
        println!(
            "  {} {} {} {:>12} {}",
            Status::dim(&fit(row.id, 6)),
            fit(row.name, NAME_WIDTH),
            fit(row.category, CATEGORY_WIDTH),
            price_cell(row.price, row.unit),
            stock
        );
    }
}

pub fn product_detail(product: &Product, favorite: bool) {
    let star = if favorite { " ★" } else { "" };
    Status::header(&format!("{}{}", product.name, star));
    println!("  {} {}", Status::dim("id:"), product.id);
    println!("  {} {}", Status::dim("category:"), product.category);
    if !product.brands.is_empty() {
        println!("  {} {}", Status::dim("brands:"), product.brands.join(", "));
    }
    if !product.tags.is_empty() {
        println!("  {} {}", Status::dim("tags:"), product.tags.join(", "));
    }

    let cheapest = product.cheapest_price();
    Status::subheader("Prices");
    for (store, offer) in &product.stores {
        let mut line = format!(
            "  {} {}",
            fit(store.as_str(), 12),
            price_cell(Some(offer.price), Some(offer.unit.as_str()))
        );
        if !offer.in_stock {
            line.push_str(" (out of stock)");
        } else if cheapest == Some(offer.price) && product.stores.len() > 1 {
            line.push_str(" cheapest");
        }
        println!("{}", line);
    }
}

fn product_name<'a>(catalog: &'a Catalog, item: &'a ShoppingItem) -> &'a str {
    catalog
        .get(item.product_id.as_str())
        .map(|p| p.name.as_str())
        .unwrap_or(item.product_id.as_str())
}

fn item_line(catalog: &Catalog, item: &ShoppingItem) -> String {
    let mark = if item.purchased { "[x]" } else { "[ ]" };
    let mut line = format!(
        "  {} {} {} {}",
        mark,
        fit(product_name(catalog, item), NAME_WIDTH),
        fit(&format_quantity(item.quantity, item.unit.as_str()), 10),
        Status::dim(&item.id)
    );
    if let Some(notes) = &item.notes {
        line.push_str(&format!("  ({})", notes));
    }
    line
}

pub fn list_summary(list: &ShoppingList, active: bool) {
    let progress = list.progress();
    let marker = if active { "*" } else { " " };
    let store = list.store.map(|s| s.as_str()).unwrap_or("any store");
    println!(
        "{} {} {} {} {}",
        marker,
        Status::dim(&fit(&list.id, 12)),
        fit(&list.name, NAME_WIDTH),
        fit(store, 12),
        progress_bar(progress.percent, 10)
    );
}

pub fn list_detail(list: &ShoppingList, catalog: &Catalog) {
    let progress = list.progress();
    Status::header(&list.name);
    if let Some(store) = list.store {
        println!("  {} {}", Status::dim("store:"), store);
    }
    println!(
        "  {} {} of {} {}",
        Status::dim("progress:"),
        progress.purchased,
        format_count(progress.total, "item", "items"),
        progress_bar(progress.percent, 20)
    );
    if list.shared {
        println!("  {} {}", Status::dim("shared with:"), list.shared_with.join(", "));
    }
    println!();
    for item in list.pending_items().chain(list.purchased_items()) {
        println!("{}", item_line(catalog, item));
    }
}

pub fn cart(cart: &Cart, catalog: &Catalog, store: Store) {
    Status::header(&format!("Cart ({})", format_count(cart.len(), "item", "items")));
    for item in cart.items() {
        let line_price = catalog
            .get(item.product_id.as_str())
            .map(|p| p.price_at(store).unwrap_or(0.0) * item.quantity)
            .unwrap_or(0.0);
        println!(
            "  {} {} {:>9}",
            fit(product_name(catalog, item), NAME_WIDTH),
            fit(&format_quantity(item.quantity, item.unit.as_str()), 10),
            format_price(line_price)
        );
    }
    println!();
    println!(
        "  {} {} at {}",
        "Subtotal".if_supports_color(Stream::Stdout, |t| t.bold()),
        format_price(cart.subtotal(catalog, store)),
        store
    );
}
