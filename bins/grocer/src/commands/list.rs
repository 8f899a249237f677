//! Shopping list commands
//!
//! Item commands work on the active list unless `--list` names another.

use crate::render;
use crate::session::Session;
use clap::Subcommand;
use grocer_catalog::{Store, Unit};
use grocer_cli::output::{print_json, Status};
use grocer_core::{Error, ErrorCode, Result};
use grocer_lists::{ListUpdate, ShoppingItem};

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Show all lists, or one list with its items
    Show {
        /// List id
        id: Option<String>,
    },

    /// Create an empty list
    Create {
        /// List name
        name: String,

        /// Store the list is for
        #[arg(short, long)]
        store: Option<String>,
    },

    /// Rename a list or change its store ("all" clears the store)
    Edit {
        /// List id
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        store: Option<String>,
    },

    /// Delete a list
    Delete {
        /// List id
        id: String,
    },

    /// Make a list the active one
    Use {
        /// List id
        id: String,
    },

    /// Add a product to a list
    Add {
        /// Product id
        product: String,

        #[arg(short, long, default_value = "1")]
        quantity: f64,

        /// Unit (defaults to the unit the list's store sells it in)
        #[arg(short, long)]
        unit: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,

        /// List id (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Mark an item purchased, or not purchased again
    Toggle {
        /// Item id
        item: String,

        /// List id (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Remove an item from a list
    Remove {
        /// Item id
        item: String,

        /// List id (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Share a list with someone
    Share {
        email: String,

        /// List id (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Stop sharing a list with someone
    Unshare {
        email: String,

        /// List id (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,
    },
}

pub fn run(session: &mut Session, command: ListCommand) -> Result<()> {
    match command {
        ListCommand::Show { id } => show(session, id.as_deref()),
        ListCommand::Create { name, store } => create(session, &name, store.as_deref()),
        ListCommand::Edit { id, name, store } => edit(session, &id, name, store.as_deref()),
        ListCommand::Delete { id } => {
            let removed = session.state.lists.delete_list(&id)?;
            session.save()?;
            Status::success(&format!("Deleted {}", removed.name));
            Ok(())
        }
        ListCommand::Use { id } => {
            session.state.lists.set_active(Some(id.as_str()))?;
            session.save()?;
            Status::success(&format!("Active list is now {}", id));
            Ok(())
        }
        ListCommand::Add {
            product,
            quantity,
            unit,
            notes,
            list,
        } => add(session, &product, quantity, unit.as_deref(), notes, list),
        ListCommand::Toggle { item, list } => {
            let list_id = target_list(session, list)?;
            let purchased = session.state.lists.toggle_purchased(&list_id, &item)?;
            session.save()?;
            let state = if purchased { "purchased" } else { "not purchased" };
            Status::success(&format!("Marked {} {}", item, state));
            Ok(())
        }
        ListCommand::Remove { item, list } => {
            let list_id = target_list(session, list)?;
            session.state.lists.remove_item(&list_id, &item)?;
            session.save()?;
            Status::success(&format!("Removed {} from {}", item, list_id));
            Ok(())
        }
        ListCommand::Share { email, list } => {
            let list_id = target_list(session, list)?;
            let shared = session.state.lists.share(&list_id, &email)?.shared_with.len();
            session.save()?;
            Status::success(&format!("Shared {} with {} people", list_id, shared));
            Ok(())
        }
        ListCommand::Unshare { email, list } => {
            let list_id = target_list(session, list)?;
            session.state.lists.unshare(&list_id, &email)?;
            session.save()?;
            Status::success(&format!("Stopped sharing {} with {}", list_id, email.trim()));
            Ok(())
        }
    }
}

/// The named list, or the active one.
fn target_list(session: &Session, list: Option<String>) -> Result<String> {
    match list {
        Some(id) => Ok(id),
        None => session
            .state
            .lists
            .active_id()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::new(ErrorCode::ListNotFound, "No active list")
                    .with_suggestion("Pass --list <id> or run `grocer list use <id>`")
            }),
    }
}

fn parse_store(store: Option<&str>) -> Result<Option<Store>> {
    Ok(store
        .map(str::trim)
        .filter(|s| !s.eq_ignore_ascii_case("all"))
        .map(str::parse::<Store>)
        .transpose()?)
}

fn show(session: &Session, id: Option<&str>) -> Result<()> {
    let lists = &session.state.lists;
    match id {
        Some(id) => {
            let list = lists.require(id)?;
            if session.is_json() {
                return print_json(list);
            }
            render::list_detail(list, &session.state.products);
        }
        None => {
            if session.is_json() {
                return print_json(lists);
            }
            if lists.is_empty() {
                Status::info("No shopping lists yet");
            }
            for list in lists.lists() {
                render::list_summary(list, lists.active_id() == Some(list.id.as_str()));
            }
        }
    }
    Ok(())
}

fn create(session: &mut Session, name: &str, store: Option<&str>) -> Result<()> {
    let store = parse_store(store)?;
    let list = session.state.lists.create_list(name, store)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&list);
    }
    Status::success(&format!("Created {} ({})", list.name, list.id));
    Ok(())
}

fn edit(session: &mut Session, id: &str, name: Option<String>, store: Option<&str>) -> Result<()> {
    let update = ListUpdate {
        name,
        store: store.map(|s| parse_store(Some(s))).transpose()?,
    };
    let list = session.state.lists.update_list(id, update)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&list);
    }
    Status::success(&format!("Updated {}", list.name));
    Ok(())
}

fn add(
    session: &mut Session,
    product_id: &str,
    quantity: f64,
    unit: Option<&str>,
    notes: Option<String>,
    list: Option<String>,
) -> Result<()> {
    let list_id = target_list(session, list)?;
    let list_store = session.state.lists.require(&list_id)?.store;
    let store = session.pricing_store(list_store)?;
    let product = session.state.products.require(product_id)?;

    let mut item = ShoppingItem::for_product(product, store);
    item.quantity = quantity;
    if let Some(unit) = unit {
        item.unit = unit.parse::<Unit>()?;
    }
    if let Some(notes) = notes {
        item = item.with_notes(notes);
    }
    let name = product.name.clone();

    let item = session.state.lists.add_item(&list_id, item)?.clone();
    session.save()?;

    if session.is_json() {
        return print_json(&item);
    }
    Status::success(&format!("Added {} to {} ({})", name, list_id, item.id));
    Ok(())
}
