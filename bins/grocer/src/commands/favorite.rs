//! Favorite product commands

use crate::render;
use crate::session::Session;
use clap::Subcommand;
use grocer_cli::output::{print_json, Status};
use grocer_core::Result;

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    /// Show favorite products
    Show,

    /// Mark a product as a favorite
    Add {
        /// Product id
        product: String,
    },

    /// Unmark a favorite product
    Remove {
        /// Product id
        product: String,
    },
}

pub fn run(session: &mut Session, command: FavoriteCommand) -> Result<()> {
    match command {
        FavoriteCommand::Show => {
            let store = session.pricing_store(None)?;
            let favorites = session.state.user.favorite_products(&session.state.products);
            if session.is_json() {
                return print_json(&favorites);
            }
            if favorites.is_empty() {
                Status::info("No favorites yet");
                return Ok(());
            }
            render::product_table(&favorites, store);
            Ok(())
        }
        FavoriteCommand::Add { product } => {
            let name = session.state.products.require(&product)?.name.clone();
            if session.state.user.add_favorite(&product) {
                session.save()?;
                Status::success(&format!("Added {} to favorites", name));
            } else {
                Status::info(&format!("{} is already a favorite", name));
            }
            Ok(())
        }
        FavoriteCommand::Remove { product } => {
            if session.state.user.remove_favorite(&product) {
                session.save()?;
                Status::success(&format!("Removed {} from favorites", product));
            } else {
                Status::info(&format!("{} is not a favorite", product));
            }
            Ok(())
        }
    }
}
