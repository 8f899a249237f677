//! grocer - grocery catalog search, price comparison and shopping lists
//!
//! Every command loads the saved state, applies its change and saves it back.

use clap::{Parser, Subcommand};
use grocer_cli::output::{report_error, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod render;
mod session;

use commands::{cart, favorite, list, product, search, store};
use session::Session;

/// Search the grocery catalog, compare store prices and manage shopping lists
#[derive(Parser)]
#[command(name = "grocer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to grocer.toml in the usual places)
    #[arg(short, long, global = true, env = "GROCER_CONFIG")]
    config: Option<String>,

    /// Directory holding the saved state
    #[arg(long, global = true, env = "GROCER_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(search::SearchArgs),

    /// Suggest products while adding to a list
    Suggest {
        /// Text typed so far
        query: String,

        /// Only suggest products in this category
        #[arg(long)]
        category: Option<String>,

        /// Maximum suggestions to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Show or add catalog products
    Product {
        #[command(subcommand)]
        action: product::ProductCommand,
    },

    /// Manage shopping lists
    List {
        #[command(subcommand)]
        action: list::ListCommand,
    },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: cart::CartCommand,
    },

    /// Manage favorite products
    Favorite {
        #[command(subcommand)]
        action: favorite::FavoriteCommand,
    },

    /// Show or change the selected store ("all" clears it)
    Store {
        /// Store to select
        name: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

fn run(cli: Cli) -> grocer_core::Result<()> {
    let mut session = Session::open(cli.config.as_deref(), cli.state_dir, cli.verbose, cli.format)?;

    match cli.command {
        Commands::Search(args) => search::run(&session, &args),
        Commands::Suggest {
            query,
            category,
            limit,
        } => search::suggest(&session, &query, category.as_deref(), limit),
        Commands::Product { action } => product::run(&mut session, action),
        Commands::List { action } => list::run(&mut session, action),
        Commands::Cart { action } => cart::run(&mut session, action),
        Commands::Favorite { action } => favorite::run(&mut session, action),
        Commands::Store { name } => store::run(&mut session, name.as_deref()),
        Commands::Config => commands::config::run(&session),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code, "Command failed");
            report_error(&e, format);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
