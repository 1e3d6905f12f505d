use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::config::Config;
use larder_shared::shopping::ListKey;
use larder_shopping::Store;

mod cli;

/// larder - recipe shopping lists
#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Turn recipe ingredients into a tidy shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// List to work on (shopping or utility), overrides shopping.default_list
    #[arg(long, global = true)]
    list: Option<ListKey>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Add the ingredients of a recipe JSON file
    Add {
        /// Recipe object with an `ingredients` array, or a bare array of `{item, amount}`
        recipe: String,
    },
    /// Add a custom item as typed
    Item { text: String },
    /// Print the list grouped by category
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Check or uncheck an item
    Toggle { id: String },
    /// Remove an item
    Remove { id: String },
    /// Remove checked items
    ClearChecked,
    /// Uncheck every item
    Reset,
    /// Delete the whole list
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    larder::observability::init_observability(
        "larder",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let key = cli.list.unwrap_or_else(|| config.default_list());

    let pool = larder::create_pool(&config.database.url, config.database.max_connections).await?;

    let store = Store(pool);

    match cli.command {
        Commands::Migrate => migrate_command(&store.0).await,
        Commands::Add { recipe } => cli::shopping::add(&store, key, recipe).await,
        Commands::Item { text } => cli::shopping::item(&store, key, text).await,
        Commands::Show { json } => cli::shopping::show(&store, key, json).await,
        Commands::Toggle { id } => cli::shopping::toggle(&store, key, id).await,
        Commands::Remove { id } => cli::shopping::remove(&store, key, id).await,
        Commands::ClearChecked => cli::shopping::clear_checked(&store, key).await,
        Commands::Reset => cli::shopping::reset(&store, key).await,
        Commands::Clear => cli::shopping::clear(&store, key).await,
    }
}

#[tracing::instrument(skip(pool))]
async fn migrate_command(pool: &sqlx::SqlitePool) -> Result<()> {
    tracing::info!("Running database migrations...");

    larder::migrate(pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
