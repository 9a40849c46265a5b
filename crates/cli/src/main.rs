//! `shopadmin` — storefront admin from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Import products from a CSV file (name,price,stock,category)
//! shopadmin import products.csv
//!
//! # Browse the catalog
//! shopadmin products --category electronics --min-stock 5 --page 2
//!
//! # Dashboard for the last 30 days
//! shopadmin dashboard --window 30days
//!
//! # Manage users
//! shopadmin users list
//! shopadmin users delete bob@example.com
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shopadmin_admin::{AdminConfig, AdminService, DATA_FILE_ENV};
use shopadmin_core::SystemClock;
use shopadmin_observability::LogFormat;
use shopadmin_sales::TimeWindow;
use shopadmin_store::JsonFileStore;

mod commands;

#[derive(Parser)]
#[command(name = "shopadmin")]
#[command(author, version, about = "Storefront admin tools")]
struct Cli {
    /// JSON file backing the store
    #[arg(long, global = true, env = DATA_FILE_ENV)]
    data_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import products from a CSV file
    Import {
        /// CSV file with a header line and `name,price,stock,category` rows
        file: Option<PathBuf>,
    },
    /// List products, filtered and paginated
    Products {
        /// Case-insensitive substring of the product name
        #[arg(long, default_value = "")]
        name: String,

        /// Case-insensitive exact category
        #[arg(long, default_value = "")]
        category: String,

        /// Minimum stock level (inclusive)
        #[arg(long)]
        min_stock: Option<u64>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to SHOPADMIN_PAGE_SIZE, then 6)
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },
    /// Show dashboard totals and sales breakdowns
    Dashboard {
        /// Time window: all, 7days, 30days
        #[arg(long, default_value = "all")]
        window: TimeWindow,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,
    /// Delete every user with this email
    Delete {
        /// Email address (exact match)
        email: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    shopadmin_observability::init(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    });

    if let Err(e) = run(cli) {
        tracing::error!("command failed: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AdminConfig::from_env();
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    tracing::debug!(data_file = %config.data_file.display(), "using store");
    let admin = AdminService::new(JsonFileStore::new(&config.data_file), SystemClock);

    match cli.command {
        Commands::Import { file } => commands::products::import(&admin, file.as_deref())?,
        Commands::Products {
            name,
            category,
            min_stock,
            page,
            page_size,
        } => {
            let page_size = page_size.unwrap_or(config.page_size);
            commands::products::list(&admin, name, category, min_stock, page, page_size)?
        }
        Commands::Dashboard { window } => commands::dashboard::show(&admin, window)?,
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list(&admin)?,
            UsersAction::Delete { email } => commands::users::delete(&admin, &email)?,
        },
    }
    Ok(())
}
