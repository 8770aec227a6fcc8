//! Explorer shell (v1)
//!
//! Command-line host for the application shell.
//!
//! # Architecture Overview
//!
//! ```text
//!   path ──▶ Navigator ──▶ RouteTable ──▶ PageLoader ──▶ Page::render
//!                                                           │
//!                                  AppContext ◀─────────────┘
//!                                  ├─ AppConfig
//!                                  └─ ProviderStore ──▶ ProviderHandle (alloy)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use explorer_shell::config::loader::load_or_default;
use explorer_shell::observability::logging::init_logging;
use explorer_shell::routing::{app_routes, RouteName};
use explorer_shell::{hash_shortener, AppContext, Navigator};

#[derive(Parser)]
#[command(name = "explorer-shell")]
#[command(about = "Route, render and format explorer pages", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a path and render the page
    Navigate {
        /// Path such as "/transactions"
        path: Option<String>,

        /// Navigate by route name instead, e.g. "TransactionsPage"
        #[arg(short, long, conflicts_with = "path")]
        name: Option<RouteName>,
    },
    /// List the route table
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shorten a hash for display
    Shorten {
        hash: String,

        /// Characters to keep; defaults to display.hash_length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.observability)?;

    tracing::debug!(
        provider_configured = config.provider.http_url.is_some(),
        hash_length = config.display.hash_length,
        "Configuration loaded"
    );

    let routes = Arc::new(app_routes(config.router.clone())?);

    match cli.command {
        Commands::Navigate { path, name } => {
            let ctx = AppContext::new(config);
            let navigator = Navigator::new(routes);

            let navigation = match name {
                Some(name) => navigator.navigate_named(name).await?,
                None => navigator.navigate(path.as_deref().unwrap_or("/")).await?,
            };
            let body = navigation.page.render(&ctx, &navigation.params).await?;
            println!("{}", body);
        }
        Commands::Routes { json } => {
            if json {
                let rows: Vec<_> = routes
                    .entries()
                    .map(|entry| {
                        serde_json::json!({
                            "path": entry.path(),
                            "name": entry.name().map(|n| n.as_str()),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for entry in routes.entries() {
                    println!("{:<20} {}", entry.path(), entry.label());
                }
            }
        }
        Commands::Shorten { hash, length } => {
            let length = length.unwrap_or(config.display.hash_length);
            println!("{}", hash_shortener(&hash, length));
        }
    }

    Ok(())
}
