//! CLI administration tool for acorta.
//!
//! Provides commands for inspecting and pruning shortened URLs without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the most recent URLs
//! cargo run --bin admin -- urls list --limit 20
//!
//! # Delete a URL by its short code (asks for confirmation)
//! cargo run --bin admin -- urls delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `DATABASE_URL` selects the SQLite database file.

use acorta::config;
use acorta::domain::repositories::UrlRepository;
use acorta::infrastructure::persistence::SqliteUrlRepository;
use acorta::server::build_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing acorta.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage shortened URLs
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List recent URLs, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Delete a URL by its short code
    Delete {
        /// Short code of the URL to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = build_pool(&config).await?;

    acorta::MIGRATOR.run(&pool).await?;

    match cli.command {
        Commands::Urls { action } => handle_url_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches URL management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));

    match action {
        UrlAction::List { limit } => {
            list_urls(repo, limit).await?;
        }
        UrlAction::Delete { code, yes } => {
            delete_url(repo, &code, yes).await?;
        }
    }

    Ok(())
}

/// Prints recent URLs in a table.
async fn list_urls(repo: Arc<SqliteUrlRepository>, limit: i64) -> Result<()> {
    let urls = repo.list(limit).await?;

    if urls.is_empty() {
        println!("{}", "No URLs found.".yellow());
        return Ok(());
    }

    println!(
        "{:<8} {:<22} {:>8}  {}",
        "CODE".bold(),
        "CREATED".bold(),
        "CLICKS".bold(),
        "ORIGINAL URL".bold()
    );

    for url in urls {
        println!(
            "{:<8} {:<22} {:>8}  {}",
            url.short_code.cyan(),
            url.created_at.format("%Y-%m-%d %H:%M:%S"),
            url.clicks,
            url.original_url
        );
    }

    Ok(())
}

/// Deletes a URL after an interactive confirmation.
async fn delete_url(repo: Arc<SqliteUrlRepository>, code: &str, yes: bool) -> Result<()> {
    let Some(url) = repo.find_by_code(code).await? else {
        println!("{} {}", "Not found:".red(), code);
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} -> {}?", code, url.original_url))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    match repo.delete(code).await {
        Ok(true) => println!("{} {}", "Deleted:".green(), code),
        Ok(false) => println!("{} {}", "Not found:".red(), code),
        Err(e) => anyhow::bail!("Delete failed: {e}"),
    }

    Ok(())
}

/// Prints total URL and click counts.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    let (total_urls, total_clicks) = sqlx::query_as::<_, (i64, i64)>(
        "SELECT COUNT(*), COALESCE(SUM(clicks), 0) FROM urls",
    )
    .fetch_one(pool)
    .await?;

    println!("{}", "Statistics".bold());
    println!("  URLs:   {}", total_urls.to_string().cyan());
    println!("  Clicks: {}", total_clicks.to_string().cyan());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
            println!("{}", "Database connection OK".green());
        }
    }

    Ok(())
}
