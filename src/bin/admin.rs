//! CLI administration tool for alias-shortener.
//!
//! Talks to the database directly through the same [`MappingService`] the
//! HTTP server uses, so all validation and conflict rules apply.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run --bin admin -- migrate
//!
//! # Create a mapping (alias is generated when omitted)
//! cargo run --bin admin -- create https://example.com --alias ex1
//!
//! # Resolve an alias
//! cargo run --bin admin -- resolve ex1
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `ALIAS_LENGTH` (optional): length of generated aliases (4-32)
//! - `ALIAS_MAX_ATTEMPTS` (optional): generated candidates tried on collision (1-100)

use alias_shortener::application::services::MappingService;
use alias_shortener::config::{AliasSettings, load_alias_settings};
use alias_shortener::infrastructure::persistence::PgMappingRepository;
use alias_shortener::server::run_migrations;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,

    /// Create a mapping
    Create {
        /// Target URL
        url: String,

        /// Custom alias (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the target URL of an alias
    Resolve {
        alias: String,
    },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await?,
        Commands::Create { url, alias } => {
            create_mapping(&service(&pool, load_alias_settings()?), url, alias).await?
        }
        Commands::Resolve { alias } => {
            resolve_alias(&service(&pool, load_alias_settings()?), &alias).await?
        }
        Commands::Delete { alias, yes } => {
            delete_mapping(&service(&pool, load_alias_settings()?), &alias, yes).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the service with the same alias rules the server validates.
fn service(pool: &PgPool, alias: AliasSettings) -> MappingService {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    MappingService::new(repository, Arc::new(RandomAliasGenerator))
        .with_alias_length(alias.length)
        .with_max_attempts(alias.max_attempts)
}

async fn handle_migrate(pool: &PgPool) -> Result<()> {
    println!("{}", "Applying migrations...".bright_blue());

    run_migrations(pool).await?;

    println!("{}", "Migrations applied".green().bold());
    Ok(())
}

async fn create_mapping(service: &MappingService, url: String, alias: Option<String>) -> Result<()> {
    let mapping = service
        .create(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create mapping: {}", e))?;

    println!("{}", "Mapping created".green().bold());
    println!("  ID:    {}", mapping.id.to_string().bright_black());
    println!("  Alias: {}", mapping.alias.bright_yellow().bold());
    println!("  URL:   {}", mapping.target_url.cyan());
    println!();

    Ok(())
}

async fn resolve_alias(service: &MappingService, alias: &str) -> Result<()> {
    let target_url = service
        .lookup(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("{} -> {}", alias.bright_yellow(), target_url.cyan());
    Ok(())
}

/// Deletes a mapping with confirmation prompt (default: No).
async fn delete_mapping(service: &MappingService, alias: &str, skip_confirm: bool) -> Result<()> {
    let target_url = service
        .lookup(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", target_url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete '{}': {}", alias, e))?;

    println!("{}", "Mapping deleted".green().bold());
    Ok(())
}

async fn handle_stats(pool: &PgPool) -> Result<()> {
    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await?;

    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
