//! CLI administration tool for site-content.
//!
//! Provides commands for inspecting content counters, seeding the database
//! from the built-in industry catalog, and checking the database without
//! going through the HTTP admin API.
//!
//! # Usage
//!
//! ```bash
//! # View content counters
//! cargo run --bin admin -- stats
//!
//! # Show the built-in industry catalog
//! cargo run --bin admin -- catalog list
//!
//! # Upsert catalog industries into the database
//! cargo run --bin admin -- catalog seed
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`), plus
//! `IMAGE_MAP_PATH` for `catalog list`.

use site_content::application::images::ImageResolver;
use site_content::application::services::DashboardService;
use site_content::config::{Config, mask_connection_string};
use site_content::domain::catalog;
use site_content::infrastructure::persistence::{
    PgContactRepository, PgIndustryRepository, PgJobRepository, PgOfferingRepository,
    PgTestimonialRepository,
};
use site_content::server::{connect_pool, load_image_map};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing site-content.
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
    /// Show content counters
    Stats,

    /// Built-in industry catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List catalog industries with their resolved images
    List,

    /// Insert or update catalog industries in the database
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Stats => handle_stats(&config).await?,
        Commands::Catalog { action } => handle_catalog_action(action, &config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

fn pool(config: &Config) -> Result<Arc<PgPool>> {
    Ok(Arc::new(connect_pool(config)?))
}

/// Displays the same counters as the admin dashboard.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Content".bright_blue().bold());
    println!();

    let pool = pool(config)?;
    let dashboard = DashboardService::new(
        Arc::new(PgIndustryRepository::new(pool.clone())),
        Arc::new(PgOfferingRepository::new(pool.clone())),
        Arc::new(PgJobRepository::new(pool.clone())),
        Arc::new(PgTestimonialRepository::new(pool.clone())),
        Arc::new(PgContactRepository::new(pool)),
    );

    let counters = dashboard
        .counters()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load counters: {}", e))?;

    let rows = [
        ("Industries", counters.industries),
        ("Services", counters.services),
        ("Open jobs", counters.jobs),
        ("Testimonials", counters.testimonials),
        ("Submissions", counters.contact_submissions),
    ];

    for (label, count) in rows {
        println!(
            "  {:<14} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_catalog_action(action: CatalogAction, config: &Config) -> Result<()> {
    match action {
        CatalogAction::List => list_catalog(config),
        CatalogAction::Seed { yes } => seed_catalog(config, yes).await,
    }
}

/// Prints the built-in industries in display order.
///
/// # Output Format
///
/// ```text
/// 📋 Industry Catalog
///
///   #   Slug             Name                          Image
///   ───────────────────────────────────────────────────────────────────────────
///   1   healthcare       Healthcare                    /landing/pexels-tiger-lily-7109063.jpg
/// ```
fn list_catalog(config: &Config) -> Result<()> {
    println!("{}", "📋 Industry Catalog".bright_blue().bold());
    println!();

    let images = ImageResolver::new(load_image_map(config)?);

    println!(
        "  {:<3} {:<16} {:<29} {}",
        "#".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Name".bright_white().bold(),
        "Image".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for industry in catalog::industries() {
        let image = images.resolve(industry.image.as_deref(), Some(industry.slug.as_str()));
        println!(
            "  {:<3} {:<16} {:<29} {}",
            industry.order_index.to_string().bright_black(),
            industry.slug.cyan(),
            industry.name,
            image.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        catalog::industries().len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Upserts every catalog industry by slug.
///
/// Existing rows with the same slug are overwritten with catalog content.
async fn seed_catalog(config: &Config, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Industries".bright_blue().bold());
    println!();
    println!(
        "  Target:     {}",
        mask_connection_string(&config.database_url).cyan()
    );
    println!(
        "  Industries: {}",
        catalog::industries().len().to_string().cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Overwrite industries with matching slugs?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let repo = PgIndustryRepository::new(pool(config)?);
    let mut inserted = 0;
    let mut updated = 0;

    for industry in catalog::industries() {
        let created = repo
            .upsert(industry)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed '{}': {}", industry.slug, e))?;

        if created {
            inserted += 1;
            println!("  {} {}", "+".green(), industry.slug);
        } else {
            updated += 1;
            println!("  {} {}", "~".yellow(), industry.slug);
        }
    }

    println!();
    println!(
        "{} {} inserted, {} updated",
        "✅ Done:".green().bold(),
        inserted.to_string().bright_white().bold(),
        updated.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let pool = pool(config)?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool.as_ref())
                .await
                .context("Database is unreachable")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool.as_ref())
                .await
                .context("Migration failed")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
