//! CLI administration tool for snaplink.
//!
//! Inspects and edits the mapping snapshot directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin admin -- list
//!
//! # Show the target of one id
//! cargo run --bin admin -- show 3fa9c1
//!
//! # Add a mapping (generated id unless --id is given)
//! cargo run --bin admin -- add https://example.com --id promo
//!
//! # Check that the snapshot loads
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DB_FILE` (optional): snapshot path, overridden by `--file` (default: `db.json`)
//!
//! The server keeps the whole mapping in memory and rewrites the snapshot on
//! every change. Do not run `add` against a snapshot a running server owns:
//! the server's next write would discard the added entry.

use snaplink::application::services::MappingStore;
use snaplink::domain::StoreError;
use snaplink::infrastructure::persistence::JsonSnapshotRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing snaplink mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file (defaults to $DB_FILE, then db.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all mappings
    List,

    /// Show the target URL of an id
    Show {
        /// Short id to look up
        id: String,
    },

    /// Add a mapping
    Add {
        /// Target URL
        url: String,

        /// Custom id (generated if not provided)
        #[arg(short, long)]
        id: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Load the snapshot and report its size
    Check,
}

type Store = MappingStore<JsonSnapshotRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .file
        .or_else(|| std::env::var("DB_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("db.json"));

    let repository = Arc::new(JsonSnapshotRepository::new(&path));
    let store = MappingStore::open(repository)
        .await
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;

    match cli.command {
        Commands::List => list_mappings(&store).await,
        Commands::Show { id } => show_mapping(&store, &id).await?,
        Commands::Add { url, id, yes } => add_mapping(&store, url, id, yes).await?,
        Commands::Check => check_snapshot(&store, &path).await,
    }

    Ok(())
}

/// Lists all mappings sorted by id.
///
/// # Output Format
///
/// ```text
/// 📋 Mappings
///
///   ID         Target
///   ──────────────────────────────────────────────────────────
///   3fa9c1     https://example.com
///   promo      https://example.com/spring-sale
///
///   Total: 2
/// ```
async fn list_mappings(store: &Store) {
    println!("{}", "📋 Mappings".bright_blue().bold());
    println!();

    let entries = store.entries().await;

    if entries.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin add <url>",
            "cargo run --bin".bright_cyan()
        );
        return;
    }

    println!(
        "  {:<10} {}",
        "ID".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for entry in &entries {
        println!("  {:<10} {}", entry.id.cyan(), entry.target);
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();
}

/// Prints the target of a single id.
async fn show_mapping(store: &Store, id: &str) -> Result<()> {
    match store.resolve(id).await {
        Ok(target) => {
            println!("  {} → {}", id.cyan(), target);
            Ok(())
        }
        Err(StoreError::NotFound { .. }) => {
            anyhow::bail!("No mapping for id '{}'", id)
        }
        Err(e) => Err(e.into()),
    }
}

/// Adds a mapping after confirmation.
///
/// # Flow
///
/// 1. Show the mapping about to be created
/// 2. Confirm (unless `--yes`)
/// 3. Create through the store, which persists the snapshot
async fn add_mapping(store: &Store, url: String, id: Option<String>, yes: bool) -> Result<()> {
    println!("{}", "🔗 Add Mapping".bright_blue().bold());
    println!();
    println!("  Target: {}", url.cyan());
    println!(
        "  ID:     {}",
        id.as_deref().unwrap_or("(generated)").bright_yellow()
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Create this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let entry = match store.create(url, id).await {
        Ok(entry) => entry,
        Err(StoreError::DuplicateId { id }) => {
            anyhow::bail!("ID '{}' is already taken", id)
        }
        Err(e) => return Err(e).context("Failed to create mapping"),
    };

    println!(
        "{}",
        format!("✅ Created {} → {}", entry.id, entry.target)
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Reports whether the snapshot loads and how many mappings it holds.
async fn check_snapshot(store: &Store, path: &std::path::Path) {
    println!("{}", "🔍 Snapshot Check".bright_blue().bold());
    println!();
    println!("  File:     {}", path.display().to_string().cyan());
    println!(
        "  Mappings: {}",
        store.len().await.to_string().bright_white().bold()
    );
    println!();
    println!("{}", "✅ Snapshot is readable".green().bold());
    println!();
}
