//! TheatreBase CLI
//!
//! ## Usage
//!
//! ```bash
//! # Create the database and lookup indexes
//! theatrebase setup
//!
//! # Load a JSON graph fixture ({"nodes": [...], "edges": [...]})
//! theatrebase import catalogue.json
//!
//! # Detail shape of one entity
//! theatrebase show MATERIAL 0f2c...
//!
//! # List shape of a model
//! theatrebase list PRODUCTION
//!
//! # Node and edge counts
//! theatrebase stats
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use theatrebase::{Catalogue, Config, GraphDb, GraphImport, NodeLabel, Services};

#[derive(Parser, Debug)]
#[command(name = "theatrebase")]
#[command(about = "Resolve credits, lineage and awards from a theatre catalogue graph")]
struct Args {
    /// Path to config file
    #[arg(short, long, env = "THEATREBASE_CONFIG")]
    config: Option<PathBuf>,

    /// Storage directory
    #[arg(long, env = "THEATREBASE_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Maximum items per list
    #[arg(long)]
    list_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create schema and lookup indexes
    Setup,

    /// Import a JSON graph file
    Import {
        file: PathBuf,
    },

    /// Print an entity's detail shape
    Show {
        /// Model tag or label (MATERIAL, Material, AWARD_CEREMONY, ...)
        model: String,
        uuid: String,
    },

    /// Print the list shape of a model
    List {
        model: String,
    },

    /// Print node and edge counts
    Stats,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(dir) = args.storage_dir {
        config.storage_dir = dir;
    }
    if let Some(limit) = args.list_limit {
        config.list_limit = limit;
    }
    config.validate()?;

    // Initialize tracing; RUST_LOG wins over the config file
    let default_filter = config.log_filter.clone().unwrap_or_else(|| "theatrebase=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    info!(
        storage_dir = %config.storage_dir.display(),
        database = %config.database_path().display(),
        "Starting theatrebase"
    );

    let db = Arc::new(
        GraphDb::open(&config.database_path())
            .with_context(|| format!("opening {}", config.database_path().display()))?,
    );

    // Save default config if it doesn't exist
    let config_path = config.config_path();
    if args.config.is_none() && !config_path.exists() {
        config.save(&config_path)?;
        info!(path = %config_path.display(), "Created default config");
    }

    let catalogue = Catalogue::new(Services::new(db, config.list_limit));

    match args.command {
        Command::Setup => {
            let report = catalogue.services().admin.setup()?;
            print_json(&report)?;
        }
        Command::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let import: GraphImport = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", file.display()))?;
            let result = catalogue.services().admin.import(import)?;
            print_json(&result)?;
        }
        Command::Show { model, uuid } => {
            let label: NodeLabel = model.parse()?;
            print_json(&catalogue.show(label, &uuid)?)?;
        }
        Command::List { model } => {
            let label: NodeLabel = model.parse()?;
            print_json(&catalogue.list(label)?)?;
        }
        Command::Stats => {
            print_json(&catalogue.services().admin.stats()?)?;
        }
    }

    Ok(())
}
