//! CLI for the vidcat video catalog.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::{self, CatalogConfig};

use commands::{run_add, run_completions, run_list, run_remove, run_show};

/// Top-level CLI for the vidcat catalog.
#[derive(Debug, Parser)]
#[command(name = "vidcat")]
#[command(about = "vidcat: a small searchable catalog of YouTube videos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a video by its YouTube watch URL.
    Add {
        /// URL of the form https://www.youtube.com/watch?v=<id>.
        url: String,

        /// Display name for the video.
        #[arg(long)]
        name: String,

        /// Optional free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List videos alphabetically, optionally filtered by name.
    List {
        /// Case-insensitive text the name must contain.
        search: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show details of one video by its ID.
    Show {
        /// Video identifier.
        id: i64,
    },

    /// Remove a video by its ID.
    Remove {
        /// Video identifier.
        id: i64,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Load config and open the catalog it points at.
async fn open_catalog() -> Result<(CatalogConfig, CatalogDb)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let db = CatalogDb::open(&cfg).await?;
    Ok((cfg, db))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Add { url, name, notes } => {
                let (_, db) = open_catalog().await?;
                run_add(&db, &name, &url, notes.as_deref()).await?
            }
            CliCommand::List { search, json } => {
                let (cfg, db) = open_catalog().await?;
                run_list(&db, &cfg, search.as_deref(), json).await?
            }
            CliCommand::Show { id } => {
                let (cfg, db) = open_catalog().await?;
                run_show(&db, &cfg, id).await?
            }
            CliCommand::Remove { id } => {
                let (_, db) = open_catalog().await?;
                run_remove(&db, id).await?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
