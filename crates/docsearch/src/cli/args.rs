//! Clap argument definitions for the `docsearch` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docsearch_index::DEFAULT_LIMIT;

/// Default path of the index snapshot file.
pub const DEFAULT_INDEX_PATH: &str = "search-index.json";

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Search tooling for the documentation site")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `docsearch search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query terms
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Path to the index snapshot
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// Maximum results to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Results to skip before output
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `docsearch serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Path to the index snapshot
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// Path to the page metadata file
    #[arg(long)]
    pub meta: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(long)]
    pub addr: Option<String>,
}

/// Arguments for `docsearch recent`.
#[derive(Args, Debug, Clone)]
pub struct RecentCommand {
    /// What to do with the recent-search store.
    #[command(subcommand)]
    pub action: RecentAction,
}

/// Actions on the recent-search store.
#[derive(Subcommand, Debug, Clone)]
pub enum RecentAction {
    /// List recent searches, most recent first
    Ls {
        /// Path to the store file (defaults to ~/.docsearch/recent-searches.json)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Remove a recent search by id
    Rm {
        /// Entry id to remove
        id: u64,

        /// Path to the store file (defaults to ~/.docsearch/recent-searches.json)
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

/// Supported `docsearch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Query the index and print matching sections
    Search(SearchCommand),

    /// Run the HTTP query endpoint
    Serve(ServeCommand),

    /// Inspect or edit the recent-search store
    Recent(RecentCommand),
}
