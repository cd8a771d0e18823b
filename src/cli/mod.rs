//! Command-line interface for breed-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve a free-text breed name for a species
//! - **breeds**: List the quotable breeds for a species
//! - **serve**: Start the HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Resolve a breed
//! breed-resolver resolve --species dog labrador retriever
//!
//! # JSON output for scripting
//! breed-resolver resolve --species cat "short hair" --format json
//!
//! # Use a custom breed mapping file
//! BREED_RESOLVER_CATALOG=breeds.json breed-resolver breeds --species cat
//!
//! # Start the API
//! breed-resolver serve --port 8080
//! ```

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};

use crate::catalog::store::CatalogSource;
use crate::matching::engine::{MatchingConfig, DEFAULT_FUZZY_LIMIT, DEFAULT_FUZZY_THRESHOLD};

pub mod breeds;
pub mod resolve;

#[derive(Parser)]
#[command(name = "breed-resolver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve free-text pet breed names into provider breed identifiers")]
#[command(
    long_about = "breed-resolver turns a breed name typed by a user into the breed identifier a pet insurance quoting provider expects.\n\nMatching runs in three phases and stops at the first that finds anything:\n- Exact label or key match\n- Partial (substring) match\n- Fuzzy match on word-order-insensitive similarity\n\nWhen several breeds match, all of them are listed so the user can pick one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a breed mapping JSON file (defaults to the embedded table)
    #[arg(long, global = true, env = "BREED_RESOLVER_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_option(self.catalog.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a breed name to a provider breed id
    Resolve(resolve::ResolveArgs),

    /// List quotable breeds for a species
    Breeds(breeds::BreedsArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Matcher tuning shared by commands that resolve breeds
#[derive(clap::Args, Clone, Debug)]
pub struct MatchingArgs {
    /// Maximum number of fuzzy candidates considered
    #[arg(long, default_value_t = DEFAULT_FUZZY_LIMIT, value_parser = clap::value_parser!(u16).range(1..=50).map(usize::from))]
    pub fuzzy_limit: usize,

    /// Fuzzy candidates must score strictly above this (0-100)
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fuzzy_threshold: u8,
}

impl From<&MatchingArgs> for MatchingConfig {
    fn from(args: &MatchingArgs) -> Self {
        Self {
            fuzzy_limit: args.fuzzy_limit,
            fuzzy_threshold: args.fuzzy_threshold,
        }
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
