use clap::Args;

use crate::catalog::store::CatalogSource;
use crate::cli::{MatchingArgs, OutputFormat};
use crate::matching::engine::{MatchCandidate, MatchingConfig};
use crate::resolver::{Resolution, Resolver};

#[derive(Args)]
pub struct ResolveArgs {
    /// Species of the pet (dog or cat)
    #[arg(short, long)]
    pub species: String,

    /// Breed name as typed by the user; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub breed: Vec<String>,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the input is invalid, no breed matches, or the
/// catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: ResolveArgs,
    source: CatalogSource,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let query = args.breed.join(" ");
    let resolver = Resolver::with_config(source, MatchingConfig::from(&args.matching));

    if verbose {
        let catalog = resolver.catalog()?;
        eprintln!("Loaded breed catalog with {} breeds", catalog.len());
    }

    let resolution = resolver.resolve(&args.species, &query)?;

    match format {
        OutputFormat::Text => print_text(&resolution, query.trim()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
        OutputFormat::Tsv => print_tsv(&resolution),
    }

    Ok(())
}

fn print_text(resolution: &Resolution, query: &str) {
    match resolution {
        Resolution::Resolved {
            breed_id,
            label,
            key,
        } => {
            println!("Resolved: {label}");
            println!("   Key: {key}");
            println!("   Breed ID: {breed_id}");
        }
        Resolution::Ambiguous { count, options } => {
            println!(
                "Found {count} breeds matching '{query}'. Please specify which breed you meant:"
            );
            for (i, option) in options.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, describe(option));
            }
            println!("\nRe-run with one of the exact breed labels above.");
        }
    }
}

fn describe(option: &MatchCandidate) -> String {
    match option.score {
        Some(score) => format!(
            "{} [{}, {} {score}]",
            option.label, option.key, option.match_type
        ),
        None => format!("{} [{}, {}]", option.label, option.key, option.match_type),
    }
}

fn print_tsv(resolution: &Resolution) {
    println!("status\tkey\tlabel\tbreed_id\tmatch_type\tscore");
    match resolution {
        Resolution::Resolved {
            breed_id,
            label,
            key,
        } => println!("resolved\t{key}\t{label}\t{breed_id}\t\t"),
        Resolution::Ambiguous { options, .. } => {
            for option in options {
                println!(
                    "ambiguous\t{}\t{}\t{}\t{}\t{}",
                    option.key,
                    option.label,
                    option.breed_id,
                    option.match_type,
                    option.score.map(|s| s.to_string()).unwrap_or_default()
                );
            }
        }
    }
}
