use clap::Args;

use crate::catalog::store::CatalogSource;
use crate::cli::OutputFormat;
use crate::core::breed::BreedRecord;
use crate::core::types::Species;
use crate::resolver::Resolver;

#[derive(Args)]
pub struct BreedsArgs {
    /// Species to list breeds for (dog or cat)
    #[arg(short, long)]
    pub species: String,
}

/// Execute breeds subcommand
///
/// # Errors
///
/// Returns an error if the species is invalid or the catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: BreedsArgs,
    source: CatalogSource,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let species: Species = args.species.parse()?;
    let resolver = Resolver::new(source);
    let breeds = resolver.eligible_breeds(species)?;

    if verbose {
        eprintln!(
            "{} of {} catalog breeds are quotable for {species}",
            breeds.len(),
            resolver.catalog()?.len()
        );
    }

    match format {
        OutputFormat::Text => print_text(&breeds),
        OutputFormat::Json => print_json(species, &breeds)?,
        OutputFormat::Tsv => print_tsv(&breeds),
    }

    Ok(())
}

fn print_text(breeds: &[&BreedRecord]) {
    if breeds.is_empty() {
        eprintln!("No quotable breeds in catalog.");
        return;
    }

    let (label_width, key_width) = column_widths(breeds);

    println!("{:<label_width$}  {:<key_width$}  BREED ID", "LABEL", "KEY");
    for breed in breeds {
        println!(
            "{:<label_width$}  {:<key_width$}  {}",
            breed.label,
            breed.key,
            breed.breed_id().unwrap_or_default()
        );
    }
}

/// Widest label and key, in characters, as `format!` pads by character
fn column_widths(breeds: &[&BreedRecord]) -> (usize, usize) {
    let label_width = breeds
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let key_width = breeds
        .iter()
        .map(|b| b.key.chars().count())
        .max()
        .unwrap_or(0);
    (label_width, key_width)
}

fn print_json(species: Species, breeds: &[&BreedRecord]) -> anyhow::Result<()> {
    let rows: Vec<serde_json::Value> = breeds
        .iter()
        .map(|b| {
            serde_json::json!({
                "key": b.key,
                "label": b.label,
                "breed_id": b.breed_id(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "species": species,
        "count": rows.len(),
        "breeds": rows,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(breeds: &[&BreedRecord]) {
    println!("key\tlabel\tbreed_id");
    for breed in breeds {
        println!(
            "{}\t{}\t{}",
            breed.key,
            breed.label,
            breed.breed_id().unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_count_chars() {
        let lowchen = BreedRecord::new("lowchen", "Löwchen");
        let pug = BreedRecord::new("pug", "Pug");
        assert_eq!(column_widths(&[&lowchen, &pug]), (7, 7));
    }

    #[test]
    fn test_column_widths_empty() {
        assert_eq!(column_widths(&[]), (0, 0));
    }
}
