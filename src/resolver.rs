//! Breed resolution: the single entry point used by the CLI and web layers.
//!
//! [`Resolver::resolve`] validates its inputs, filters the catalog to the
//! requested species, runs the [`BreedMatcher`] and routes on how many
//! candidates came back:
//!
//! | Matches | Outcome |
//! |---------|---------|
//! | 0 | [`ResolveError::NotFound`] |
//! | 1 | [`Resolution::Resolved`] |
//! | 2+ | [`Resolution::Ambiguous`] |
//!
//! The catalog is loaded on first use and then shared read-only by every
//! caller. Concurrent first callers block on the same initialization and
//! all observe the same fully built table.

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::catalog::filter::eligible_for_species;
use crate::catalog::store::{BreedCatalog, CatalogSource};
use crate::core::breed::BreedRecord;
use crate::core::types::Species;
use crate::matching::engine::{BreedMatcher, MatchCandidate, MatchingConfig};
use crate::utils::validation::{validate_query, ValidationError};

/// Successful outcome of a resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly one breed matched
    Resolved {
        breed_id: String,
        label: String,
        key: String,
    },

    /// Several breeds matched; the user has to pick one by exact label
    Ambiguous {
        count: usize,
        options: Vec<MatchCandidate>,
    },
}

/// Why a resolution request failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Species must be 'dog' or 'cat', got '{0}'")]
    InvalidSpecies(String),

    #[error(transparent)]
    InvalidQuery(#[from] ValidationError),

    #[error("No breeds found matching '{query}' for {species}")]
    NotFound { species: Species, query: String },

    #[error("Breed catalog unavailable: {0}")]
    DataUnavailable(String),
}

impl ResolveError {
    /// True for failures the caller can fix by re-entering input
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::DataUnavailable(_))
    }
}

/// Resolves free-text breed names against a lazily loaded catalog
#[derive(Debug)]
pub struct Resolver {
    source: CatalogSource,
    matcher: BreedMatcher,

    /// Populated once; a load failure is kept too and never retried
    catalog: OnceCell<Result<BreedCatalog, String>>,
}

impl Resolver {
    /// Create a resolver that loads `source` on first use
    pub fn new(source: CatalogSource) -> Self {
        Self::with_config(source, MatchingConfig::default())
    }

    /// Create a resolver with a custom matcher configuration
    pub fn with_config(source: CatalogSource, config: MatchingConfig) -> Self {
        Self {
            source,
            matcher: BreedMatcher::with_config(config),
            catalog: OnceCell::new(),
        }
    }

    /// Create a resolver around an already loaded catalog
    pub fn from_catalog(catalog: BreedCatalog, config: MatchingConfig) -> Self {
        Self {
            source: CatalogSource::Embedded,
            matcher: BreedMatcher::with_config(config),
            catalog: OnceCell::with_value(Ok(catalog)),
        }
    }

    /// The catalog, loading it if this is the first call.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::DataUnavailable` if the catalog could not be
    /// read or parsed, on this call or any earlier one.
    pub fn catalog(&self) -> Result<&BreedCatalog, ResolveError> {
        self.catalog
            .get_or_init(|| {
                tracing::info!(source = %self.source, "Loading breed catalog");
                match BreedCatalog::load(&self.source) {
                    Ok(catalog) => {
                        tracing::info!(breeds = catalog.len(), "Loaded breed catalog");
                        Ok(catalog)
                    }
                    Err(e) => {
                        tracing::error!(source = %self.source, "Breed catalog load failed: {e}");
                        Err(e.to_string())
                    }
                }
            })
            .as_ref()
            .map_err(|e| ResolveError::DataUnavailable(e.clone()))
    }

    /// Quotable breeds tagged for `species`, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::DataUnavailable` if the catalog cannot be loaded.
    pub fn eligible_breeds(&self, species: Species) -> Result<Vec<&BreedRecord>, ResolveError> {
        Ok(eligible_for_species(self.catalog()?, species))
    }

    /// All candidates for `query` among `species` breeds, without routing
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::DataUnavailable` if the catalog cannot be loaded.
    pub fn find_matches(
        &self,
        species: Species,
        query: &str,
    ) -> Result<Vec<MatchCandidate>, ResolveError> {
        let breeds = self.eligible_breeds(species)?;
        Ok(self.matcher.find_matches(&breeds, query))
    }

    /// Resolve a free-text breed name for a species.
    ///
    /// # Errors
    ///
    /// - `InvalidSpecies` if `species` is blank or not `dog`/`cat`
    /// - `InvalidQuery` if `query` is blank or too long
    /// - `NotFound` if no phase produced a candidate
    /// - `DataUnavailable` if the catalog cannot be loaded
    pub fn resolve(&self, species: &str, query: &str) -> Result<Resolution, ResolveError> {
        let species: Species = species
            .parse()
            .map_err(|_| ResolveError::InvalidSpecies(species.to_string()))?;
        let query = validate_query(query)?;

        let mut matches = self.find_matches(species, query)?;
        tracing::debug!(%species, query, count = matches.len(), "Breed search finished");

        match matches.len() {
            0 => Err(ResolveError::NotFound {
                species,
                query: query.to_string(),
            }),
            1 => {
                let only = matches.remove(0);
                Ok(Resolution::Resolved {
                    breed_id: only.breed_id,
                    label: only.label,
                    key: only.key,
                })
            }
            count => Ok(Resolution::Ambiguous {
                count,
                options: matches,
            }),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(CatalogSource::Embedded)
    }
}
