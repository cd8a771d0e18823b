//! Breed matching engine and similarity scoring.
//!
//! - [`BreedMatcher`](engine::BreedMatcher): layered matcher over species-filtered breeds
//! - [`MatchCandidate`](engine::MatchCandidate): one matched breed and how it matched
//! - [`token_sort_similarity`](scoring::token_sort_similarity): word-order-insensitive similarity
//!
//! ## Matching Algorithm
//!
//! Phases run in order and the first one with any result wins:
//!
//! 1. **Exact**: label (case-insensitive) or key equals the query
//! 2. **Partial**: query is a substring of the label or key
//! 3. **Fuzzy**: top labels by [`token_sort_similarity`](scoring::token_sort_similarity),
//!    keeping those strictly above the threshold (default 70) before rounding
//!
//! ## Example
//!
//! ```rust,no_run
//! use breed_resolver::catalog::filter::eligible_for_species;
//! use breed_resolver::{BreedCatalog, BreedMatcher, Species};
//!
//! let catalog = BreedCatalog::load_embedded().unwrap();
//! let dogs = eligible_for_species(&catalog, Species::Dog);
//!
//! for m in BreedMatcher::new().find_matches(&dogs, "retriever") {
//!     println!("{} ({}) via {}", m.label, m.breed_id, m.match_type);
//! }
//! ```

pub mod engine;
pub mod scoring;
