//! # breed-resolver
//!
//! A library for resolving free-text pet breed names into the breed
//! identifiers a pet insurance quoting provider expects.
//!
//! Users type breed names in many ways: "lab", "Labrador", "labrador
//! retriever", "retriever labrador", or with a typo. `breed-resolver` matches
//! the input against a reference table of canonical breeds for the requested
//! species, and either resolves it to a single breed or returns every
//! plausible candidate so the user can choose.
//!
//! ## Features
//!
//! - **Layered matching**: exact, then substring, then fuzzy; the first phase with a hit wins
//! - **Word-order-insensitive fuzzy scoring**: "retriever golden" scores 100 against "Golden Retriever"
//! - **Species isolation**: only breeds tagged for the requested species are considered
//! - **Explicit disambiguation**: several matches are returned as a distinct result, never guessed
//! - **Load once**: the reference table is parsed on first use and shared read-only
//!
//! ## Example
//!
//! ```rust,no_run
//! use breed_resolver::{Resolution, Resolver};
//!
//! // Resolve against the embedded breed table
//! let resolver = Resolver::default();
//!
//! match resolver.resolve("dog", "labrador retriever") {
//!     Ok(Resolution::Resolved { breed_id, label, .. }) => println!("{label}: {breed_id}"),
//!     Ok(Resolution::Ambiguous { options, .. }) => {
//!         for option in options {
//!             println!("did you mean {}?", option.label);
//!         }
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Breed reference table loading and species filtering
//! - [`core`]: Core data types for breeds and species
//! - [`matching`]: Matching engine and similarity scoring
//! - [`resolver`]: Resolution entry point and outcome types
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP API

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod resolver;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::{BreedCatalog, CatalogError, CatalogSource};
pub use crate::core::breed::{BreedRecord, ProviderIds};
pub use crate::core::types::*;
pub use matching::engine::{BreedMatcher, MatchCandidate, MatchingConfig};
pub use resolver::{Resolution, ResolveError, Resolver};
