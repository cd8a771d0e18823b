//! Breed reference table storage and species filtering.
//!
//! The catalog maps a breed key to its display label and provider ids. A
//! default table is compiled into the binary, but a custom table can be
//! loaded from a JSON file with the same shape:
//!
//! ```json
//! {
//!   "labrador_retriever": {
//!     "label": "Labrador Retriever",
//!     "providers": { "HealthyPaws": "1001", "PrudentPet": "Dog~Labrador Retriever" }
//!   }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use breed_resolver::catalog::filter::eligible_for_species;
//! use breed_resolver::{BreedCatalog, Species};
//!
//! let catalog = BreedCatalog::load_embedded().unwrap();
//! for breed in eligible_for_species(&catalog, Species::Cat) {
//!     println!("{} -> {}", breed.label, breed.key);
//! }
//! ```

pub mod filter;
pub mod store;
