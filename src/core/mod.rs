//! Core data types for breed resolution.
//!
//! - [`BreedRecord`](breed::BreedRecord): a canonical breed entry with its provider ids
//! - [`ProviderIds`](breed::ProviderIds): the quoting id and the species-tagged id
//! - [`Species`](types::Species), [`MatchType`](types::MatchType): request and result classification
//!
//! ## Eligibility
//!
//! A breed is only resolvable when the quoting provider has an id for it.
//! Species membership is not stored directly; it is read from the
//! species-tagged provider id, which starts with `Dog~` or `Cat~`:
//!
//! | Key | `HealthyPaws` | `PrudentPet` | dog | cat |
//! |-----|---------------|--------------|-----|-----|
//! | `beagle` | `1004` | `Dog~Beagle` | yes | no |
//! | `persian` | `2006` | `Cat~Persian` | no | yes |
//! | `wolf_hybrid` | | `Dog~Wolf Hybrid` | no | no |

pub mod breed;
pub mod types;
