use serde::{Deserialize, Serialize};

use crate::core::types::Species;

/// Provider identifiers for a breed.
///
/// Only the two providers the resolver reads are modelled; any other
/// provider present in the source data is dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIds {
    /// Downstream quoting provider id (numeric string)
    #[serde(rename = "HealthyPaws", default, skip_serializing_if = "Option::is_none")]
    pub healthy_paws: Option<String>,

    /// Species-tagged id, e.g. `Dog~Labrador Retriever`
    #[serde(rename = "PrudentPet", default, skip_serializing_if = "Option::is_none")]
    pub prudent_pet: Option<String>,
}

/// One canonical breed entry from the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRecord {
    /// Normalized, lower-case identifier, unique in the table
    pub key: String,

    /// Human-readable display name
    pub label: String,

    pub providers: ProviderIds,
}

impl BreedRecord {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            providers: ProviderIds::default(),
        }
    }

    #[must_use]
    pub fn with_quote_id(mut self, id: impl Into<String>) -> Self {
        self.providers.healthy_paws = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_species_tag(mut self, tagged: impl Into<String>) -> Self {
        self.providers.prudent_pet = Some(tagged.into());
        self
    }

    /// Downstream quoting id, if present and non-empty
    pub fn breed_id(&self) -> Option<&str> {
        self.providers
            .healthy_paws
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// A record can only be resolved if the quoting provider knows it
    pub fn is_eligible(&self) -> bool {
        self.breed_id().is_some()
    }

    /// Species membership is read from the species-tagged provider id
    pub fn is_species(&self, species: Species) -> bool {
        self.providers
            .prudent_pet
            .as_deref()
            .is_some_and(|tagged| tagged.starts_with(species.tag()))
    }
}
