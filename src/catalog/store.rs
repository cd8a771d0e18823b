use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::breed::{BreedRecord, ProviderIds};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read breed catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse breed catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Where the breed reference table is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The mapping file compiled into the binary
    #[default]
    Embedded,
    /// A mapping file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// `Some(path)` selects a file, `None` the embedded table
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// On-disk shape of one breed entry; the key is the enclosing object key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BreedEntry {
    #[serde(default)]
    label: String,
    #[serde(default)]
    providers: ProviderIds,
}

/// The breed reference table, in source order
#[derive(Debug, Default)]
pub struct BreedCatalog {
    breeds: Vec<BreedRecord>,

    /// Index: breed key -> index in breeds vec
    key_to_index: HashMap<String, usize>,
}

impl BreedCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the given source
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Embedded => Self::load_embedded(),
            CatalogSource::File(path) => Self::load_from_file(path),
        }
    }

    /// Load the embedded breed mapping table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../data/breed_mappings.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a `key -> { label, providers }` JSON object, keeping its order
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (key, value) in raw {
            let entry: BreedEntry = serde_json::from_value(value)?;
            catalog.add_breed(BreedRecord {
                key,
                label: entry.label,
                providers: entry.providers,
            });
        }

        tracing::debug!(breeds = catalog.len(), "Parsed breed catalog");
        Ok(catalog)
    }

    /// Add a breed. A repeated key replaces the earlier record in place.
    pub fn add_breed(&mut self, breed: BreedRecord) {
        if let Some(&idx) = self.key_to_index.get(&breed.key) {
            self.breeds[idx] = breed;
            return;
        }
        self.key_to_index.insert(breed.key.clone(), self.breeds.len());
        self.breeds.push(breed);
    }

    /// Get a breed by key
    pub fn get(&self, key: &str) -> Option<&BreedRecord> {
        self.key_to_index.get(key).map(|&idx| &self.breeds[idx])
    }

    /// Iterate in source order
    pub fn iter(&self) -> std::slice::Iter<'_, BreedRecord> {
        self.breeds.iter()
    }

    /// Export catalog to JSON in the same shape it is loaded from
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let mut raw = serde_json::Map::new();
        for breed in &self.breeds {
            let entry = BreedEntry {
                label: breed.label.clone(),
                providers: breed.providers.clone(),
            };
            raw.insert(breed.key.clone(), serde_json::to_value(entry)?);
        }
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    /// Number of breeds in catalog
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl<'a> IntoIterator for &'a BreedCatalog {
    type Item = &'a BreedRecord;
    type IntoIter = std::slice::Iter<'a, BreedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BreedCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_key() {
        let catalog = BreedCatalog::load_embedded().unwrap();

        let lab = catalog.get("labrador_retriever").unwrap();
        assert_eq!(lab.label, "Labrador Retriever");
        assert_eq!(lab.breed_id(), Some("1001"));
        assert_eq!(
            lab.providers.prudent_pet.as_deref(),
            Some("Dog~Labrador Retriever")
        );
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = BreedCatalog::load_embedded().unwrap();
        assert!(catalog.get("dragon").is_none());
    }

    #[test]
    fn test_from_json_preserves_source_order() {
        let json = r#"{
            "zebra_cat": {"label": "Zebra", "providers": {}},
            "alpha_dog": {"label": "Alpha", "providers": {}},
            "middle": {"label": "Middle", "providers": {}}
        }"#;
        let catalog = BreedCatalog::from_json(json).unwrap();
        let keys: Vec<&str> = catalog.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["zebra_cat", "alpha_dog", "middle"]);
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let json = r#"{"mystery": {}}"#;
        let catalog = BreedCatalog::from_json(json).unwrap();
        let record = catalog.get("mystery").unwrap();
        assert_eq!(record.label, "");
        assert!(!record.is_eligible());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            BreedCatalog::from_json("[1, 2, 3]"),
            Err(CatalogError::ParseError(_))
        ));
        assert!(matches!(
            BreedCatalog::from_json("{not json"),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = BreedCatalog::load_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CatalogError::ReadError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pug": {{"label": "Pug", "providers": {{"HealthyPaws": "7", "PrudentPet": "Dog~Pug"}}}}}}"#
        )
        .unwrap();

        let catalog =
            BreedCatalog::load(&CatalogSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("pug").unwrap().breed_id(), Some("7"));
    }

    #[test]
    fn test_to_json_round_trips_through_loader() {
        let catalog = BreedCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();
        let reloaded = BreedCatalog::from_json(&json).unwrap();

        assert_eq!(reloaded.len(), catalog.len());
        assert!(catalog.iter().zip(reloaded.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_add_breed_replaces_duplicate_key() {
        let mut catalog = BreedCatalog::new();
        catalog.add_breed(BreedRecord::new("pug", "Pug"));
        catalog.add_breed(BreedRecord::new("pug", "Pug (Fawn)"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("pug").unwrap().label, "Pug (Fawn)");
    }
}
