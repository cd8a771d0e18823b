use crate::core::breed::BreedRecord;
use crate::core::types::Species;

use super::store::BreedCatalog;

/// Records that are quotable and tagged for `species`, in catalog order.
///
/// The order feeds the matcher's tie-breaks, so it must stay the catalog's
/// iteration order.
pub fn eligible_for_species(catalog: &BreedCatalog, species: Species) -> Vec<&BreedRecord> {
    catalog
        .iter()
        .filter(|breed| breed.is_eligible() && breed.is_species(species))
        .collect()
}
