use serde::Serialize;
use std::collections::HashSet;

use crate::core::breed::BreedRecord;
use crate::core::types::MatchType;
use crate::matching::scoring::{to_score, token_sort_similarity};

/// A breed that matched a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub key: String,
    pub label: String,

    /// Downstream quoting id
    pub breed_id: String,

    pub match_type: MatchType,

    /// Similarity (0-100), only set for fuzzy matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl MatchCandidate {
    fn from_record(record: &BreedRecord, match_type: MatchType, score: Option<u8>) -> Self {
        Self {
            key: record.key.clone(),
            label: record.label.clone(),
            breed_id: record.breed_id().unwrap_or_default().to_string(),
            match_type,
            score,
        }
    }
}

/// Default number of fuzzy labels considered
pub const DEFAULT_FUZZY_LIMIT: usize = 5;

/// Default fuzzy score a label must strictly exceed
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 70;

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Maximum number of fuzzy candidates kept, before thresholding
    pub fuzzy_limit: usize,
    /// Fuzzy candidates must score strictly above this
    pub fuzzy_threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Layered exact -> partial -> fuzzy breed matcher.
///
/// The first phase that produces any candidate wins; later phases do not
/// run. Exact and partial candidates come back in input order. Fuzzy
/// candidates come back by descending score, equal scores keeping the
/// order in which their labels were first seen.
#[derive(Debug, Clone, Default)]
pub struct BreedMatcher {
    config: MatchingConfig,
}

impl BreedMatcher {
    /// Create a matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom configuration
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Match `query` against `candidates`.
    ///
    /// The query is trimmed and lower-cased here. Rejecting a blank query
    /// is the caller's job; an empty candidate list yields no matches.
    pub fn find_matches(&self, candidates: &[&BreedRecord], query: &str) -> Vec<MatchCandidate> {
        let query = query.trim().to_lowercase();

        let exact = Self::exact_matches(candidates, &query);
        if !exact.is_empty() {
            tracing::debug!(query = %query, count = exact.len(), "Exact breed matches");
            return exact;
        }

        let partial = Self::partial_matches(candidates, &query);
        if !partial.is_empty() {
            tracing::debug!(query = %query, count = partial.len(), "Partial breed matches");
            return partial;
        }

        let fuzzy = self.fuzzy_matches(candidates, &query);
        tracing::debug!(query = %query, count = fuzzy.len(), "Fuzzy breed matches");
        fuzzy
    }

    fn exact_matches(candidates: &[&BreedRecord], query: &str) -> Vec<MatchCandidate> {
        candidates
            .iter()
            .filter(|r| r.label.to_lowercase() == query || r.key == query)
            .map(|r| MatchCandidate::from_record(r, MatchType::Exact, None))
            .collect()
    }

    fn partial_matches(candidates: &[&BreedRecord], query: &str) -> Vec<MatchCandidate> {
        candidates
            .iter()
            .filter(|r| r.label.to_lowercase().contains(query) || r.key.contains(query))
            .map(|r| MatchCandidate::from_record(r, MatchType::Partial, None))
            .collect()
    }

    fn fuzzy_matches(&self, candidates: &[&BreedRecord], query: &str) -> Vec<MatchCandidate> {
        // One record per distinct label; the first record seen with a label backs it
        let mut seen: HashSet<&str> = HashSet::new();
        let mut by_label: Vec<&BreedRecord> = Vec::new();
        for &record in candidates {
            if seen.insert(record.label.as_str()) {
                by_label.push(record);
            }
        }

        let mut scored: Vec<(&BreedRecord, f64)> = by_label
            .into_iter()
            .map(|r| (r, token_sort_similarity(query, &r.label.to_lowercase())))
            .collect();

        // Stable: equal scores keep label encounter order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        // Threshold applies to the unrounded similarity
        let threshold = f64::from(self.config.fuzzy_threshold);
        scored
            .into_iter()
            .take(self.config.fuzzy_limit)
            .filter(|&(_, similarity)| similarity > threshold)
            .map(|(r, similarity)| {
                MatchCandidate::from_record(r, MatchType::Fuzzy, Some(to_score(similarity)))
            })
            .collect()
    }
}
