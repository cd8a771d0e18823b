use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Species a breed can be resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Prefix carried by species-tagged provider ids, e.g. `Dog~Beagle`
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dog => "Dog~",
            Self::Cat => "Cat~",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a species string is neither `dog` nor `cat`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Species must be 'dog' or 'cat', got '{0}'")]
pub struct UnknownSpecies(pub String);

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(UnknownSpecies(s.to_string())),
        }
    }
}

/// Which matching phase produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Label or key equals the query (case-insensitive)
    Exact,
    /// Query is contained in the label or key
    Partial,
    /// Token-sorted similarity above the threshold
    Fuzzy,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Partial => write!(f, "partial"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}
