//! Reference profiles and the comparison mode that selects them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ProfileError;

/// What the alternatives are compared against, per the upstream
/// `comparison_with` method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Alternatives,
    BoundaryProfiles,
    CentralProfiles,
}

impl ComparisonMode {
    /// Returns the upstream parameter spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Alternatives => "alternatives",
            ComparisonMode::BoundaryProfiles => "boundary_profiles",
            ComparisonMode::CentralProfiles => "central_profiles",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alternatives" => Ok(ComparisonMode::Alternatives),
            "boundary_profiles" => Ok(ComparisonMode::BoundaryProfiles),
            "central_profiles" => Ok(ComparisonMode::CentralProfiles),
            other => Err(ProfileError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// An ordered, read-only snapshot of the reference profiles declared in a
/// categories-profiles document.
///
/// Boundary mode is a flat sequence of profile identifiers; central mode
/// additionally maps each profile to its central category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileSet {
    Boundary(Vec<String>),
    Central(Vec<(String, String)>),
}

impl ProfileSet {
    /// Returns the profile identifiers in document order.
    pub fn profile_ids(&self) -> Vec<&str> {
        match self {
            ProfileSet::Boundary(ids) => ids.iter().map(String::as_str).collect(),
            ProfileSet::Central(pairs) => pairs.iter().map(|(id, _)| id.as_str()).collect(),
        }
    }

    /// Returns the central category of a profile, if this is a central set.
    pub fn category_of(&self, profile: &str) -> Option<&str> {
        match self {
            ProfileSet::Boundary(_) => None,
            ProfileSet::Central(pairs) => pairs
                .iter()
                .find(|(id, _)| id == profile)
                .map(|(_, category)| category.as_str()),
        }
    }

    /// Returns true if the set names this profile.
    pub fn contains(&self, profile: &str) -> bool {
        match self {
            ProfileSet::Boundary(ids) => ids.iter().any(|id| id == profile),
            ProfileSet::Central(pairs) => pairs.iter().any(|(id, _)| id == profile),
        }
    }

    /// Returns the number of profiles.
    pub fn len(&self) -> usize {
        match self {
            ProfileSet::Boundary(ids) => ids.len(),
            ProfileSet::Central(pairs) => pairs.len(),
        }
    }

    /// Returns true if no profile is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
