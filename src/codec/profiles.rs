//! Reference-profile resolution.

use tracing::warn;

use crate::document::Element;
use crate::domain::{ComparisonMode, ProfileError, ProfileSet};

/// Extracts the reference profiles for the given comparison mode.
///
/// Boundary mode collects every `alternativeID` text under a
/// `categoriesProfiles` section, in document order. Central mode reads
/// each `categoryProfile`'s own identifier and central category; any
/// malformed entry degrades the whole result to an empty mapping (a
/// defined tolerance, not an error). `Alternatives` mode has no profiles
/// and is rejected.
pub fn resolve_profiles(tree: &Element, mode: ComparisonMode) -> Result<ProfileSet, ProfileError> {
    match mode {
        ComparisonMode::BoundaryProfiles => Ok(ProfileSet::Boundary(boundary_profile_ids(tree))),
        ComparisonMode::CentralProfiles => Ok(ProfileSet::Central(central_profile_pairs(tree))),
        ComparisonMode::Alternatives => Err(ProfileError::UnsupportedMode {
            mode: mode.to_string(),
        }),
    }
}

fn boundary_profile_ids(tree: &Element) -> Vec<String> {
    tree.descendants("categoriesProfiles")
        .into_iter()
        .flat_map(|block| block.descendants("alternativeID"))
        .filter_map(Element::text)
        .map(str::to_string)
        .collect()
}

fn central_profile_pairs(tree: &Element) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for profile in tree.descendants("categoryProfile") {
        let id = profile.find_text("alternativeID");
        let category = profile.find_text("central/categoryID");
        match (id, category) {
            (Some(id), Some(category)) => pairs.push((id.to_string(), category.to_string())),
            _ => {
                warn!("malformed categoryProfile entry, degrading to an empty profile set");
                return Vec::new();
            }
        }
    }
    pairs
}
