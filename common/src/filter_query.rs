//! Shared facet selection models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetField {
    Region,
    Country,
    Tag,
}

impl FacetField {
    pub const ALL: [FacetField; 3] = [FacetField::Region, FacetField::Country, FacetField::Tag];

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetField::Region => "🗺 地域・文化圏",
            FacetField::Country => "🏳 国名",
            FacetField::Tag => "🏷 特徴タグ",
        }
    }

    /// Shown when nothing is selected for this facet.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FacetField::Region => "すべての地域",
            FacetField::Country => "すべての国",
            FacetField::Tag => "すべてのタグ",
        }
    }
}

/// Facet values currently chosen by the user. An empty set means the facet is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl FilterSelection {
    pub fn values(&self, facet: FacetField) -> &BTreeSet<String> {
        match facet {
            FacetField::Region => &self.regions,
            FacetField::Country => &self.countries,
            FacetField::Tag => &self.tags,
        }
    }

    pub fn values_mut(&mut self, facet: FacetField) -> &mut BTreeSet<String> {
        match facet {
            FacetField::Region => &mut self.regions,
            FacetField::Country => &mut self.countries,
            FacetField::Tag => &mut self.tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        FacetField::ALL.iter().all(|facet| self.values(*facet).is_empty())
    }

    /// Adds the value if absent, removes it otherwise.
    pub fn toggle(&mut self, facet: FacetField, value: &str) {
        let values = self.values_mut(facet);
        if !values.remove(value) {
            values.insert(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = FilterSelection::default();
        assert!(selection.is_empty());

        selection.toggle(FacetField::Tag, "予約必須");
        assert!(selection.tags.contains("予約必須"));
        assert!(!selection.is_empty());

        selection.toggle(FacetField::Tag, "予約必須");
        assert!(selection.is_empty());
    }

    #[test]
    fn facets_are_independent() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Region, "アジア");
        selection.toggle(FacetField::Country, "タイ");
        assert_eq!(selection.values(FacetField::Region).len(), 1);
        assert_eq!(selection.values(FacetField::Country).len(), 1);
        assert!(selection.values(FacetField::Tag).is_empty());
    }
}
