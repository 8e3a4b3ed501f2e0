use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    models::{FilterCriteria, Property},
};

/// Read-only queries over the catalog
///
/// All results borrow from the catalog and preserve its stored order.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Catalog,
}

impl QueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The full catalog in stored order
    pub fn list_all(&self) -> &[Property] {
        self.catalog.properties()
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Property> {
        self.catalog.properties().iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over title, city and kind label
    ///
    /// Containment is evaluated literally, so an empty `text` matches every
    /// record.
    pub fn search(&self, text: &str) -> Vec<&Property> {
        let needle = text.to_lowercase();
        let results: Vec<&Property> = self
            .catalog
            .properties()
            .iter()
            .filter(|p| matches_text(p, &needle))
            .collect();

        tracing::debug!(query = %text, matches = results.len(), "Search evaluated");
        results
    }

    /// Properties satisfying every present criterion
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Property> {
        let results: Vec<&Property> = self
            .catalog
            .properties()
            .iter()
            .filter(|p| criteria.matches(p))
            .collect();

        tracing::debug!(criteria = ?criteria, matches = results.len(), "Filter evaluated");
        results
    }

    /// Text search and structured filter applied together
    ///
    /// Blank `text` (empty or whitespace only) skips the text predicate.
    pub fn query(&self, text: Option<&str>, criteria: &FilterCriteria) -> Vec<&Property> {
        let needle = text
            .filter(|t| !t.trim().is_empty())
            .map(str::to_lowercase);

        self.catalog
            .properties()
            .iter()
            .filter(|p| needle.as_deref().map_or(true, |n| matches_text(p, n)))
            .filter(|p| criteria.matches(p))
            .collect()
    }

    /// Distinct cities, sorted
    pub fn cities(&self) -> Vec<&str> {
        self.catalog
            .properties()
            .iter()
            .map(|p| p.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn matches_text(property: &Property, needle: &str) -> bool {
    property.title.to_lowercase().contains(needle)
        || property.city.to_lowercase().contains(needle)
        || property.kind.label().to_lowercase().contains(needle)
}
