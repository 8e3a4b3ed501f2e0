use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::{error::CatalogError, models::Property};

/// Listings shipped with the binary, used when no catalog file is configured
const BUNDLED_CATALOG: &str = include_str!("../../data/properties.json");

/// The immutable, ordered set of listings
///
/// Cloning is cheap and shares the same records. Nothing hands out mutable
/// access after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Arc<[Property]>,
}

impl Catalog {
    /// Builds a catalog, rejecting it if any record breaks an invariant
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        validate(&properties)?;
        Ok(Self {
            properties: properties.into(),
        })
    }

    /// Parses a JSON array of property records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(json)?;
        Self::new(properties)
    }

    /// Reads the catalog from `path`, or the bundled dataset when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                Self::from_json(&contents)?
            }
            None => Self::bundled()?,
        };

        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string());
        tracing::info!(
            source = %source,
            properties = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All listings in stored order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

fn validate(properties: &[Property]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(properties.len());

    for property in properties {
        if !seen.insert(property.id) {
            return Err(CatalogError::DuplicateId(property.id));
        }
        if !(property.price.is_finite() && property.price > 0.0) {
            return Err(invalid(property.id, "price", property.price));
        }
        if !(property.area.is_finite() && property.area > 0.0) {
            return Err(invalid(property.id, "area", property.area));
        }
        if property.title.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                id: property.id,
                field: "title",
                reason: "must not be blank".to_string(),
            });
        }
        if property.city.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                id: property.id,
                field: "city",
                reason: "must not be blank".to_string(),
            });
        }
    }

    Ok(())
}

fn invalid(id: u32, field: &'static str, value: f64) -> CatalogError {
    CatalogError::InvalidField {
        id,
        field,
        reason: format!("{} is not a positive number", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyKind;

    fn property(id: u32) -> Property {
        Property::new(
            id,
            "Loft",
            "Salta",
            PropertyKind::Apartment,
            80_000.0,
            2,
            60.0,
        )
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 100);
        assert_eq!(catalog.properties()[0].id, 1);
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(vec![property(3), property(1), property(2)]).unwrap();
        let ids: Vec<u32> = catalog.properties().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![property(1), property(2), property(1)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut bad = property(4);
        bad.price = 0.0;
        let result = Catalog::new(vec![bad]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidField { id: 4, field: "price", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_area() {
        let mut bad = property(5);
        bad.area = f64::NAN;
        let result = Catalog::new(vec![bad]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidField { id: 5, field: "area", .. })
        ));
    }

    #[test]
    fn test_rejects_blank_city() {
        let mut bad = property(6);
        bad.city = "  ".to_string();
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let json = r#"[{"id": 1, "title": "No city", "kind": "house"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Some(Path::new("/nonexistent/catalog.json")));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
