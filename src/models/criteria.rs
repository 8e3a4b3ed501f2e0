use serde::{Deserialize, Serialize};

use super::{Property, PropertyKind};

/// Structured filter over the catalog
///
/// Every field is optional. A property passes only if it satisfies all
/// present criteria; absent criteria impose no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Exact city match
    pub city: Option<String>,
    pub kind: Option<PropertyKind>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Inclusive lower room bound
    pub min_rooms: Option<u32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn kind(mut self, kind: PropertyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn min_rooms(mut self, rooms: u32) -> Self {
        self.min_rooms = Some(rooms);
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks a property against every present criterion
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = &self.city {
            if &property.city != city {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if property.kind != kind {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_rooms {
            if property.rooms < min {
                return false;
            }
        }
        true
    }
}
