use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Category of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    House,
    Apartment,
}

impl PropertyKind {
    /// Human-readable label, also the text matched by free-text search
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKind::House => "House",
            PropertyKind::Apartment => "Apartment",
        }
    }
}

impl Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PropertyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "house" => Ok(PropertyKind::House),
            "apartment" => Ok(PropertyKind::Apartment),
            other => Err(format!("unknown property kind '{}'", other)),
        }
    }
}

/// A single real-estate listing in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    /// Unique identifier, stable for the lifetime of the loaded catalog
    pub id: u32,
    pub title: String,
    /// Exact-match facet used by filtering and similarity
    pub city: String,
    pub kind: PropertyKind,
    /// Asking price, currency-agnostic
    pub price: f64,
    pub rooms: u32,
    /// Floor area in square meters
    pub area: f64,
    /// Opaque image reference, never interpreted here
    pub image: String,
}

impl Property {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        city: impl Into<String>,
        kind: PropertyKind,
        price: f64,
        rooms: u32,
        area: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            city: city.into(),
            kind,
            price,
            rooms,
            area,
            image: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&PropertyKind::House).unwrap(),
            "\"house\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyKind::Apartment).unwrap(),
            "\"apartment\""
        );
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(PropertyKind::House.to_string(), "House");
        assert_eq!(PropertyKind::Apartment.label(), "Apartment");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("house".parse::<PropertyKind>(), Ok(PropertyKind::House));
        assert_eq!("Apartment".parse::<PropertyKind>(), Ok(PropertyKind::Apartment));
        assert!("castle".parse::<PropertyKind>().is_err());
    }

    #[test]
    fn test_property_deserialization() {
        let json = r#"{
            "id": 7,
            "title": "Bright loft near the park",
            "city": "Rosario",
            "kind": "apartment",
            "price": 98000,
            "rooms": 2,
            "area": 54.5,
            "image": "https://images.example.com/7.jpg"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, 7);
        assert_eq!(property.city, "Rosario");
        assert_eq!(property.kind, PropertyKind::Apartment);
        assert_eq!(property.price, 98000.0);
        assert_eq!(property.rooms, 2);
        assert_eq!(property.area, 54.5);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{
            "id": 1, "title": "Barn", "city": "X", "kind": "barn",
            "price": 1, "rooms": 1, "area": 1, "image": ""
        }"#;
        assert!(serde_json::from_str::<Property>(json).is_err());
    }
}
