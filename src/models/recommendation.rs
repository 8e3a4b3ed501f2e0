use serde::{Serialize, Serializer};

use super::Property;

/// A satisfied similarity condition between two properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityReason {
    SameCity,
    SameKind,
    SimilarPrice,
    SameRoomCount,
}

impl SimilarityReason {
    pub fn label(&self) -> &'static str {
        match self {
            SimilarityReason::SameCity => "Same city",
            SimilarityReason::SameKind => "Same kind",
            SimilarityReason::SimilarPrice => "Similar price",
            SimilarityReason::SameRoomCount => "Same room count",
        }
    }
}

impl std::fmt::Display for SimilarityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Reasons go over the wire as their display label.
impl Serialize for SimilarityReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A ranked, explained match for a reference property
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub property: Property,
    /// Normalized similarity in [0, 1]
    pub score: f64,
    /// Satisfied conditions, always ordered city, kind, price, rooms
    pub reasons: Vec<SimilarityReason>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyKind;

    #[test]
    fn test_reason_serializes_as_label() {
        let json = serde_json::to_string(&SimilarityReason::SameRoomCount).unwrap();
        assert_eq!(json, "\"Same room count\"");
    }

    #[test]
    fn test_recommendation_serialization() {
        let recommendation = Recommendation {
            property: Property::new(2, "Chalet", "Mendoza", PropertyKind::House, 1.0, 3, 90.0),
            score: 0.7,
            reasons: vec![SimilarityReason::SameCity, SimilarityReason::SameKind],
        };

        let value = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(value["property"]["id"], 2);
        assert_eq!(value["score"], 0.7);
        assert_eq!(value["reasons"][0], "Same city");
        assert_eq!(value["reasons"][1], "Same kind");
    }
}
