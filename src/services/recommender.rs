use std::cmp::Ordering;

use crate::{
    catalog::Catalog,
    models::{Property, Recommendation, SimilarityReason},
};

/// Number of recommendations returned when the caller does not ask for more
pub const DEFAULT_LIMIT: usize = 2;

/// Candidates must score strictly above this to be recommended
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Largest relative price difference still counted as "similar"
const PRICE_TOLERANCE: f64 = 0.2;

/// Largest room-count difference still counted as "similar"
const ROOM_TOLERANCE: u32 = 1;

/// Scores within this distance of the threshold do not clear it. The default
/// weights sum to one ulp below 1.0.
const SCORE_EPSILON: f64 = 1e-9;

/// Relative weight of each similarity factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityWeights {
    pub city: f64,
    pub kind: f64,
    pub price: f64,
    pub rooms: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            city: 0.4,
            kind: 0.3,
            price: 0.2,
            rooms: 0.1,
        }
    }
}

impl SimilarityWeights {
    pub fn total(&self) -> f64 {
        self.city + self.kind + self.price + self.rooms
    }
}

/// Which similarity conditions hold between two properties
#[derive(Debug, Clone, Copy)]
struct Comparison {
    same_city: bool,
    same_kind: bool,
    /// `|p1 - p2| / max(p1, p2)`
    price_diff: f64,
    room_diff: u32,
}

impl Comparison {
    fn between(a: &Property, b: &Property) -> Self {
        Self {
            same_city: a.city == b.city,
            same_kind: a.kind == b.kind,
            price_diff: (a.price - b.price).abs() / a.price.max(b.price),
            room_diff: a.rooms.abs_diff(b.rooms),
        }
    }

    fn similar_price(&self) -> bool {
        self.price_diff <= PRICE_TOLERANCE
    }

    fn similar_rooms(&self) -> bool {
        self.room_diff <= ROOM_TOLERANCE
    }

    fn score(&self, weights: &SimilarityWeights) -> f64 {
        let mut score = 0.0;
        if self.same_city {
            score += weights.city;
        }
        if self.same_kind {
            score += weights.kind;
        }
        if self.similar_price() {
            score += weights.price * (1.0 - self.price_diff);
        }
        if self.similar_rooms() {
            score += weights.rooms * (1.0 - self.room_diff as f64);
        }

        let total = weights.total();
        if total > 0.0 {
            score / total
        } else {
            0.0
        }
    }

    fn reasons(&self) -> Vec<SimilarityReason> {
        let mut reasons = Vec::with_capacity(4);
        if self.same_city {
            reasons.push(SimilarityReason::SameCity);
        }
        if self.same_kind {
            reasons.push(SimilarityReason::SameKind);
        }
        if self.similar_price() {
            reasons.push(SimilarityReason::SimilarPrice);
        }
        if self.similar_rooms() {
            reasons.push(SimilarityReason::SameRoomCount);
        }
        reasons
    }
}

/// Ranks catalog entries by weighted similarity to a reference property
///
/// Eligible candidates are ordered by descending score. Equal scores keep
/// catalog order, so the ranking is a total order for a given catalog.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    weights: SimilarityWeights,
    min_score: f64,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            weights: SimilarityWeights::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    pub fn with_weights(mut self, weights: SimilarityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Normalized similarity of two properties, in [0, 1]
    pub fn similarity(&self, a: &Property, b: &Property) -> f64 {
        Comparison::between(a, b).score(&self.weights)
    }

    /// Labels for every similarity condition the pair satisfies
    pub fn reasons(&self, a: &Property, b: &Property) -> Vec<SimilarityReason> {
        Comparison::between(a, b).reasons()
    }

    /// Top [`DEFAULT_LIMIT`] properties most similar to `reference`
    pub fn recommend_default(&self, reference: &Property) -> Vec<Recommendation> {
        self.recommend(reference, DEFAULT_LIMIT)
    }

    /// Top `limit` properties most similar to `reference`
    ///
    /// The reference itself (matched by id) is never included. Returns fewer
    /// than `limit` items when fewer candidates clear the score threshold.
    pub fn recommend(&self, reference: &Property, limit: usize) -> Vec<Recommendation> {
        let mut ranked: Vec<(usize, f64, Comparison)> = self
            .catalog
            .properties()
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.id != reference.id)
            .map(|(index, candidate)| {
                let comparison = Comparison::between(reference, candidate);
                (index, comparison.score(&self.weights), comparison)
            })
            .filter(|(_, score, _)| *score - self.min_score > SCORE_EPSILON)
            .collect();

        let eligible = ranked.len();
        ranked.sort_by(|(ia, sa, _), (ib, sb, _)| {
            sb.partial_cmp(sa).unwrap_or(Ordering::Equal).then(ia.cmp(ib))
        });
        ranked.truncate(limit);

        tracing::debug!(
            property_id = reference.id,
            eligible,
            returned = ranked.len(),
            "Recommendations ranked"
        );

        let properties = self.catalog.properties();
        ranked
            .into_iter()
            .map(|(index, score, comparison)| Recommendation {
                property: properties[index].clone(),
                score,
                reasons: comparison.reasons(),
            })
            .collect()
    }
}
