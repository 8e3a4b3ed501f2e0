pub mod query;
pub mod recommender;

pub use query::QueryEngine;
pub use recommender::{Recommender, SimilarityWeights, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
