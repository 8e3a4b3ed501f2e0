use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{FilterCriteria, Page, Property, PropertyKind, Recommendation},
};

use super::AppState;

// Request types

/// Query string of the listing endpoint
///
/// Fields arrive as raw strings so that empty values (as sent by an untouched
/// form field) are treated as absent, and malformed ones are reported as
/// `InvalidInput`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub city: Option<String>,
    pub kind: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rooms: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListingQuery {
    fn criteria(&self) -> AppResult<FilterCriteria> {
        let kind = non_empty(&self.kind)
            .map(str::parse::<PropertyKind>)
            .transpose()
            .map_err(AppError::InvalidInput)?;

        Ok(FilterCriteria {
            city: non_empty(&self.city).map(str::to_string),
            kind,
            min_price: parse_price("min_price", &self.min_price)?,
            max_price: parse_price("max_price", &self.max_price)?,
            min_rooms: parse_field("min_rooms", &self.min_rooms)?,
        })
    }

    fn page(&self) -> AppResult<Option<usize>> {
        parse_field("page", &self.page)
    }

    fn per_page(&self) -> AppResult<Option<usize>> {
        parse_field("per_page", &self.per_page)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_field<T: FromStr>(name: &str, value: &Option<String>) -> AppResult<Option<T>> {
    non_empty(value)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                AppError::InvalidInput(format!("{} has invalid value '{}'", name, raw))
            })
        })
        .transpose()
}

/// Parses a price bound; NaN and infinities are rejected
fn parse_price(name: &str, value: &Option<String>) -> AppResult<Option<f64>> {
    match parse_field::<f64>(name, value)? {
        Some(price) if !price.is_finite() => Err(AppError::InvalidInput(format!(
            "{} must be a finite number",
            name
        ))),
        price => Ok(price),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Search, filter and paginate the catalog
pub async fn list_properties(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ListingQuery>,
) -> AppResult<Json<Page<Property>>> {
    let config = &state.inner.config;
    let per_page = params.per_page()?.unwrap_or(config.page_size);
    if per_page == 0 || per_page > config.max_page_size {
        return Err(AppError::InvalidInput(format!(
            "per_page must be between 1 and {}",
            config.max_page_size
        )));
    }

    let criteria = params.criteria()?;
    let matches: Vec<Property> = state
        .inner
        .queries
        .query(params.q.as_deref(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    let page = Page::paginate(matches, params.page()?.unwrap_or(1), per_page);

    tracing::info!(
        request_id = %request_id,
        query = ?params.q,
        matches = page.total_items,
        page = page.page,
        "Listings queried"
    );

    Ok(Json(page))
}

/// Get a single property
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Property>> {
    state
        .inner
        .queries
        .get_by_id(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Property {} does not exist", id)))
}

/// Properties similar to the given one
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<u32>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let reference = state
        .inner
        .queries
        .get_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Property {} does not exist", id)))?;

    let limit = params.limit.unwrap_or(state.inner.config.recommendation_limit);
    let recommendations = state.inner.recommender.recommend(reference, limit);

    tracing::info!(
        request_id = %request_id,
        property_id = id,
        limit,
        returned = recommendations.len(),
        "Recommendations computed"
    );

    Ok(Json(recommendations))
}

/// Distinct cities for the city facet
pub async fn get_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    let cities = state
        .inner
        .queries
        .cities()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(cities)
}
