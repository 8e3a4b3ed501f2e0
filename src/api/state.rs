use std::sync::Arc;

use crate::{
    catalog::Catalog,
    config::Config,
    services::{QueryEngine, Recommender},
};

/// Shared application state
///
/// The catalog never changes after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub queries: QueryEngine,
    pub recommender: Recommender,
    pub config: Config,
}

impl AppState {
    /// Builds the query engine and recommender over one shared catalog
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                queries: QueryEngine::new(catalog.clone()),
                recommender: Recommender::new(catalog),
                config,
            }),
        }
    }
}
