use std::sync::Arc;

use crate::config::Config;
use crate::services::{DestinationCatalog, InMemoryCatalog, ItineraryStore, Scorer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn DestinationCatalog>,
    pub scorer: Scorer,
    pub itineraries: ItineraryStore,
    /// Recommendations returned when the request sets no limit
    pub recommendation_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::builtin()),
            Config::default().recommendation_limit,
        )
    }
}

impl AppState {
    /// Creates state over a catalog with no itineraries
    pub fn new(catalog: Arc<dyn DestinationCatalog>, recommendation_limit: usize) -> Self {
        Self {
            catalog,
            scorer: Scorer::default(),
            itineraries: ItineraryStore::new(),
            recommendation_limit,
        }
    }
}
