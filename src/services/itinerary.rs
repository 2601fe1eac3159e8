use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{DestinationId, Itinerary, ItineraryEntry, ItinerarySummary},
    services::catalog::DestinationCatalog,
};

/// Session-scoped itineraries held in memory
///
/// Itineraries live until they are deleted or the process exits.
#[derive(Clone, Default)]
pub struct ItineraryStore {
    inner: Arc<RwLock<HashMap<Uuid, Itinerary>>>,
}

impl ItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty itinerary with the user's caps
    pub async fn create(
        &self,
        max_days: u32,
        max_budget: Option<u64>,
    ) -> AppResult<ItinerarySummary> {
        let itinerary = Itinerary::new(max_days, max_budget)?;
        let summary = itinerary.summary();

        self.inner.write().await.insert(itinerary.id, itinerary);

        tracing::info!(
            itinerary_id = %summary.id,
            max_days,
            max_budget = ?max_budget,
            "Itinerary created"
        );

        Ok(summary)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ItinerarySummary> {
        let inner = self.inner.read().await;
        inner
            .get(&id)
            .map(Itinerary::summary)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.inner.write().await.remove(&id);
        match removed {
            Some(_) => {
                tracing::info!(itinerary_id = %id, "Itinerary deleted");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Adds a catalog destination to the itinerary
    ///
    /// Entries that push the itinerary past its caps are accepted; the returned
    /// summary reports the overflow.
    pub async fn add_entry(
        &self,
        catalog: &dyn DestinationCatalog,
        id: Uuid,
        destination_id: DestinationId,
        days: u32,
        spend: Option<u64>,
    ) -> AppResult<ItinerarySummary> {
        let destination = catalog
            .get(destination_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Destination {}", destination_id)))?;

        self.update(id, |itinerary| {
            itinerary.add_entry(ItineraryEntry::new(&destination, days, spend))
        })
        .await
    }

    pub async fn remove_entry(
        &self,
        id: Uuid,
        destination_id: DestinationId,
    ) -> AppResult<ItinerarySummary> {
        self.update(id, |itinerary| itinerary.remove_entry(destination_id).map(|_| ()))
            .await
    }

    pub async fn reorder(&self, id: Uuid, order: &[DestinationId]) -> AppResult<ItinerarySummary> {
        self.update(id, |itinerary| itinerary.reorder(order)).await
    }

    async fn update<F, E>(&self, id: Uuid, edit: F) -> AppResult<ItinerarySummary>
    where
        F: FnOnce(&mut Itinerary) -> Result<(), E>,
        AppError: From<E>,
    {
        let mut inner = self.inner.write().await;
        let itinerary = inner.get_mut(&id).ok_or_else(|| not_found(id))?;

        edit(itinerary)?;

        let summary = itinerary.summary();
        if !summary.within_days || !summary.within_budget {
            tracing::warn!(
                itinerary_id = %id,
                total_days = summary.total_days,
                max_days = summary.max_days,
                total_spend = summary.total_spend,
                max_budget = ?summary.max_budget,
                "Itinerary exceeds its caps"
            );
        }

        Ok(summary)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Itinerary {}", id))
}
