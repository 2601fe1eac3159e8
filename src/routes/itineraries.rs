use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{DestinationId, ItinerarySummary},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateItineraryRequest {
    pub max_days: u32,
    pub max_budget: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub destination_id: DestinationId,
    pub days: u32,
    pub spend: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub destination_ids: Vec<DestinationId>,
}

/// Create a new itinerary with day and budget caps
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateItineraryRequest>,
) -> AppResult<(StatusCode, Json<ItinerarySummary>)> {
    tracing::debug!(request_id = %request_id, "Creating itinerary");

    let summary = state
        .itineraries
        .create(request.max_days, request.max_budget)
        .await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// Get an itinerary with its running totals
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ItinerarySummary>> {
    Ok(Json(state.itineraries.get(id).await?))
}

/// Discard an itinerary
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.itineraries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a destination to an itinerary
pub async fn add_entry(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddEntryRequest>,
) -> AppResult<Json<ItinerarySummary>> {
    tracing::info!(
        request_id = %request_id,
        itinerary_id = %id,
        destination_id = request.destination_id,
        days = request.days,
        "Adding itinerary entry"
    );

    let summary = state
        .itineraries
        .add_entry(
            state.catalog.as_ref(),
            id,
            request.destination_id,
            request.days,
            request.spend,
        )
        .await?;

    Ok(Json(summary))
}

/// Remove a destination from an itinerary
pub async fn remove_entry(
    State(state): State<AppState>,
    Path((id, destination_id)): Path<(Uuid, DestinationId)>,
) -> AppResult<Json<ItinerarySummary>> {
    Ok(Json(state.itineraries.remove_entry(id, destination_id).await?))
}

/// Change the visiting order of an itinerary
pub async fn reorder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReorderRequest>,
) -> AppResult<Json<ItinerarySummary>> {
    Ok(Json(
        state
            .itineraries
            .reorder(id, &request.destination_ids)
            .await?,
    ))
}
