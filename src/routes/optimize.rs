use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::DestinationId,
    routes::AppState,
    services::{planner, TripPlan},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default, alias = "destination_ids")]
    pub destination_ids: Vec<DestinationId>,
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub budget: Option<u64>,
}

/// Handler for itinerary optimization endpoint
pub async fn optimize(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<OptimizeRequest>,
) -> AppResult<Json<TripPlan>> {
    tracing::info!(
        request_id = %request_id,
        destination_count = request.destination_ids.len(),
        days = request.days,
        budget = ?request.budget,
        "Processing optimization request"
    );

    let plan = planner::plan_trip(
        state.catalog.as_ref(),
        &request.destination_ids,
        request.days,
        request.budget,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        "Optimization completed"
    );

    Ok(Json(plan))
}
