use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Preference, ScoredDestination},
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
    Json(preference): Json<Preference>,
) -> AppResult<Json<Vec<ScoredDestination>>> {
    let limit = query.limit.unwrap_or(state.recommendation_limit);

    tracing::info!(
        request_id = %request_id,
        budget = ?preference.budget,
        destination_type = ?preference.kind,
        season = ?preference.season,
        interest_count = preference.interests.len(),
        limit,
        "Processing recommendation request"
    );

    let recommendations = recommendations::get_recommendations(
        state.catalog.as_ref(),
        &state.scorer,
        &preference,
        limit,
    )
    .await?;

    Ok(Json(recommendations))
}
