use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Destination, DestinationId},
    routes::AppState,
};

/// Handler listing the whole destination catalog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Destination>>> {
    let destinations = state.catalog.list().await?;
    Ok(Json(destinations))
}

/// Handler returning a single destination
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DestinationId>,
) -> AppResult<Json<Destination>> {
    state
        .catalog
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Destination {}", id)))
}
