use axum::{
    http::StatusCode,
    middleware,
    response::Html,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

pub mod destinations;
pub mod itineraries;
pub mod optimize;
pub mod recommendations;
mod state;

pub use state::AppState;

/// Page collecting preferences and rendering recommendation and itinerary views
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(cors),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(destinations::list))
        .route("/destinations/:id", get(destinations::get))
        .route("/recommend", post(recommendations::recommend))
        .route("/optimize", post(optimize::optimize))
        .route("/itineraries", post(itineraries::create))
        .route(
            "/itineraries/:id",
            get(itineraries::get).delete(itineraries::delete),
        )
        .route("/itineraries/:id/entries", post(itineraries::add_entry))
        .route(
            "/itineraries/:id/entries/:destination_id",
            axum::routing::delete(itineraries::remove_entry),
        )
        .route("/itineraries/:id/order", put(itineraries::reorder))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
