use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::ItineraryError;
use crate::services::planner::PlanError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Catalog(_) => {
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownDestinations(_) => AppError::NotFound(err.to_string()),
            PlanError::NoDestinations | PlanError::NoDays | PlanError::TooFewDays { .. } => {
                AppError::InvalidInput(err.to_string())
            }
        }
    }
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::EntryNotFound(_) => AppError::NotFound(err.to_string()),
            ItineraryError::DuplicateEntry(_) => AppError::Conflict(err.to_string()),
            ItineraryError::NoDays | ItineraryError::InvalidOrder => {
                AppError::InvalidInput(err.to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::Catalog("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_plan_error_mapping() {
        assert!(matches!(
            AppError::from(PlanError::NoDestinations),
            AppError::InvalidInput(_)
        ));
        assert!(matches!(
            AppError::from(PlanError::UnknownDestinations(vec![42])),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn test_itinerary_error_mapping() {
        assert!(matches!(
            AppError::from(ItineraryError::DuplicateEntry(1)),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(ItineraryError::EntryNotFound(1)),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(ItineraryError::InvalidOrder),
            AppError::InvalidInput(_)
        ));
    }
}
