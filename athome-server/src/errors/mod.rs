pub mod api;
pub mod hub;

pub use api::ApiError;
pub use hub::HubError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code and error message from the specific error type
        let (status, error_message, error_id) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            ApiError::Trigger(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            ApiError::DayMask(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            ApiError::Solar(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None),
            ApiError::Hub(e) => (e.status_code(), e.to_string(), None),
            ApiError::Internal(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
        };

        // Create a consistent JSON error response
        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        if let Some(error_id) = error_id {
            error_obj["error_id"] = json!(error_id);
        }

        let body = Json(json!({
            "error": error_obj
        }));

        (status, body).into_response()
    }
}
