pub mod chef;
pub mod health;
pub mod menu;

pub use chef::*;
pub use health::*;
pub use menu::*;

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use serde_json::{json, Value};

use crate::models::ServiceError;

/// Build the API router over the shared handler state
pub fn api_router(state: MenuHandlerState) -> Router {
    Router::new()
        .route("/health/status", get(health_check))
        .route("/api/menu", get(list_menu))
        .route("/api/menu/sections", get(menu_sections))
        .route("/api/menu/filter", get(filter_menu))
        .route("/api/menu/average/:course", get(course_average))
        .route("/api/chef/dishes", post(create_dish))
        .route("/api/chef/dishes/:dish_id", delete(remove_dish))
        .with_state(state)
}

/// Convert ServiceError to HTTP response
pub(crate) fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let (status, error, message) = match &err {
        ServiceError::ValidationError { message } => (
            StatusCode::BAD_REQUEST,
            "Please fill out all required fields".to_string(),
            message.clone(),
        ),
        ServiceError::Repository { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
            err.to_string(),
        ),
    };

    (
        status,
        Json(json!({
            "error": error,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
