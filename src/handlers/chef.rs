use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::models::{CreateDishRequest, MenuItem};

use super::{service_error_to_response, MenuHandlerState};

/// Add a new dish to the menu
#[instrument(skip(state, request))]
pub async fn create_dish(
    State(state): State<MenuHandlerState>,
    Json(request): Json<CreateDishRequest>,
) -> Result<(StatusCode, Json<MenuItem>), (StatusCode, Json<Value>)> {
    info!("Creating new dish: {}", request.name);

    match state.menu_service.add_dish(request).await {
        Ok(dish) => {
            info!("Successfully created dish with ID: {}", dish.id);
            Ok((StatusCode::CREATED, Json(dish)))
        }
        Err(err) => {
            error!("Failed to create dish: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Remove a dish from the menu. Removing an unknown ID still succeeds.
#[instrument(skip(state))]
pub async fn remove_dish(
    State(state): State<MenuHandlerState>,
    Path(dish_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    info!("Removing dish with ID: {}", dish_id);

    match state.menu_service.remove_dish(&dish_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            error!("Failed to remove dish {}: {}", dish_id, err);
            Err(service_error_to_response(err))
        }
    }
}
