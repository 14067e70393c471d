use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::models::{
    AveragePriceResponse, Course, CourseSelection, FilterMenuResponse, MenuListResponse,
    MenuSectionsResponse,
};
use crate::services::MenuService;

use super::service_error_to_response;

/// Shared state for menu and chef handlers
#[derive(Clone)]
pub struct MenuHandlerState {
    pub menu_service: Arc<MenuService>,
}

/// Query parameters for the course filter view
#[derive(Debug, Deserialize)]
pub struct FilterMenuQuery {
    pub course: Option<String>,
}

/// List the full menu in insertion order
#[instrument(skip(state))]
pub async fn list_menu(
    State(state): State<MenuHandlerState>,
) -> Result<Json<MenuListResponse>, (StatusCode, Json<Value>)> {
    match state.menu_service.list_menu().await {
        Ok(response) => {
            info!("Listed {} dishes", response.total_count);
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to list menu: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// The grouped home display: every course in fixed order with its dishes
/// and average price
#[instrument(skip(state))]
pub async fn menu_sections(
    State(state): State<MenuHandlerState>,
) -> Result<Json<MenuSectionsResponse>, (StatusCode, Json<Value>)> {
    match state.menu_service.course_sections().await {
        Ok(response) => {
            info!("Built {} course sections", response.sections.len());
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to build course sections: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Filter the menu by course. No course parameter means no selection, which
/// yields an empty list and a prompt to choose a course.
#[instrument(skip(state))]
pub async fn filter_menu(
    State(state): State<MenuHandlerState>,
    Query(query): Query<FilterMenuQuery>,
) -> Result<Json<FilterMenuResponse>, (StatusCode, Json<Value>)> {
    let selection = match query.course {
        Some(raw) => match raw.parse::<Course>() {
            Ok(course) => CourseSelection::Selected(course),
            Err(err) => {
                error!("Invalid course parameter: {}", err);
                return Err(invalid_course_response(err));
            }
        },
        None => CourseSelection::Unselected,
    };

    match state.menu_service.filter_by_course(selection).await {
        Ok(response) => {
            info!("Filter matched {} dishes", response.total_count);
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to filter menu: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Average price over a single course
#[instrument(skip(state))]
pub async fn course_average(
    State(state): State<MenuHandlerState>,
    Path(course): Path<String>,
) -> Result<Json<AveragePriceResponse>, (StatusCode, Json<Value>)> {
    let course = match course.parse::<Course>() {
        Ok(course) => course,
        Err(err) => {
            error!("Invalid course parameter: {}", err);
            return Err(invalid_course_response(err));
        }
    };

    match state.menu_service.average_price(course).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("Failed to compute average price: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

fn invalid_course_response(err: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Invalid course",
            "message": err,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
