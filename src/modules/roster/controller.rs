use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use rosterforge_models::Roster;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Error payload shape shared by every endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SelectionDto {
    /// Group to select, or `null` to clear the selection.
    pub group: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SelectionResponse {
    pub selected: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/roster",
    responses(
        (status = 200, description = "Current roster snapshot", body = Roster)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn get_roster(State(state): State<AppState>) -> Json<Roster> {
    let controller = state.controller.read().await;
    Json(controller.snapshot())
}

#[utoipa::path(
    delete,
    path = "/api/roster",
    responses(
        (status = 204, description = "Roster reset to empty")
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn clear_roster(State(state): State<AppState>) -> StatusCode {
    let mut controller = state.controller.write().await;
    controller.clear();
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/api/selection",
    responses(
        (status = 200, description = "Currently selected group", body = SelectionResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state))]
pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let controller = state.controller.read().await;
    Json(SelectionResponse {
        selected: controller.selection().map(str::to_string),
    })
}

#[utoipa::path(
    put,
    path = "/api/selection",
    request_body = SelectionDto,
    responses(
        (status = 200, description = "Selection updated", body = SelectionResponse),
        (status = 404, description = "No such group", body = ErrorResponse)
    ),
    tag = "Roster"
)]
#[instrument(skip(state, dto))]
pub async fn set_selection(
    State(state): State<AppState>,
    Json(dto): Json<SelectionDto>,
) -> Result<Json<SelectionResponse>, AppError> {
    let mut controller = state.controller.write().await;
    controller.select(dto.group)?;
    Ok(Json(SelectionResponse {
        selected: controller.selection().map(str::to_string),
    }))
}
