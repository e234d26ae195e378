use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use validator::Validate;

use rosterforge_models::Group;

use crate::modules::groups::model::{CreateGroupDto, RenameGroupDto};
use crate::modules::roster::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Group created and selected", body = Group),
        (status = 409, description = "Class name conflict", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, dto))]
pub async fn create_group(
    State(state): State<AppState>,
    Json(dto): Json<CreateGroupDto>,
) -> Result<Json<Group>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let mut controller = state.controller.write().await;
    let group = controller.add_group(dto)?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "All groups in roster order", body = [Group])
    ),
    tag = "Groups"
)]
#[instrument(skip(state))]
pub async fn get_groups(State(state): State<AppState>) -> Json<Vec<Group>> {
    let controller = state.controller.read().await;
    Json(controller.roster().groups.clone())
}

#[utoipa::path(
    put,
    path = "/api/groups/{name}",
    params(("name" = String, Path, description = "Current group name")),
    request_body = RenameGroupDto,
    responses(
        (status = 204, description = "Group renamed (or no-op)"),
        (status = 404, description = "No such group", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, dto))]
pub async fn rename_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(dto): Json<RenameGroupDto>,
) -> Result<StatusCode, AppError> {
    let mut controller = state.controller.write().await;
    controller.rename_group(&name, &dto.name)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/groups/{name}",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 204, description = "Group and its students removed")
    ),
    tag = "Groups"
)]
#[instrument(skip(state))]
pub async fn delete_group(State(state): State<AppState>, Path(name): Path<String>) -> StatusCode {
    let mut controller = state.controller.write().await;
    controller.delete_group(&name);
    StatusCode::NO_CONTENT
}
