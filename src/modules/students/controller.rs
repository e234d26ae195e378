use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use rosterforge_models::Student;

use crate::modules::roster::controller::ErrorResponse;
use crate::modules::students::model::{CreateStudentDto, UpdateStudentDto};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    post,
    path = "/api/groups/{name}/students",
    params(("name" = String, Path, description = "Target group name")),
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student created with generated credential", body = Student),
        (status = 404, description = "No such group", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let mut controller = state.controller.write().await;
    let student = controller.add_student(&name, dto)?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/groups/{name}/students/{username}",
    params(
        ("name" = String, Path, description = "Group name"),
        ("username" = String, Path, description = "Current username")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student overwritten in place", body = Student),
        (status = 404, description = "No such group or student", body = ErrorResponse),
        (status = 422, description = "A field was empty", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path((name, username)): Path<(String, String)>,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let mut controller = state.controller.write().await;
    let student = controller.edit_student(&name, &username, dto)?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{name}/students/{username}",
    params(
        ("name" = String, Path, description = "Group name"),
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 204, description = "Student removed")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path((name, username)): Path<(String, String)>,
) -> StatusCode {
    let mut controller = state.controller.write().await;
    controller.delete_student(&name, &username);
    StatusCode::NO_CONTENT
}
