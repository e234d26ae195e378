use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use rosterforge_export::{ExportFormat, encode};

use crate::modules::exports::service;
use crate::modules::roster::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedExportResponse {
    pub file_name: String,
    pub path: String,
}

#[utoipa::path(
    get,
    path = "/api/exports/{format}",
    params(("format" = ExportFormat, Path, description = "Export format")),
    responses(
        (status = 200, description = "Encoded roster snapshot", body = String)
    ),
    tag = "Exports"
)]
#[instrument(skip(state))]
pub async fn get_export(
    State(state): State<AppState>,
    Path(format): Path<ExportFormat>,
) -> Result<Response, AppError> {
    let snapshot = {
        let controller = state.controller.read().await;
        controller.snapshot()
    };
    let content = encode(&snapshot, format)?;
    Ok(([(header::CONTENT_TYPE, format.mime_type())], content).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exports/{format}",
    params(("format" = ExportFormat, Path, description = "Export format")),
    responses(
        (status = 200, description = "Export written to disk", body = SavedExportResponse),
        (status = 400, description = "Roster not exportable yet", body = ErrorResponse)
    ),
    tag = "Exports"
)]
#[instrument(skip(state))]
pub async fn save_export(
    State(state): State<AppState>,
    Path(format): Path<ExportFormat>,
) -> Result<Json<SavedExportResponse>, AppError> {
    let snapshot = {
        let controller = state.controller.read().await;
        controller.snapshot()
    };

    let path = service::save_export(&state.export_config.output_dir, &snapshot, format).await?;
    Ok(Json(SavedExportResponse {
        file_name: format.file_name(&snapshot),
        path: path.display().to_string(),
    }))
}
