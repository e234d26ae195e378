use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use rosterforge_export::{ExportFormat, encode};

use crate::modules::roster::controller::ErrorResponse;
use crate::modules::submission::service;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Serialize, ToSchema)]
pub struct SubmissionResponse {
    pub delivered: bool,
}

#[utoipa::path(
    post,
    path = "/api/submission",
    responses(
        (status = 200, description = "Roster delivered to the companion service", body = SubmissionResponse),
        (status = 400, description = "Roster not submittable yet", body = ErrorResponse),
        (status = 502, description = "Companion service failed or unreachable", body = ErrorResponse)
    ),
    tag = "Submission"
)]
#[instrument(skip(state))]
pub async fn submit_roster(
    State(state): State<AppState>,
) -> Result<Json<SubmissionResponse>, AppError> {
    // Serialize under the read lock, then release it; the roster can keep
    // changing while the request is in flight without affecting the payload.
    let payload = {
        let controller = state.controller.read().await;
        if controller.roster().class_name.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "roster has no class name yet; add a group first"
            )));
        }
        encode(controller.roster(), ExportFormat::Json)?
    };

    service::submit(&state.http, &state.submission_config, payload).await?;
    Ok(Json(SubmissionResponse { delivered: true }))
}
