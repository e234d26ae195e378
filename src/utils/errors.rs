use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use rosterforge_core::RosterError;
use rosterforge_export::ExportError;

use crate::modules::submission::service::SubmissionError;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        let status = match &err {
            RosterError::GroupNotFound(_) | RosterError::StudentNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            RosterError::ClassNameConflict { .. }
            | RosterError::DuplicateGroupName(_)
            | RosterError::EmailAlreadyUsed(_) => StatusCode::CONFLICT,
            RosterError::PasswordLengthOutOfRange(_)
            | RosterError::UsernameTooShort
            | RosterError::InvalidEmailFormat(_)
            | RosterError::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RosterError::EntropyUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err)
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::internal(err)
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, err)
    }
}
