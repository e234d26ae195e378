//! Fire-and-forget delivery of the serialized roster.

use reqwest::Client;
use tracing::instrument;

use crate::config::SubmissionConfig;

/// Error type for submission attempts.
///
/// A failed submission never mutates the roster and is never retried
/// automatically; the caller decides what to do next.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("companion endpoint answered with status {0}")]
    Failed(u16),

    #[error("companion endpoint unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

/// POSTs an already-serialized roster to the companion `/data` endpoint.
///
/// The payload is a snapshot taken before this call starts, so roster edits
/// made while the request is in flight cannot leak into it.
#[instrument(skip(client, payload), fields(endpoint = %config.data_endpoint()))]
pub async fn submit(
    client: &Client,
    config: &SubmissionConfig,
    payload: String,
) -> Result<(), SubmissionError> {
    let response = client
        .post(config.data_endpoint())
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmissionError::Failed(status.as_u16()));
    }
    Ok(())
}
