//! Writes encoder output to disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::instrument;

use rosterforge_export::{ExportFormat, encode};
use rosterforge_models::Roster;

use crate::utils::errors::AppError;

/// Rejects file names that would escape the export directory.
///
/// The name is derived from the class name, which is user input.
fn validate_file_name(name: &str) -> Result<(), AppError> {
    if name.starts_with('.') || name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "class name cannot be used as a file name: {name}"
        )));
    }
    Ok(())
}

/// Encodes the snapshot and writes it as `{className}.{ext}` under `dir`.
///
/// Returns the path of the written file.
#[instrument(skip(roster))]
pub async fn save_export(
    dir: &Path,
    roster: &Roster,
    format: ExportFormat,
) -> Result<PathBuf, AppError> {
    if roster.class_name.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "roster has no class name yet; add a group first"
        )));
    }

    let file_name = format.file_name(roster);
    validate_file_name(&file_name)?;

    let content = encode(roster, format)?;

    fs::create_dir_all(dir)
        .await
        .context("Failed to create export directory")
        .map_err(AppError::internal)?;

    let path = dir.join(&file_name);
    fs::write(&path, content)
        .await
        .context("Failed to write export file")
        .map_err(AppError::internal)?;

    Ok(path)
}
