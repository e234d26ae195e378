//! Student request DTOs.
//!
//! `CreateStudentDto` carries no derive-level validation on purpose: the
//! controller checks its fields in a fixed order (password length, username
//! length, email format, email reuse) so callers see a stable first error.

use serde::Deserialize;
use utoipa::ToSchema;

/// DTO for adding a student to a group.
///
/// The password itself is never supplied; only its requested length. The
/// controller generates the credential at creation time.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub password_length: u32,
}

/// DTO for editing a student in place.
///
/// All three fields are required and overwrite the stored values directly.
/// The password is untouched by edits.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
}
