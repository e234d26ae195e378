//! Group request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// DTO for adding a group to the roster.
///
/// The first group added fixes the roster's class name; later groups must
/// repeat it. When `number` is omitted the controller assigns the next value
/// of its per-roster counter.
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    #[validate(length(min = 1, max = 100))]
    pub class_name: String,
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    pub number: Option<u32>,
}

/// DTO for renaming an existing group.
///
/// An empty or unchanged name makes the rename a no-op rather than an error.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameGroupDto {
    pub name: String,
}
