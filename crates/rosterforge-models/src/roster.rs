//! Roster interchange types.
//!
//! A [`Roster`] holds one class: its name and an ordered list of groups, each
//! with an ordered list of students. These structs serialize directly into the
//! structured-data export form, so field names (camelCase) and declaration
//! order are part of the wire contract and must not be reordered.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student entry with generated credentials.
///
/// The `password` field holds the clear-text initial credential generated at
/// creation time; it is never regenerated by an edit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub full_name: String,
    pub user_name: String,
    pub password: String,
    pub email: String,
}

/// A named group of students.
///
/// Group names have the shape `{className}-{label}-{number}` and are unique
/// within a roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub students: Vec<Student>,
}

/// One class's groups and students.
///
/// `class_name` is fixed by the first group added; an empty string means the
/// roster has not been named yet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub class_name: String,
    pub groups: Vec<Group>,
}

impl Roster {
    /// An unnamed roster with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    /// Every student across all groups, in roster order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.groups.iter().flat_map(|g| g.students.iter())
    }

    pub fn student_count(&self) -> usize {
        self.groups.iter().map(|g| g.students.len()).sum()
    }

    pub fn user_name_in_use(&self, user_name: &str) -> bool {
        self.students().any(|s| s.user_name == user_name)
    }

    pub fn email_in_use(&self, email: &str) -> bool {
        self.students().any(|s| s.email == email)
    }
}
