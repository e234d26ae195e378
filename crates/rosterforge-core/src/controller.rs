//! The stateful orchestrator that owns the live roster.
//!
//! A [`RosterController`] holds exactly one [`Roster`], a selection cursor
//! pointing at the group new students land in by default, and the per-roster
//! counter used for auto-numbered groups. All operations run to completion
//! synchronously; callers needing shared access wrap the controller in their
//! own lock.

use tracing::instrument;
use validator::ValidateEmail;

use rosterforge_models::{
    CreateGroupDto, CreateStudentDto, Group, Roster, Student, UpdateStudentDto,
};

use crate::credentials::{self, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::errors::RosterError;
use crate::resolver;

/// Owns one roster and the session-local state around it.
#[derive(Debug)]
pub struct RosterController {
    roster: Roster,
    selected: Option<String>,
    next_group_number: u32,
}

impl Default for RosterController {
    fn default() -> Self {
        Self {
            roster: Roster::new(),
            selected: None,
            next_group_number: 1,
        }
    }
}

impl RosterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the live roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// A point-in-time copy for encoders and submission payloads.
    pub fn snapshot(&self) -> Roster {
        self.roster.clone()
    }

    /// The currently selected group name, if any.
    ///
    /// The cursor is session state, not part of the roster itself; it never
    /// appears in any export.
    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Moves the selection cursor, or clears it with `None`.
    pub fn select(&mut self, group: Option<String>) -> Result<(), RosterError> {
        match group {
            Some(name) => {
                if !self.roster.has_group(&name) {
                    return Err(RosterError::GroupNotFound(name));
                }
                self.selected = Some(name);
            }
            None => self.selected = None,
        }
        Ok(())
    }

    /// Adds a group and selects it.
    ///
    /// The first group fixes the roster's class name; a later group under a
    /// different class name is rejected with
    /// [`RosterError::ClassNameConflict`], never merged. The group's number is
    /// taken from the DTO or from the auto-counter, which advances once per
    /// auto-numbered group regardless of collisions. The final name comes out
    /// of [`resolver::resolve_group_name`] and may carry a different suffix
    /// than requested.
    #[instrument(skip(self, dto), fields(label = %dto.label))]
    pub fn add_group(&mut self, dto: CreateGroupDto) -> Result<Group, RosterError> {
        let class_name = dto.class_name.trim().to_string();
        let label = dto.label.trim().to_string();
        if class_name.is_empty() {
            return Err(RosterError::EmptyField("class name"));
        }
        if label.is_empty() {
            return Err(RosterError::EmptyField("group label"));
        }

        if !self.roster.class_name.is_empty() && self.roster.class_name != class_name {
            return Err(RosterError::ClassNameConflict {
                current: self.roster.class_name.clone(),
            });
        }

        let number = match dto.number {
            Some(n) => n,
            None => {
                let n = self.next_group_number;
                self.next_group_number += 1;
                n
            }
        };

        let name = resolver::resolve_group_name(&self.roster, &class_name, &label, number);
        let group = Group {
            name,
            students: vec![],
        };

        self.roster.class_name = class_name;
        self.roster.groups.push(group.clone());
        self.selected = Some(group.name.clone());
        Ok(group)
    }

    /// Renames a group in place.
    ///
    /// An empty or unchanged new name is a no-op. A name already carried by
    /// another group fails with [`RosterError::DuplicateGroupName`]. The
    /// selection cursor follows a rename of the selected group.
    #[instrument(skip(self))]
    pub fn rename_group(&mut self, name: &str, new_name: &str) -> Result<(), RosterError> {
        let new_name = new_name.trim();
        if !self.roster.has_group(name) {
            return Err(RosterError::GroupNotFound(name.to_string()));
        }
        if new_name.is_empty() || new_name == name {
            return Ok(());
        }
        if self.roster.has_group(new_name) {
            return Err(RosterError::DuplicateGroupName(new_name.to_string()));
        }

        if let Some(group) = self.roster.group_mut(name) {
            group.name = new_name.to_string();
        }
        if self.selected.as_deref() == Some(name) {
            self.selected = Some(new_name.to_string());
        }
        Ok(())
    }

    /// Removes a group and all of its students.
    ///
    /// Idempotent: deleting an absent group is a no-op. A selection pointing
    /// at the deleted group is cleared rather than left dangling.
    #[instrument(skip(self))]
    pub fn delete_group(&mut self, name: &str) {
        self.roster.groups.retain(|g| g.name != name);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
    }

    /// Adds a student to a group, generating their initial credential.
    ///
    /// Validations run in a fixed order and stop at the first failure:
    /// password length within [8, 128], username at least 3 characters, email
    /// well-formed, email unused. The username is then resolved through the
    /// suffix search (which cannot fail) and the password is generated. The
    /// roster is untouched when any step fails.
    #[instrument(skip(self, dto), fields(group = %group_name))]
    pub fn add_student(
        &mut self,
        group_name: &str,
        dto: CreateStudentDto,
    ) -> Result<Student, RosterError> {
        if !self.roster.has_group(group_name) {
            return Err(RosterError::GroupNotFound(group_name.to_string()));
        }

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&dto.password_length) {
            return Err(RosterError::PasswordLengthOutOfRange(dto.password_length));
        }

        let user_name_raw = dto.user_name.trim();
        if user_name_raw.chars().count() < 3 {
            return Err(RosterError::UsernameTooShort);
        }

        let email = dto.email.trim();
        if !email.validate_email() {
            return Err(RosterError::InvalidEmailFormat(email.to_string()));
        }
        if self.roster.email_in_use(email) {
            return Err(RosterError::EmailAlreadyUsed(email.to_string()));
        }

        let full_name = dto.full_name.trim();
        if full_name.is_empty() {
            return Err(RosterError::EmptyField("full name"));
        }

        let student = Student {
            full_name: full_name.to_string(),
            user_name: resolver::resolve_user_name(&self.roster, user_name_raw),
            password: credentials::generate_password(dto.password_length)?,
            email: email.to_string(),
        };

        let group = self
            .roster
            .group_mut(group_name)
            .ok_or_else(|| RosterError::GroupNotFound(group_name.to_string()))?;
        group.students.push(student.clone());
        Ok(student)
    }

    /// Overwrites a student's name, username, and email in place.
    ///
    /// Only emptiness (after trimming) is rejected. Uniqueness and email
    /// format are not re-checked on edit, so an edit can reintroduce a
    /// duplicate or malformed value that `add_student` would have refused.
    /// The password is never altered here.
    #[instrument(skip(self, dto), fields(group = %group_name))]
    pub fn edit_student(
        &mut self,
        group_name: &str,
        user_name: &str,
        dto: UpdateStudentDto,
    ) -> Result<Student, RosterError> {
        let full_name = dto.full_name.trim();
        let new_user_name = dto.user_name.trim();
        let email = dto.email.trim();
        if full_name.is_empty() {
            return Err(RosterError::EmptyField("full name"));
        }
        if new_user_name.is_empty() {
            return Err(RosterError::EmptyField("username"));
        }
        if email.is_empty() {
            return Err(RosterError::EmptyField("email"));
        }

        let group = self
            .roster
            .group_mut(group_name)
            .ok_or_else(|| RosterError::GroupNotFound(group_name.to_string()))?;
        let student = group
            .students
            .iter_mut()
            .find(|s| s.user_name == user_name)
            .ok_or_else(|| RosterError::StudentNotFound {
                group: group_name.to_string(),
                user_name: user_name.to_string(),
            })?;

        student.full_name = full_name.to_string();
        student.user_name = new_user_name.to_string();
        student.email = email.to_string();
        Ok(student.clone())
    }

    /// Removes a student. Idempotent: absent group or student is a no-op.
    #[instrument(skip(self))]
    pub fn delete_student(&mut self, group_name: &str, user_name: &str) {
        if let Some(group) = self.roster.group_mut(group_name) {
            group.students.retain(|s| s.user_name != user_name);
        }
    }

    /// Resets the roster to an unnamed, empty state.
    ///
    /// The auto-number counter restarts at 1 and the selection cursor is
    /// cleared.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.roster = Roster::new();
        self.selected = None;
        self.next_group_number = 1;
    }
}
