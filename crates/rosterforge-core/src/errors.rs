//! Failure taxonomy for roster operations.

use thiserror::Error;

/// Error type for roster mutations and credential generation.
///
/// Validation failures leave the roster unchanged; none of them are fatal to
/// the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A roster holds exactly one class; adding a group under a different
    /// class name is rejected rather than merged.
    #[error("roster already belongs to class '{current}'; clear it to start a new class")]
    ClassNameConflict { current: String },

    #[error("a group named '{0}' already exists")]
    DuplicateGroupName(String),

    #[error("password length {0} is outside the allowed range of 8 to 128")]
    PasswordLengthOutOfRange(u32),

    #[error("username must be at least 3 characters long")]
    UsernameTooShort,

    #[error("'{0}' is not a valid email address")]
    InvalidEmailFormat(String),

    /// Email collisions are never auto-resolved; the caller must pick a
    /// different address.
    #[error("the email '{0}' is already in use by another student")]
    EmailAlreadyUsed(String),

    #[error("no group named '{0}' exists")]
    GroupNotFound(String),

    #[error("no student '{user_name}' exists in group '{group}'")]
    StudentNotFound { group: String, user_name: String },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The platform could not supply cryptographically secure randomness.
    /// There is deliberately no fallback to a weaker generator.
    #[error("secure random source is unavailable on this platform")]
    EntropyUnavailable,
}
