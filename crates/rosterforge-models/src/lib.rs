//! # Rosterforge Models
//!
//! Domain models and DTOs for Rosterforge.
//!
//! This crate provides the data structures shared across the Rosterforge
//! workspace:
//!
//! - [`roster`]: the roster interchange types (`Roster`, `Group`, `Student`)
//! - [`groups`]: group request DTOs
//! - [`students`]: student request DTOs
//!
//! The roster types serialize to the interchange form consumed by every
//! encoder, so their field names and declaration order are part of the wire
//! contract.

pub mod groups;
pub mod roster;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use groups::{CreateGroupDto, RenameGroupDto};
pub use roster::{Group, Roster, Student};
pub use students::{CreateStudentDto, UpdateStudentDto};
