//! Group DTOs.
//!
//! Re-exported from the `rosterforge-models` crate so controllers in this
//! module keep short import paths.

pub use rosterforge_models::groups::*;
