//! Domain models for the MediCare records store.

mod appointment;
mod doctor;
mod history;
mod id;
mod patient;

pub use appointment::*;
pub use doctor::*;
pub use history::*;
pub use id::*;
pub use patient::*;

use thiserror::Error;

/// Model conversion errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown appointment status: {0}")]
    UnknownStatus(String),
}

/// Case-insensitive substring match used by every text filter.
///
/// Both sides are lowercased with Unicode rules; accents are not folded, so
/// "maría" matches "María" while "maria" does not.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
