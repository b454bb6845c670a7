//! Error types for menagerie-core.

use thiserror::Error;

use crate::types::AnimalName;

/// All errors that can arise from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A required input field was empty.
    #[error("field '{field}' must not be empty")]
    Validation { field: &'static str },

    /// The category string did not name any known animal type.
    #[error("unknown animal type '{0}'; expected one of: dog, cat, hamster, horse, camel, donkey")]
    UnknownCategory(String),

    /// No animal is registered under the requested name.
    #[error("no animal named '{0}'")]
    NotFound(AnimalName),

    /// The registration counter was used after its scope ended.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}
