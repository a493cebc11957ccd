//! Centralized error types for the Pocketbook workspace.

use crate::types::ProjectType;
use thiserror::Error;

/// Conditions raised by the access validator.
///
/// The rendered messages are part of the client contract: message-based
/// classification (`pocketbook_access::classify::classify_message`) keys on
/// this exact wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Project not found")]
    NotFound,

    #[error("Project type mismatch. Expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ProjectType,
        actual: ProjectType,
    },

    #[error("You do not have access to this project")]
    Denied,
}

/// Top-level error enum. Variants map to subsystems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PocketbookError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type PocketbookResult<T> = Result<T, PocketbookError>;

/// A project type string outside `loan | splitwise | general`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project type: {0:?}")]
pub struct UnknownProjectType(pub String);

impl From<UnknownProjectType> for PocketbookError {
    fn from(err: UnknownProjectType) -> Self {
        PocketbookError::InvalidInput(err.to_string())
    }
}
