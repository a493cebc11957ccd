//! Maps failures onto the presentation taxonomy:
//! `not-found | forbidden | type-mismatch | unknown`.
//!
//! Validator errors are classified by variant. Errors that only reach the UI
//! as text (store, transport) go through [`classify_message`], which matches
//! substrings in a fixed order. Both paths agree on every message the
//! validator renders.

use pocketbook_core::error::{AccessError, PocketbookError};
use pocketbook_core::{ClassifiedError, ErrorKind};

const NOT_FOUND_MESSAGE: &str = "Project not found";
const FORBIDDEN_MESSAGE: &str = "You do not have access to this project";
const TYPE_MISMATCH_MESSAGE: &str = "Invalid project type for this URL";
const FALLBACK_MESSAGE: &str = "An error occurred";

/// Variant-based classification. Type mismatch drops the expected/actual
/// detail in favour of a fixed message.
pub fn classify(error: &AccessError) -> ClassifiedError {
    match error {
        AccessError::NotFound => ClassifiedError::new(ErrorKind::NotFound, NOT_FOUND_MESSAGE),
        AccessError::Denied => ClassifiedError::new(ErrorKind::Forbidden, FORBIDDEN_MESSAGE),
        AccessError::TypeMismatch { .. } => {
            ClassifiedError::new(ErrorKind::TypeMismatch, TYPE_MISMATCH_MESSAGE)
        }
    }
}

/// Text-based classification, first match wins:
/// `"not found"`, then `"access"`, then `"type mismatch"`.
///
/// The three recognised kinds get fixed messages; anything else is echoed
/// verbatim as `unknown`. Matching is case-sensitive.
///
/// `"access"` also matches unrelated text such as `"Cannot access database"`.
pub fn classify_message(message: Option<&str>) -> ClassifiedError {
    let Some(message) = message else {
        return ClassifiedError::new(ErrorKind::Unknown, FALLBACK_MESSAGE);
    };

    if message.contains("not found") {
        ClassifiedError::new(ErrorKind::NotFound, NOT_FOUND_MESSAGE)
    } else if message.contains("access") {
        ClassifiedError::new(ErrorKind::Forbidden, FORBIDDEN_MESSAGE)
    } else if message.contains("type mismatch") {
        ClassifiedError::new(ErrorKind::TypeMismatch, TYPE_MISMATCH_MESSAGE)
    } else {
        ClassifiedError::new(ErrorKind::Unknown, message)
    }
}

/// Workspace-level entry point for the UI error boundary.
pub fn classify_error(error: &PocketbookError) -> ClassifiedError {
    match error {
        PocketbookError::Access(e) => classify(e),
        other => {
            let classified = classify_message(Some(&other.to_string()));
            tracing::debug!(kind = %classified.kind, error = %other, "classified by message");
            classified
        }
    }
}
