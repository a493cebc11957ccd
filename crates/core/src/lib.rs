//! Domain models, shared types, and error definitions.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod error;
pub mod types;

pub use error::{AccessError, PocketbookError, PocketbookResult, UnknownProjectType};
pub use types::{
    AccessResult, ClassifiedError, ErrorKind, Member, ProjectRef, ProjectType, ProjectView,
    Visibility,
};
