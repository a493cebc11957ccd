//! Project source abstraction for Pocketbook.
//!
//! Records live in an external database; the validator only ever sees what a
//! [`ProjectSource`] hands back.

pub mod json_file;
pub mod memory;

use async_trait::async_trait;
use pocketbook_core::error::PocketbookResult;
use pocketbook_core::ProjectRef;

pub use json_file::JsonFileSource;
pub use memory::MemorySource;

/// Abstraction for fetching project records from any backend.
///
/// A missing project is `Ok(None)`, not an error: the access validator owns
/// the not-found decision.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn get_project(&self, id: &str) -> PocketbookResult<Option<ProjectRef>>;
    async fn list_projects(&self) -> PocketbookResult<Vec<ProjectRef>>;
}
