//! JSON file project source.
//!
//! The file holds a JSON array of project records in their wire form:
//!
//! ```json
//! [{ "id": "p1", "title": "Car loan", "projectType": "loan",
//!    "userId": "u1", "visibility": "private", "members": [] }]
//! ```

use crate::{MemorySource, ProjectSource};
use async_trait::async_trait;
use pocketbook_core::error::{PocketbookError, PocketbookResult};
use pocketbook_core::ProjectRef;
use std::path::{Path, PathBuf};

/// Snapshot of a JSON export, loaded once and served from memory.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    inner: MemorySource,
}

impl JsonFileSource {
    pub async fn load(path: impl AsRef<Path>) -> PocketbookResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.as_os_str().is_empty() {
            return Err(PocketbookError::InvalidInput("store path must not be empty".into()));
        }

        let raw = tokio::fs::read(&path).await.map_err(|e| {
            PocketbookError::Store(format!("Failed to read {}: {e}", path.display()))
        })?;
        let inner = Self::parse(&raw).map_err(|e| match e {
            PocketbookError::Store(msg) => {
                PocketbookError::Store(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;

        tracing::info!(path = %path.display(), projects = inner.len(), "loaded project store");

        Ok(Self { path, inner })
    }

    /// Parses an in-memory JSON array.
    pub fn parse(raw: &[u8]) -> PocketbookResult<MemorySource> {
        let projects: Vec<ProjectRef> = serde_json::from_slice(raw)
            .map_err(|e| PocketbookError::Store(format!("malformed project JSON: {e}")))?;
        MemorySource::from_projects(projects)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRef> {
        self.inner.get(id)
    }

    pub fn projects(&self) -> &[ProjectRef] {
        self.inner.projects()
    }
}

#[async_trait]
impl ProjectSource for JsonFileSource {
    async fn get_project(&self, id: &str) -> PocketbookResult<Option<ProjectRef>> {
        tracing::debug!(id, path = %self.path.display(), "fetching project");
        self.inner.get_project(id).await
    }

    async fn list_projects(&self) -> PocketbookResult<Vec<ProjectRef>> {
        self.inner.list_projects().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_core::{ProjectType, Visibility};

    #[test]
    fn parses_wire_records() {
        let raw = br#"[
            {"id":"p1","title":"Car loan","projectType":"loan","userId":"u1"},
            {"id":"p2","title":"Flat","projectType":"splitwise","userId":"u2",
             "visibility":"shared","members":[{"userId":"u1","role":"editor"}]}
        ]"#;
        let source = JsonFileSource::parse(raw).unwrap();
        assert_eq!(source.len(), 2);

        let flat = source.get("p2").unwrap();
        assert_eq!(flat.project_type, ProjectType::Splitwise);
        assert_eq!(flat.visibility, Visibility::Shared);
        assert!(flat.has_member("u1"));
    }

    #[test]
    fn unknown_project_type_is_a_store_error() {
        let raw = br#"[{"id":"p1","title":"x","projectType":"mortgage","userId":"u1"}]"#;
        let err = JsonFileSource::parse(raw).unwrap_err();
        assert!(matches!(err, PocketbookError::Store(_)), "got: {err}");
    }

    #[tokio::test]
    async fn missing_file_is_a_store_error() {
        let err = JsonFileSource::load("/nonexistent/pocketbook/projects.json")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Store error: Failed to read"), "got: {err}");
    }
}
