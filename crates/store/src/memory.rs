//! In-memory project source.

use crate::ProjectSource;
use async_trait::async_trait;
use pocketbook_core::error::{PocketbookError, PocketbookResult};
use pocketbook_core::ProjectRef;
use std::collections::HashMap;

/// Holds projects in insertion order with an id index.
///
/// ```
/// use pocketbook_core::{PocketbookResult, ProjectRef, ProjectType};
/// use pocketbook_store::MemorySource;
///
/// fn main() -> PocketbookResult<()> {
///     let source = MemorySource::new()
///         .with_project(ProjectRef::new("p1", "Car loan", ProjectType::Loan, "u1"))?;
///     assert_eq!(source.get("p1").map(|p| p.title.as_str()), Some("Car loan"));
///     assert!(source
///         .with_project(ProjectRef::new("p1", "Again", ProjectType::General, "u2"))
///         .is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    projects: Vec<ProjectRef>,
    index: HashMap<String, usize>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from records, rejecting duplicate ids.
    pub fn from_projects(projects: impl IntoIterator<Item = ProjectRef>) -> PocketbookResult<Self> {
        let mut source = Self::new();
        for project in projects {
            source.insert(project)?;
        }
        Ok(source)
    }

    pub fn with_project(mut self, project: ProjectRef) -> PocketbookResult<Self> {
        self.insert(project)?;
        Ok(self)
    }

    pub fn insert(&mut self, project: ProjectRef) -> PocketbookResult<()> {
        if self.index.contains_key(&project.id) {
            return Err(PocketbookError::InvalidInput(format!(
                "duplicate project id {:?}",
                project.id
            )));
        }
        self.index.insert(project.id.clone(), self.projects.len());
        self.projects.push(project);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRef> {
        self.index.get(id).map(|&i| &self.projects[i])
    }

    pub fn projects(&self) -> &[ProjectRef] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl ProjectSource for MemorySource {
    async fn get_project(&self, id: &str) -> PocketbookResult<Option<ProjectRef>> {
        let found = self.get(id).cloned();
        tracing::debug!(id, found = found.is_some(), "memory lookup");
        Ok(found)
    }

    async fn list_projects(&self) -> PocketbookResult<Vec<ProjectRef>> {
        Ok(self.projects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_core::ProjectType;

    fn project(id: &str) -> ProjectRef {
        ProjectRef::new(id, "Groceries", ProjectType::Splitwise, "u1")
    }

    #[test]
    fn keeps_insertion_order() {
        let source = MemorySource::from_projects([project("b"), project("a"), project("c")]).unwrap();
        let ids: Vec<&str> = source.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(source.get("a").unwrap().id, "a");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = MemorySource::from_projects([project("p1"), project("p1")]).unwrap_err();
        assert!(matches!(err, PocketbookError::InvalidInput(_)), "got: {err}");
    }

    #[tokio::test]
    async fn missing_project_is_none() {
        let source = MemorySource::new().with_project(project("p1")).unwrap();
        assert!(source.get_project("nope").await.unwrap().is_none());
        assert!(source.get_project("p1").await.unwrap().is_some());
    }
}
