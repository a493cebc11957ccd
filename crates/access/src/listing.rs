//! Dashboard listing and project links.

use crate::access::validate_access;
use crate::navigation::{display_name, resolve_project_url, type_icon};
use pocketbook_core::{AccessResult, ProjectRef};
use rayon::prelude::*;
use serde::Serialize;

/// Everything a link-rendering layer needs for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub display_name: &'static str,
    pub icon: &'static str,
}

pub fn project_link(project: &ProjectRef) -> ProjectLink {
    ProjectLink {
        id: project.id.clone(),
        title: project.title.clone(),
        url: resolve_project_url(project.project_type, &project.id),
        display_name: display_name(project.project_type),
        icon: type_icon(project.project_type),
    }
}

/// Projects `user` may open, in input order.
///
/// Includes shared and public projects the user neither owns nor belongs to
/// (`has_access == false`).
pub fn accessible_projects(projects: &[ProjectRef], user: &str) -> Vec<AccessResult> {
    let results: Vec<AccessResult> = projects
        .par_iter()
        .filter_map(|p| validate_access(Some(p), user, None).ok())
        .collect();

    tracing::debug!(
        user,
        total = projects.len(),
        accessible = results.len(),
        "listed projects"
    );
    results
}

/// Splits [`accessible_projects`] into `(owned, shared_with_user)`.
///
/// Public projects the user is not a member of appear in neither list.
pub fn owned_and_shared(
    projects: &[ProjectRef],
    user: &str,
) -> (Vec<AccessResult>, Vec<AccessResult>) {
    accessible_projects(projects, user)
        .into_iter()
        .filter(|r| r.has_access)
        .partition(|r| r.project.is_owner)
}
