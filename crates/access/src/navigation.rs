//! Canonical project URLs and presentation labels.

use pocketbook_core::ProjectType;

/// Landing page for anything that does not resolve to a project.
pub const DASHBOARD_ROOT: &str = "/dashboard";

const FALLBACK_DISPLAY_NAME: &str = "Project";
const FALLBACK_ICON: &str = "Folder";

/// `/dashboard/{type}/{id}`.
pub fn resolve_project_url(project_type: ProjectType, id: &str) -> String {
    match project_type {
        ProjectType::Loan => format!("{DASHBOARD_ROOT}/loan/{id}"),
        ProjectType::Splitwise => format!("{DASHBOARD_ROOT}/splitwise/{id}"),
        ProjectType::General => format!("{DASHBOARD_ROOT}/general/{id}"),
    }
}

/// Like [`resolve_project_url`] for an unparsed type; unknown types land on
/// the dashboard root.
pub fn resolve_raw_url(project_type: &str, id: &str) -> String {
    match project_type.parse::<ProjectType>() {
        Ok(ty) => resolve_project_url(ty, id),
        Err(_) => DASHBOARD_ROOT.to_string(),
    }
}

pub fn display_name(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Loan => "Loan",
        ProjectType::Splitwise => "Splitwise",
        ProjectType::General => "General",
    }
}

pub fn raw_display_name(project_type: &str) -> &'static str {
    project_type
        .parse::<ProjectType>()
        .map_or(FALLBACK_DISPLAY_NAME, display_name)
}

/// Symbolic icon identifier understood by the UI icon set.
pub fn type_icon(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Loan => "DollarSign",
        ProjectType::Splitwise => "Users",
        ProjectType::General => "Folder",
    }
}

pub fn raw_type_icon(project_type: &str) -> &'static str {
    project_type.parse::<ProjectType>().map_or(FALLBACK_ICON, type_icon)
}

/// Returns `false` when `url_pattern` carries a type segment marker that
/// disagrees with `project_type`.
///
/// Markers are plain substrings (`/loan/`, `/splitwise/`, `/general/`),
/// checked in that order; the first disagreeing marker decides.
pub fn is_type_valid_for_url_pattern(project_type: ProjectType, url_pattern: &str) -> bool {
    first_conflicting_marker(project_type, url_pattern).is_none()
}

/// The first marker in `url_pattern` whose type differs from `project_type`.
pub(crate) fn first_conflicting_marker(
    project_type: ProjectType,
    url_pattern: &str,
) -> Option<ProjectType> {
    ProjectType::ALL.into_iter().find(|&marker| {
        marker != project_type && url_pattern.contains(&format!("/{}/", marker.as_str()))
    })
}
