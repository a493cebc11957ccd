//! Route guard for project pages.
//!
//! A page at `/dashboard/{type}/{id}` may only render a project of that
//! type, and only for users the validator admits.

use crate::access::validate_access;
use crate::classify::classify;
use crate::navigation::{first_conflicting_marker, DASHBOARD_ROOT};
use pocketbook_core::error::{AccessError, PocketbookError, PocketbookResult};
use pocketbook_core::{AccessResult, ClassifiedError, ProjectRef, ProjectType};
use percent_encoding::percent_decode_str;
use pocketbook_store::ProjectSource;
use url::Url;

/// Type and id segments of a project page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoute {
    pub project_type: ProjectType,
    pub id: String,
}

/// Parses `/dashboard/{type}/{id}`.
///
/// Accepts absolute `http(s)` URLs and relative paths; query, fragment and a
/// trailing slash are ignored. The id is percent-decoded, so it matches the
/// stored id. Returns `None` for anything else, including unknown type
/// segments and ids that do not decode to UTF-8.
pub fn parse_project_path(path: &str) -> Option<ProjectRoute> {
    let url = match Url::parse(path) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/").ok()?.join(path).ok()?
        }
        Err(_) => return None,
    };

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let root = segments.next()?;
    let ty = segments.next()?;
    let id = segments.next()?;
    if segments.next().is_some() || format!("/{root}") != DASHBOARD_ROOT {
        return None;
    }

    Some(ProjectRoute {
        project_type: ty.parse().ok()?,
        id: percent_decode_str(id).decode_utf8().ok()?.into_owned(),
    })
}

/// Guards a page load of `path` for `project`.
///
/// Order: missing project, then any type marker in `path` that contradicts
/// the project's type, then the validator's access rules.
pub fn guard_route(
    path: &str,
    project: Option<&ProjectRef>,
    requesting_user_id: &str,
) -> Result<AccessResult, AccessError> {
    let route = parse_project_path(path);

    let Some(project) = project else {
        return validate_access(None, requesting_user_id, None);
    };

    if let Some(marker) = first_conflicting_marker(project.project_type, path) {
        let expected = route
            .as_ref()
            .map(|r| r.project_type)
            .filter(|&ty| ty != project.project_type)
            .unwrap_or(marker);
        tracing::debug!(path, project = %project.id, %expected, "url does not match project type");
        return Err(AccessError::TypeMismatch {
            expected,
            actual: project.project_type,
        });
    }

    if let Some(route) = &route {
        if route.id != project.id {
            tracing::warn!(path, project = %project.id, "route id differs from guarded project");
        }
    }

    validate_access(
        Some(project),
        requesting_user_id,
        route.map(|r| r.project_type),
    )
}

/// [`guard_route`] with the failure already classified for display.
pub fn guard_route_classified(
    path: &str,
    project: Option<&ProjectRef>,
    requesting_user_id: &str,
) -> Result<AccessResult, ClassifiedError> {
    guard_route(path, project, requesting_user_id).map_err(|e| classify(&e))
}

/// Resolves `path` to a project id, fetches it, and guards the page load.
pub async fn guard_request<S: ProjectSource + ?Sized>(
    source: &S,
    path: &str,
    requesting_user_id: &str,
) -> PocketbookResult<AccessResult> {
    let route = parse_project_path(path)
        .ok_or_else(|| PocketbookError::InvalidInput(format!("{path:?} is not a project page")))?;
    let project = source.get_project(&route.id).await?;
    Ok(guard_route(path, project.as_ref(), requesting_user_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_core::{ErrorKind, Member, Visibility};

    fn loan() -> ProjectRef {
        ProjectRef::new("p1", "Car loan", ProjectType::Loan, "alice")
    }

    #[test]
    fn parses_project_paths() {
        let expected = ProjectRoute {
            project_type: ProjectType::Loan,
            id: "p1".into(),
        };
        for path in [
            "/dashboard/loan/p1",
            "/dashboard/loan/p1/",
            "/dashboard/loan/p1?tab=payments",
            "/dashboard/loan/p1#history",
            "https://app.example.com/dashboard/loan/p1",
        ] {
            assert_eq!(parse_project_path(path).as_ref(), Some(&expected), "{path}");
        }
    }

    #[test]
    fn decodes_id_segment() {
        for (path, id) in [
            ("/dashboard/loan/caf%C3%A9", "café"),
            ("/dashboard/loan/café", "café"),
            ("/dashboard/loan/p 1", "p 1"),
            ("/dashboard/loan/a{b}", "a{b}"),
            ("https://app.example.com/dashboard/loan/p%201?tab=x", "p 1"),
        ] {
            assert_eq!(parse_project_path(path).map(|r| r.id).as_deref(), Some(id), "{path}");
        }
        assert_eq!(parse_project_path("/dashboard/loan/%FF"), None);
    }

    #[test]
    fn rejects_non_project_paths() {
        for path in [
            "/dashboard",
            "/dashboard/loan",
            "/dashboard/mortgage/p1",
            "/settings/loan/p1",
            "/dashboard/loan/p1/edit",
            "mailto:someone@example.com",
        ] {
            assert_eq!(parse_project_path(path), None, "{path}");
        }
    }

    #[test]
    fn owner_passes_matching_route() {
        let result = guard_route("/dashboard/loan/p1", Some(&loan()), "alice").unwrap();
        assert!(result.project.is_owner);
    }

    #[test]
    fn wrong_type_segment_is_a_mismatch_even_for_owner() {
        let err = guard_route("/dashboard/splitwise/p1", Some(&loan()), "alice").unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                expected: ProjectType::Splitwise,
                actual: ProjectType::Loan,
            }
        );
    }

    #[test]
    fn marker_outside_route_still_conflicts() {
        let err = guard_route("/dashboard?back=/general/x", Some(&loan()), "alice").unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                expected: ProjectType::General,
                actual: ProjectType::Loan,
            }
        );
    }

    #[test]
    fn missing_project_checked_first() {
        let classified = guard_route_classified("/dashboard/splitwise/p1", None, "alice").unwrap_err();
        assert_eq!(classified.kind, ErrorKind::NotFound);
    }

    #[test]
    fn private_project_denies_strangers() {
        let classified = guard_route_classified("/dashboard/loan/p1", Some(&loan()), "mallory").unwrap_err();
        assert_eq!(classified.kind, ErrorKind::Forbidden);
        assert_eq!(classified.message, "You do not have access to this project");
    }

    #[test]
    fn members_and_public_visitors_pass() {
        let project = loan().with_member(Member::new("bob", "viewer"));
        assert!(guard_route("/dashboard/loan/p1", Some(&project), "bob").unwrap().has_access);

        let project = loan().with_visibility(Visibility::Public);
        assert!(!guard_route("/dashboard/loan/p1", Some(&project), "carol").unwrap().has_access);
    }
}
