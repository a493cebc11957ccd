//! Project access validation.
//!
//! Checks run as ordered hard gates:
//!   1. project present            -> `NotFound`
//!   2. expected type (if any)     -> `TypeMismatch`
//!   3. owner / member / visibility -> `Denied` (private projects only)
//!
//! A type mismatch wins over ownership, so an owner following a stale
//! `/loan/` link to a splitwise project is still rejected.

use pocketbook_core::error::{AccessError, PocketbookResult};
use pocketbook_core::{AccessResult, ProjectRef, ProjectType, Visibility};
use pocketbook_store::ProjectSource;

/// Decides whether `requesting_user_id` may open `project`.
///
/// On success the result carries the client-safe view. `has_access` is the
/// owner-or-member flag and may be `false` for shared or public projects.
pub fn validate_access(
    project: Option<&ProjectRef>,
    requesting_user_id: &str,
    expected_type: Option<ProjectType>,
) -> Result<AccessResult, AccessError> {
    let Some(project) = project else {
        tracing::debug!(user = requesting_user_id, "project not found");
        return Err(AccessError::NotFound);
    };

    if let Some(expected) = expected_type {
        if project.project_type != expected {
            tracing::debug!(
                project = %project.id,
                %expected,
                actual = %project.project_type,
                "project type mismatch"
            );
            return Err(AccessError::TypeMismatch {
                expected,
                actual: project.project_type,
            });
        }
    }

    let is_owner = project.is_owned_by(requesting_user_id);
    let has_access = is_owner || project.has_member(requesting_user_id);

    if !has_access && project.visibility == Visibility::Private {
        tracing::debug!(
            project = %project.id,
            user = requesting_user_id,
            "access denied to private project"
        );
        return Err(AccessError::Denied);
    }

    Ok(AccessResult {
        project: project.view(is_owner),
        has_access,
    })
}

/// Fetches `id` from `source` and validates it.
///
/// Store failures come back as the source's error; a missing record is
/// reported by the validator as `NotFound`.
pub async fn fetch_and_validate<S: ProjectSource + ?Sized>(
    source: &S,
    id: &str,
    requesting_user_id: &str,
    expected_type: Option<ProjectType>,
) -> PocketbookResult<AccessResult> {
    let project = source.get_project(id).await?;
    Ok(validate_access(
        project.as_ref(),
        requesting_user_id,
        expected_type,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_core::Member;

    const OWNER: &str = "owner";
    const FRIEND: &str = "friend";
    const STRANGER: &str = "stranger";

    fn private_splitwise() -> ProjectRef {
        ProjectRef::new("p1", "Flat expenses", ProjectType::Splitwise, OWNER)
            .with_description("Rent and bills")
    }

    #[test]
    fn missing_project_is_not_found() {
        for expected in [None, Some(ProjectType::Loan)] {
            let err = validate_access(None, OWNER, expected).unwrap_err();
            assert_eq!(err, AccessError::NotFound);
            assert_eq!(err.to_string(), "Project not found");
        }
    }

    #[test]
    fn type_mismatch_wins_over_ownership() {
        let project = private_splitwise().with_visibility(Visibility::Public);
        for user in [OWNER, STRANGER] {
            let err = validate_access(Some(&project), user, Some(ProjectType::Loan)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Project type mismatch. Expected loan, got splitwise"
            );
        }
    }

    #[test]
    fn owner_gets_full_view() {
        let project = private_splitwise();
        let result = validate_access(Some(&project), OWNER, Some(ProjectType::Splitwise)).unwrap();
        assert!(result.has_access);
        assert!(result.project.is_owner);
        assert_eq!(result.project.id, "p1");
        assert_eq!(result.project.description.as_deref(), Some("Rent and bills"));
        assert_eq!(result.project.user_id, OWNER);
    }

    #[test]
    fn stranger_denied_on_private_project() {
        let err = validate_access(Some(&private_splitwise()), STRANGER, None).unwrap_err();
        assert_eq!(err, AccessError::Denied);
        assert_eq!(err.to_string(), "You do not have access to this project");
    }

    #[test]
    fn member_admitted_to_private_project() {
        let project = private_splitwise().with_member(Member::new(FRIEND, "viewer"));
        let result = validate_access(Some(&project), FRIEND, None).unwrap();
        assert!(result.has_access);
        assert!(!result.project.is_owner);
    }

    #[test]
    fn non_private_projects_admit_strangers_without_access_flag() {
        for visibility in [Visibility::Shared, Visibility::Public] {
            let project = private_splitwise().with_visibility(visibility);
            let result = validate_access(Some(&project), STRANGER, None).unwrap();
            assert!(!result.has_access, "{visibility:?}");
            assert!(!result.project.is_owner);
        }
    }

    #[test]
    fn owner_listed_as_member_is_still_owner() {
        let project = private_splitwise().with_member(Member::new(OWNER, "admin"));
        let result = validate_access(Some(&project), OWNER, None).unwrap();
        assert!(result.project.is_owner);
        assert!(result.has_access);
    }
}
