//! Project access validation, URL resolution, error classification, and
//! dashboard listing.

pub mod access;
pub mod classify;
pub mod guard;
pub mod listing;
pub mod navigation;

pub use access::{fetch_and_validate, validate_access};
pub use classify::{classify, classify_error, classify_message};
pub use guard::{
    guard_request, guard_route, guard_route_classified, parse_project_path, ProjectRoute,
};
pub use listing::{accessible_projects, owned_and_shared, project_link, ProjectLink};
pub use navigation::{
    display_name, is_type_valid_for_url_pattern, raw_display_name, raw_type_icon,
    resolve_project_url, resolve_raw_url, type_icon, DASHBOARD_ROOT,
};
