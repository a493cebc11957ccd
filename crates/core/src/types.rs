//! Domain types for Pocketbook projects.

use crate::error::UnknownProjectType;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Project classification
// ---------------------------------------------------------------------------

/// What a project tracks. Lowercase on the wire and in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Loan,
    Splitwise,
    General,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Loan, Self::Splitwise, Self::General];

    /// URL segment and wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loan => "loan",
            Self::Splitwise => "splitwise",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loan" => Ok(Self::Loan),
            "splitwise" => Ok(Self::Splitwise),
            "general" => Ok(Self::General),
            other => Err(UnknownProjectType(other.to_string())),
        }
    }
}

/// Who besides owner and members may open a project.
///
/// Only `Private` gates access; `Shared` and `Public` let anyone through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Shared,
    Public,
}

// ---------------------------------------------------------------------------
// Project records
// ---------------------------------------------------------------------------

/// A collaborator. The role is carried through but never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    pub role: String,
}

impl Member {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }
}

/// A project as fetched from persistence.
///
/// `SmallVec<[Member; 4]>` keeps typical member lists inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_type: ProjectType,
    pub user_id: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub members: SmallVec<[Member; 4]>,
}

impl ProjectRef {
    /// A private project with no members.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        project_type: ProjectType,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            project_type,
            user_id: owner.into(),
            visibility: Visibility::Private,
            members: SmallVec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    /// Client-safe projection: drops members and visibility.
    pub fn view(&self, is_owner: bool) -> ProjectView {
        ProjectView {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            project_type: self.project_type,
            user_id: self.user_id.clone(),
            is_owner,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_type: ProjectType,
    pub user_id: String,
    pub is_owner: bool,
}

/// Outcome of a successful access check.
///
/// `has_access` can be `false` here: non-private projects open for anyone,
/// but the flag still reports whether the user is owner or member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessResult {
    pub project: ProjectView,
    pub has_access: bool,
}

// ---------------------------------------------------------------------------
// Error presentation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    TypeMismatch,
    Unknown,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::Forbidden => "forbidden",
            Self::TypeMismatch => "type-mismatch",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the UI error boundary renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
