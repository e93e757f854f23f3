//! Derives the current organization/project pair from route state.

use serde::{Deserialize, Serialize};

use super::reserved::{decode_org_segment, decode_segment, is_root_route, UNGROUPED_MARKER};

/// The organization/project pair identifying the open project.
///
/// `organization_slug` is `None` for ungrouped projects. The ungrouped
/// marker never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Organization slug, or `None` when the project is ungrouped.
    pub organization_slug: Option<String>,
    /// Project name as it appears in routes.
    pub project_name: String,
}

impl RouteContext {
    /// Creates a context for a project inside an organization.
    #[must_use]
    pub fn new(organization_slug: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            organization_slug: Some(organization_slug.into()),
            project_name: project_name.into(),
        }
    }

    /// Creates a context for a project without an organization.
    #[must_use]
    pub fn ungrouped(project_name: impl Into<String>) -> Self {
        Self { organization_slug: None, project_name: project_name.into() }
    }

    /// Builds a context from already-decoded route parameters.
    fn from_params(organization: &str, project: &str) -> Self {
        let organization_slug =
            (organization != UNGROUPED_MARKER).then(|| organization.to_string());
        Self { organization_slug, project_name: project.to_string() }
    }

    /// Builds a context from raw, percent-encoded path segments.
    fn from_segments(organization: &str, project: &str) -> Self {
        Self {
            organization_slug: decode_org_segment(organization),
            project_name: decode_segment(project),
        }
    }
}

/// Structured route parameters supplied by the navigation framework.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// The `organization` parameter, if the matched route declares one.
    pub organization: Option<String>,
    /// The `project` parameter, if the matched route declares one.
    pub project: Option<String>,
}

impl RouteParams {
    /// Params for a route that declares both `organization` and `project`.
    #[must_use]
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self { organization: Some(organization.into()), project: Some(project.into()) }
    }

    fn pair(&self) -> Option<(&str, &str)> {
        let organization = self.organization.as_deref().filter(|s| !s.is_empty())?;
        let project = self.project.as_deref().filter(|s| !s.is_empty())?;
        Some((organization, project))
    }
}

/// Splits a path into its non-empty segments, ignoring any query string or
/// fragment.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|segment| !segment.is_empty())
}

/// Extracts the current route context.
///
/// Structured params win when both are present; the framework has already
/// decoded them. Otherwise the first two path segments are read as
/// organization and project, unless the raw first segment is a reserved
/// root route. Returns `None` when no project is open.
#[must_use]
pub fn extract_context(params: &RouteParams, path: &str) -> Option<RouteContext> {
    if let Some((organization, project)) = params.pair() {
        return Some(RouteContext::from_params(organization, project));
    }

    let mut segments = path_segments(path);
    let organization = segments.next()?;
    if is_root_route(organization) {
        return None;
    }
    let project = segments.next()?;
    Some(RouteContext::from_segments(organization, project))
}
