//! Canonical route building.
//!
//! Project-scoped routes always carry exactly two prefix segments, the
//! organization (or the ungrouped marker) and the project name, before the
//! relative path. Both prefix segments are percent-encoded. Any `?query` or
//! `#fragment` on the relative path is carried through unchanged.

use serde::{Deserialize, Serialize};

use crate::route::{encode_org_segment, encode_segment, path_segments, RouteContext};

/// Builds a route for `relative_path` in the currently open project.
///
/// With no context the route is root-relative.
#[must_use]
pub fn build_link(relative_path: &str, context: Option<&RouteContext>) -> String {
    match context {
        Some(ctx) => {
            build_project_link(ctx.organization_slug.as_deref(), &ctx.project_name, relative_path)
        }
        None => {
            let (path, suffix) = split_suffix(relative_path);
            let segments: Vec<&str> = path_segments(path).collect();
            format!("/{}{suffix}", segments.join("/"))
        }
    }
}

/// Builds a route for `relative_path` inside an explicit project.
///
/// Used when linking away from the open project, e.g. after a move or
/// duplicate. A missing or empty organization encodes as the ungrouped
/// marker. An empty project name has no route of its own and falls back to
/// the root page.
#[must_use]
pub fn build_project_link(
    organization_slug: Option<&str>,
    project_name: &str,
    relative_path: &str,
) -> String {
    if project_name.is_empty() {
        return build_root_link("/");
    }
    let (path, suffix) = split_suffix(relative_path);
    let mut route = format!(
        "/{}/{}",
        encode_org_segment(organization_slug),
        encode_segment(project_name)
    );
    for segment in path_segments(path) {
        route.push('/');
        route.push_str(segment);
    }
    route.push_str(suffix);
    route
}

/// Normalizes a route that is never project-scoped to a single leading slash.
#[must_use]
pub fn build_root_link(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Splits `path` before its first `?` or `#`.
fn split_suffix(path: &str) -> (&str, &str) {
    path.find(['?', '#']).map_or((path, ""), |at| path.split_at(at))
}

/// A navigation destination carried as a value, e.g. a pinned item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    /// A page inside a specific project.
    Project {
        /// Organization slug, `None` for ungrouped projects.
        organization_slug: Option<String>,
        /// Project name.
        project_name: String,
        /// Path relative to the project root, e.g. `issues/42`.
        relative_path: String,
    },
    /// A top-level page such as `/organizations`.
    Root {
        /// The page path.
        path: String,
    },
}

impl LinkTarget {
    /// Returns the canonical route for this destination.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Project { organization_slug, project_name, relative_path } => {
                build_project_link(organization_slug.as_deref(), project_name, relative_path)
            }
            Self::Root { path } => build_root_link(path),
        }
    }
}
