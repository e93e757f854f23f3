//! Resolution of external project paths into link targets.
//!
//! Used when navigating to a project other than the open one, e.g. after a
//! move or duplicate. Every failure collapses to `None`; callers send the
//! user to the application root instead of a broken link.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::link::{build_project_link, LinkTarget};
use crate::ports::projects::{ProjectInfo, ProjectLookup};

/// A project reached through the lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Organization slug, `None` for ungrouped projects.
    pub organization_slug: Option<String>,
    /// Project name as used in routes.
    pub project_name: String,
}

impl ResolvedTarget {
    /// Builds the route to `relative_path` inside this project.
    #[must_use]
    pub fn link(&self, relative_path: &str) -> String {
        build_project_link(self.organization_slug.as_deref(), &self.project_name, relative_path)
    }

    /// Returns `relative_path` inside this project as a storable destination.
    #[must_use]
    pub fn link_target(&self, relative_path: &str) -> LinkTarget {
        LinkTarget::Project {
            organization_slug: self.organization_slug.clone(),
            project_name: self.project_name.clone(),
            relative_path: relative_path.to_string(),
        }
    }
}

/// Destination for `relative_path` after a relocation, or the root page when
/// the target project could not be resolved.
#[must_use]
pub fn relocation_target(target: Option<&ResolvedTarget>, relative_path: &str) -> LinkTarget {
    match target {
        Some(target) => target.link_target(relative_path),
        None => LinkTarget::Root { path: "/".to_string() },
    }
}

impl From<ProjectInfo> for ResolvedTarget {
    fn from(info: ProjectInfo) -> Self {
        Self {
            organization_slug: info.organization_slug.filter(|slug| !slug.is_empty()),
            project_name: info.name,
        }
    }
}

/// Resolves project paths through a [`ProjectLookup`].
pub struct TargetResolver<'a> {
    lookup: &'a dyn ProjectLookup,
}

impl<'a> TargetResolver<'a> {
    /// Creates a resolver over the given lookup.
    #[must_use]
    pub fn new(lookup: &'a dyn ProjectLookup) -> Self {
        Self { lookup }
    }

    /// Resolves `project_path`, or `None` if it is unknown or the lookup fails.
    pub async fn resolve(&self, project_path: &str) -> Option<ResolvedTarget> {
        match self.lookup.get_project(project_path).await {
            Ok(Some(info)) => {
                let target = ResolvedTarget::from(info);
                debug!(
                    project_path,
                    organization = target.organization_slug.as_deref().unwrap_or("(ungrouped)"),
                    project = %target.project_name,
                    "resolved project"
                );
                Some(target)
            }
            Ok(None) => {
                debug!(project_path, "project not found");
                None
            }
            Err(err) => {
                warn!(project_path, error = %err, "project lookup failed");
                None
            }
        }
    }

    /// Returns the route to `relative_path` in the project at `project_path`,
    /// or `/` when the project cannot be resolved.
    pub async fn link_after_relocation(&self, project_path: &str, relative_path: &str) -> String {
        let target = self.resolve(project_path).await;
        relocation_target(target.as_ref(), relative_path).href()
    }

    /// Resolves `project_path` for the request identified by `ticket`,
    /// discarding the outcome if `tracker` issued a newer ticket while this
    /// one was in flight.
    ///
    /// Take the ticket with [`ResolutionTracker::begin`] when the request is
    /// made, not when it is first polled.
    pub async fn resolve_latest(
        &self,
        tracker: &ResolutionTracker,
        ticket: ResolutionTicket,
        project_path: &str,
    ) -> Resolution<Option<ResolvedTarget>> {
        let outcome = self.resolve(project_path).await;
        tracker.accept(ticket, outcome)
    }
}

/// Identifies one resolution request within a [`ResolutionTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolutionTicket(u64);

/// Outcome of a tracked resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The newest request; act on it.
    Current(T),
    /// Superseded by a later request; drop it.
    Stale,
}

impl<T> Resolution<T> {
    /// Returns the value if this resolution is current.
    pub fn into_current(self) -> Option<T> {
        match self {
            Self::Current(value) => Some(value),
            Self::Stale => None,
        }
    }
}

/// Orders concurrent resolutions so a slow, older request cannot win over a
/// newer one.
#[derive(Debug, Default)]
pub struct ResolutionTracker {
    latest: AtomicU64,
}

impl ResolutionTracker {
    /// Creates a tracker with no requests issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn begin(&self) -> ResolutionTicket {
        ResolutionTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns `true` if no ticket has been issued after `ticket`.
    #[must_use]
    pub fn is_current(&self, ticket: ResolutionTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Wraps `outcome` as current or stale depending on `ticket`.
    pub fn accept<T>(&self, ticket: ResolutionTicket, outcome: T) -> Resolution<T> {
        if self.is_current(ticket) {
            Resolution::Current(outcome)
        } else {
            debug!(ticket = ticket.0, "discarding stale resolution");
            Resolution::Stale
        }
    }
}
