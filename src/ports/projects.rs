//! Project lookup port: resolves a filesystem project path through the daemon.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed future type alias used by [`ProjectLookup`] to keep the trait dyn-compatible.
pub type LookupFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<ProjectInfo>, LookupError>> + Send + 'a>>;

/// Project metadata returned by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Filesystem path of the project.
    pub path: String,
    /// Project name as used in routes.
    pub name: String,
    /// Owning organization, `None` for ungrouped projects.
    #[serde(default)]
    pub organization_slug: Option<String>,
}

/// Failures talking to the project lookup collaborator.
///
/// Not-found is not an error: it is `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response.
    #[error("project lookup request failed: {0}")]
    Transport(String),
    /// The daemon answered with an error status.
    #[error("daemon returned {status}: {message}")]
    Daemon {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode project lookup response: {0}")]
    Decode(String),
    /// A replayed cassette had no matching interaction or held an error.
    #[error("replayed project lookup failed: {0}")]
    Replay(String),
}

/// Looks up project metadata by filesystem path.
pub trait ProjectLookup: Send + Sync {
    /// Returns the project at `project_path`, or `None` if the daemon does
    /// not know it.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon cannot be reached or its response is
    /// unusable.
    fn get_project(&self, project_path: &str) -> LookupFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_info_uses_camel_case_wire_form() {
        let info: ProjectInfo = serde_json::from_str(
            r#"{"path": "/srv/data/widgets", "name": "widgets", "organizationSlug": "acme"}"#,
        )
        .unwrap();
        assert_eq!(info.organization_slug.as_deref(), Some("acme"));
        assert_eq!(info.name, "widgets");
    }

    #[test]
    fn missing_organization_is_ungrouped() {
        let info: ProjectInfo =
            serde_json::from_str(r#"{"path": "/tmp/p", "name": "p"}"#).unwrap();
        assert_eq!(info.organization_slug, None);
    }
}
