//! In-memory adapter for the `ProjectLookup` port.

use std::collections::HashMap;

use crate::ports::projects::{LookupFuture, ProjectInfo, ProjectLookup};

/// Serves project lookups from a fixed table keyed by project path.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectLookup {
    projects: HashMap<String, ProjectInfo>,
}

impl StaticProjectLookup {
    /// Creates an empty lookup; every path is not-found.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project, keyed by its `path`.
    #[must_use]
    pub fn with_project(mut self, info: ProjectInfo) -> Self {
        self.projects.insert(info.path.clone(), info);
        self
    }
}

impl ProjectLookup for StaticProjectLookup {
    fn get_project(&self, project_path: &str) -> LookupFuture<'_> {
        let found = self.projects.get(project_path).cloned();
        Box::pin(async move { Ok(found) })
    }
}
