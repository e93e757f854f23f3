//! Recording adapter for the `ProjectLookup` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::projects::{LookupFuture, ProjectLookup};

/// Records project lookups while delegating to an inner implementation.
pub struct RecordingProjectLookup {
    inner: Box<dyn ProjectLookup>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingProjectLookup {
    /// Wraps `inner`, appending every call to `recorder`.
    pub fn new(inner: Box<dyn ProjectLookup>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct GetProjectInput<'a> {
    project_path: &'a str,
}

impl ProjectLookup for RecordingProjectLookup {
    fn get_project(&self, project_path: &str) -> LookupFuture<'_> {
        let project_path = project_path.to_string();

        Box::pin(async move {
            let result = self.inner.get_project(&project_path).await;

            let input = GetProjectInput { project_path: &project_path };
            match self.recorder.lock() {
                Ok(mut recorder) => {
                    recorder.record_result("projects", "get_project", &input, &result);
                }
                Err(_) => {
                    warn!(%project_path, "recorder lock poisoned, lookup not recorded");
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::StaticProjectLookup;
    use crate::cassette::format::Cassette;
    use crate::ports::projects::ProjectInfo;

    #[tokio::test]
    async fn records_found_and_missing_lookups() {
        let dir = std::env::temp_dir().join("slugpath_rec_projects_test");
        let path = dir.join("projects.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "memory")));

        {
            let inner = StaticProjectLookup::new().with_project(ProjectInfo {
                path: "/srv/data/widgets".into(),
                name: "widgets".into(),
                organization_slug: Some("acme".into()),
            });
            let lookup = RecordingProjectLookup::new(Box::new(inner), Arc::clone(&recorder));
            let found = lookup.get_project("/srv/data/widgets").await.unwrap();
            assert!(found.is_some());
            let missing = lookup.get_project("/nowhere").await.unwrap();
            assert!(missing.is_none());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input["project_path"], "/srv/data/widgets");
        assert_eq!(cassette.interactions[0].output["Ok"]["organizationSlug"], "acme");
        assert!(cassette.interactions[1].output["Ok"].is_null());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
