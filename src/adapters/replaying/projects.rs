//! Replaying adapter for the `ProjectLookup` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::projects::{LookupError, LookupFuture, ProjectInfo, ProjectLookup};

/// Serves recorded project lookups from a cassette.
pub struct ReplayingProjectLookup {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingProjectLookup {
    /// Creates a replaying lookup backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next(&self) -> Result<Option<ProjectInfo>, LookupError> {
        let mut replayer =
            self.replayer.lock().map_err(|_| LookupError::Replay("replayer lock poisoned".into()))?;
        replayer
            .next_result::<Option<ProjectInfo>>("projects", "get_project")
            .map_err(|e| LookupError::Replay(e.to_string()))?
            .map_err(LookupError::Replay)
    }
}

impl ProjectLookup for ReplayingProjectLookup {
    fn get_project(&self, _project_path: &str) -> LookupFuture<'_> {
        let result = self.next();
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn lookup(outputs: Vec<serde_json::Value>) -> ReplayingProjectLookup {
        let interactions = outputs
            .into_iter()
            .enumerate()
            .map(|(i, output)| Interaction {
                seq: i as u64,
                port: "projects".into(),
                method: "get_project".into(),
                input: json!({}),
                output,
            })
            .collect();
        ReplayingProjectLookup::new(CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            daemon_url: String::new(),
            interactions,
        }))
    }

    #[tokio::test]
    async fn replays_found_missing_and_failed_lookups() {
        let lookup = lookup(vec![
            json!({"Ok": {"path": "/srv/w", "name": "w", "organizationSlug": null}}),
            json!({"Ok": null}),
            json!({"Err": "project lookup request failed: refused"}),
        ]);

        let found = lookup.get_project("/srv/w").await.unwrap().unwrap();
        assert_eq!(found.name, "w");
        assert_eq!(found.organization_slug, None);

        assert!(lookup.get_project("/srv/x").await.unwrap().is_none());

        let err = lookup.get_project("/srv/y").await.unwrap_err();
        assert!(err.to_string().contains("refused"));
    }

    #[tokio::test]
    async fn exhausted_cassette_is_replay_error() {
        let lookup = lookup(vec![]);
        let err = lookup.get_project("/srv/w").await.unwrap_err();
        assert!(matches!(err, LookupError::Replay(_)));
    }
}
