//! Live adapter for the `ProjectLookup` port using the daemon's HTTP API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::projects::{LookupError, LookupFuture, ProjectInfo, ProjectLookup};

/// Path of the lookup endpoint, relative to the daemon base URL.
const LOOKUP_ENDPOINT: &str = "/projects/lookup";

/// Live project lookup that calls the daemon.
pub struct LiveProjectLookup {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl LiveProjectLookup {
    /// Creates a lookup against the daemon at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), timeout }
    }

    fn endpoint(&self) -> String {
        format!("{}{LOOKUP_ENDPOINT}", self.base_url.trim_end_matches('/'))
    }
}

/// Request body sent to the lookup endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    project_path: &'a str,
}

/// Error body returned by the daemon.
#[derive(Deserialize)]
struct DaemonError {
    error: String,
}

impl ProjectLookup for LiveProjectLookup {
    fn get_project(&self, project_path: &str) -> LookupFuture<'_> {
        let project_path = project_path.to_string();

        Box::pin(async move {
            let url = self.endpoint();
            debug!(%url, project_path = %project_path, "looking up project");

            let response = self
                .client
                .post(&url)
                .timeout(self.timeout)
                .json(&LookupRequest { project_path: &project_path })
                .send()
                .await
                .map_err(|e| LookupError::Transport(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let body = response.text().await.map_err(|e| LookupError::Transport(e.to_string()))?;

            if !status.is_success() {
                let message = serde_json::from_str::<DaemonError>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(LookupError::Daemon { status: status.as_u16(), message });
            }

            serde_json::from_str::<ProjectInfo>(&body)
                .map(Some)
                .map_err(|e| LookupError::Decode(e.to_string()))
        })
    }
}
