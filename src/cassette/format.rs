//! On-disk cassette layout for recorded project lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded call to an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (e.g. "projects").
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments the port was called with.
    pub input: serde_json::Value,
    /// Result, encoded as `{"Ok": value}` or `{"Err": message}`.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When the recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Daemon URL the interactions were recorded against.
    #[serde(default)]
    pub daemon_url: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}
