//! Accumulates interactions and writes them out as a cassette.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use super::format::{Cassette, Interaction};

/// Records port interactions and writes them to a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    daemon_url: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path` on [`finish`](Self::finish).
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        daemon_url: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            daemon_url: daemon_url.into(),
            interactions: Vec::new(),
        }
    }

    /// Appends an interaction; `seq` is its position in the recording.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Appends a `Result` using the `{"Ok": v}` / `{"Err": message}` convention.
    ///
    /// Values that fail to serialize are logged and recorded as `null`; the
    /// call being observed still completes.
    pub fn record_result<I, T, E>(
        &mut self,
        port: &str,
        method: &str,
        input: &I,
        result: &Result<T, E>,
    ) where
        I: Serialize,
        T: Serialize,
        E: std::fmt::Display,
    {
        let input = to_value_or_null(port, method, "input", input);
        let output = match result {
            Ok(v) => serde_json::json!({ "Ok": to_value_or_null(port, method, "output", v) }),
            Err(e) => serde_json::json!({ "Err": e.to_string() }),
        };
        self.record(port, method, input, output);
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Writes the cassette to disk and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        self.write()
    }

    /// Writes everything recorded so far without ending the recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            daemon_url: self.daemon_url.clone(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}

fn to_value_or_null<T: Serialize>(
    port: &str,
    method: &str,
    field: &str,
    value: &T,
) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!(port, method, field, error = %e, "value not serializable, recording null");
        serde_json::Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_result_and_finish() {
        let dir = std::env::temp_dir().join("slugpath_recorder_test");
        let path = dir.join("nested").join("lookups.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "lookups", "http://daemon");
        let found: Result<Option<&str>, String> = Ok(Some("widgets"));
        let failed: Result<Option<&str>, String> = Err("connection refused".into());
        recorder.record_result("projects", "get_project", &json!({"project_path": "/a"}), &found);
        recorder.record_result("projects", "get_project", &json!({"project_path": "/b"}), &failed);
        assert_eq!(recorder.len(), 2);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "lookups");
        assert_eq!(cassette.daemon_url, "http://daemon");
        assert_eq!(cassette.interactions[0].seq, 0);
        assert_eq!(cassette.interactions[0].output, json!({"Ok": "widgets"}));
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[1].output, json!({"Err": "connection refused"}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn unserializable_values_are_recorded_as_null() {
        let mut recorder = CassetteRecorder::new("unused.yaml", "lookups", "memory");
        let ok: Result<Unserializable, String> = Ok(Unserializable);
        recorder.record_result("projects", "get_project", &Unserializable, &ok);

        assert_eq!(recorder.len(), 1);
        assert!(recorder.interactions[0].input.is_null());
        assert_eq!(recorder.interactions[0].output, json!({"Ok": null}));
    }
}
