//! Service context bundling the external port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::adapters::live::projects::LiveProjectLookup;
use crate::adapters::recording::projects::RecordingProjectLookup;
use crate::adapters::replaying::projects::ReplayingProjectLookup;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::{AppConfig, LookupMode};
use crate::ports::projects::ProjectLookup;
use crate::resolve::TargetResolver;

/// Bundles the port trait objects commands need.
///
/// Constructors wire up live, recording, or replaying adapters.
pub struct ServiceContext {
    /// Project lookup through the daemon.
    pub projects: Box<dyn ProjectLookup>,
    /// Cassette recorder, written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Wires adapters according to `config.mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        match &config.mode {
            LookupMode::Live => Ok(Self::live(config)),
            LookupMode::Record(path) => Ok(Self::recording(config, path)),
            LookupMode::Replay(path) => Self::replaying(path),
        }
    }

    /// Creates a context that talks to the daemon directly.
    #[must_use]
    pub fn live(config: &AppConfig) -> Self {
        Self::with_lookup(Box::new(LiveProjectLookup::new(&config.daemon_url, config.timeout)))
    }

    /// Creates a context that talks to the daemon and records every lookup
    /// to a cassette at `path` when dropped.
    #[must_use]
    pub fn recording(config: &AppConfig, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            cassette_name(path),
            &config.daemon_url,
        )));
        let live = Box::new(LiveProjectLookup::new(&config.daemon_url, config.timeout));
        Self {
            projects: Box::new(RecordingProjectLookup::new(live, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that serves lookups from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        info!(
            cassette = %path.display(),
            interactions = cassette.interactions.len(),
            "replaying lookups"
        );
        Ok(Self::with_lookup(Box::new(ReplayingProjectLookup::new(CassetteReplayer::new(
            &cassette,
        )))))
    }

    /// Creates a context around an arbitrary lookup.
    #[must_use]
    pub fn with_lookup(projects: Box<dyn ProjectLookup>) -> Self {
        Self { projects, recorder: None }
    }

    /// Returns a resolver over this context's project lookup.
    #[must_use]
    pub fn resolver(&self) -> TargetResolver<'_> {
        TargetResolver::new(self.projects.as_ref())
    }

    /// Writes the cassette if this context is recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(mut self) -> Result<Option<PathBuf>, String> {
        self.finish_recording()
    }

    fn finish_recording(&mut self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder.take() else {
            return Ok(None);
        };
        let recorder = recorder.lock().map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.write().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.finish_recording() {
            warn!(error = %e, "failed to write cassette");
        }
    }
}

fn cassette_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "slugpath-session".to_string(), |s| s.to_string_lossy().into_owned())
}
