//! Recording adapters that capture interactions to cassettes.

pub mod projects;

pub use projects::RecordingProjectLookup;
