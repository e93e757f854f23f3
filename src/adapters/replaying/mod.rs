//! Replaying adapters that serve recorded interactions.

pub mod projects;

pub use projects::ReplayingProjectLookup;
