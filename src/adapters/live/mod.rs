//! Live adapters for real external interactions.

pub mod projects;

pub use projects::LiveProjectLookup;
