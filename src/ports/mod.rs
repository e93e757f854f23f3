//! Port traits defining external boundaries.
//!
//! The daemon that owns projects, organizations and issues lives outside
//! this crate; the only call this layer makes is a project lookup.
//! Implementations live in `src/adapters/`.

pub mod projects;

pub use projects::{LookupError, LookupFuture, ProjectInfo, ProjectLookup};
