//! Route context extraction.
//!
//! Answers "which organization and project are we looking at" from the
//! navigation framework's structured parameters or, failing that, from the
//! raw URL path. The ungrouped marker and the reserved root routes live in
//! [`reserved`]; nothing outside this module and [`crate::link`] should ever
//! see the marker string.

pub mod extract;
pub mod reserved;

pub use extract::{extract_context, path_segments, RouteContext, RouteParams};
pub use reserved::{
    decode_org_segment, decode_segment, encode_org_segment, encode_segment, is_root_route,
    validate_org_slug, SlugError, ROOT_ROUTES, UNGROUPED_MARKER,
};
