//! Reserved route tokens and route segment encoding.
//!
//! Organization and project names are percent-encoded into their segments.
//! An organization whose slug equals the ungrouped marker or a root route
//! has its first character escaped as well, so the raw segment can never be
//! mistaken for either.

use std::borrow::Cow;

use thiserror::Error;

/// Token written in the organization position of a route when the project
/// has no organization.
pub const UNGROUPED_MARKER: &str = "_";

/// Top-level route segments that are never an organization slug.
///
/// Kept by hand in sync with the application's top-level route table.
pub const ROOT_ROUTES: &[&str] = &["organizations", "settings", "archived", "assets", "project"];

/// Returns `true` if `segment` is one of the reserved top-level routes.
#[must_use]
pub fn is_root_route(segment: &str) -> bool {
    ROOT_ROUTES.contains(&segment)
}

/// Percent-encodes a name for use as a single route segment.
#[must_use]
pub fn encode_segment(name: &str) -> Cow<'_, str> {
    urlencoding::encode(name)
}

/// Decodes a percent-encoded route segment.
///
/// Escapes that do not decode to UTF-8 are kept as written.
#[must_use]
pub fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}

/// Encodes an optional organization slug into its route segment.
///
/// `None` and the empty slug both encode to [`UNGROUPED_MARKER`].
#[must_use]
pub fn encode_org_segment(organization_slug: Option<&str>) -> Cow<'_, str> {
    match organization_slug {
        Some(slug) if slug == UNGROUPED_MARKER || is_root_route(slug) => {
            Cow::Owned(escape_first_char(slug))
        }
        Some(slug) if !slug.is_empty() => encode_segment(slug),
        _ => Cow::Borrowed(UNGROUPED_MARKER),
    }
}

/// Decodes an organization route segment; the marker decodes to `None`.
///
/// The marker test runs on the raw segment, so an escaped `%5F` decodes to
/// an organization literally named `_`.
#[must_use]
pub fn decode_org_segment(segment: &str) -> Option<String> {
    if segment == UNGROUPED_MARKER {
        None
    } else {
        Some(decode_segment(segment))
    }
}

fn escape_first_char(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) if first.is_ascii() => {
            format!("%{:02X}{}", u32::from(first), encode_segment(chars.as_str()))
        }
        _ => encode_segment(slug).into_owned(),
    }
}

/// Reasons an organization slug cannot be used in routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// The slug is empty.
    #[error("organization slug must not be empty")]
    Empty,
    /// The slug contains a character outside `[a-z0-9-]`.
    #[error("organization slug {slug:?} contains invalid character {found:?}")]
    InvalidCharacter {
        /// The rejected slug.
        slug: String,
        /// The first offending character.
        found: char,
    },
    /// The slug is the ungrouped marker.
    #[error("organization slug {0:?} is reserved for ungrouped projects")]
    UngroupedMarker(String),
    /// The slug shadows a top-level route.
    #[error("organization slug {0:?} collides with a top-level route")]
    RootRoute(String),
}

/// Checks that `slug` is a well-formed organization slug that does not
/// shadow a reserved token.
///
/// Meant for the write boundary (organization creation). Routes for such
/// slugs still encode unambiguously, but a hand-typed URL would not reach
/// them.
///
/// # Errors
///
/// Returns a [`SlugError`] describing the first rule the slug breaks.
pub fn validate_org_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug == UNGROUPED_MARKER {
        return Err(SlugError::UngroupedMarker(slug.to_string()));
    }
    if let Some(found) =
        slug.chars().find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugError::InvalidCharacter { slug: slug.to_string(), found });
    }
    if is_root_route(slug) {
        return Err(SlugError::RootRoute(slug.to_string()));
    }
    Ok(())
}
