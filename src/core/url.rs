//! Decoded path segments and the encode/decode boundary.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode per segment on input, encode per segment on output

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::QueryParams;

/// Characters `encodeURIComponent` leaves alone, everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decoded, non-empty components of a pathname.
///
/// Invariants:
/// - Query string and fragment are never part of the segments
/// - Each segment is decoded independently; invalid UTF-8 keeps the raw text
/// - No segment is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    /// Split a browser pathname (query and fragment are stripped first).
    pub fn from_pathname(pathname: &str) -> Self {
        let path = pathname.split(['?', '#']).next().unwrap_or(pathname);
        Self(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(decode_segment)
                .collect(),
        )
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }
}

/// Percent-decode one segment, falling back to the raw text.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Encode a single path component the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Trimmed, lowercased key used for every case-insensitive comparison.
#[inline]
pub fn normalize_key(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Split an href such as `/abc/cast?tab=social#top` into pathname and query.
pub fn split_location(href: &str) -> (&str, QueryParams) {
    let without_fragment = href.split('#').next().unwrap_or(href);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, QueryParams::parse(query)),
        None => (without_fragment, QueryParams::new()),
    }
}
