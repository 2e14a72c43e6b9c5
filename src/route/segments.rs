//! Segment extractor - locate the show/season/person anchor in a pathname.
//!
//! Three anchor shapes are recognized, tried in a fixed order (first match wins):
//!
//! ```text
//! 1. /shows/:slug/...              root-scoped canonical
//! 2. .../admin/trr-shows/:id/...   admin-scoped legacy
//! 3. /:slug/...                    bare canonical (root fallback)
//! ```
//!
//! Everything after the slug is the *base*: the tab-bearing segments.
//! Season anchors continue with `sN` (canonical) or `seasons/:n` (legacy),
//! optionally followed by an `eN` episode. Person anchors continue with
//! `people/:personSlug`, or the show slug itself is `people`.

use crate::core::{PathSegments, normalize_key};
use crate::token::{EpisodeToken, SeasonToken};

// ============================================================================
// Reserved Segments
// ============================================================================

/// First segments that can never be a bare show slug.
const RESERVED_ROOTS: &[&str] = &["admin", "api", "shows"];

/// Structural words that must not be swallowed as a bare handle.
pub const RESERVED_SEGMENTS: &[&str] = &[
    "account",
    "admin",
    "advanced",
    "assets",
    "bravo",
    "cast",
    "details",
    "episodes",
    "fandom",
    "hashtags",
    "news",
    "official",
    "overview",
    "people",
    "preseason",
    "reddit",
    "seasons",
    "sentiment",
    "settings",
    "shows",
    "social",
    "surveys",
    "trr-shows",
    "week",
];

// ============================================================================
// Show Anchor
// ============================================================================

/// Which anchor shape matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorShape {
    /// `/shows/:slug/...`
    RootScoped,
    /// `.../admin/trr-shows/:id/...`
    AdminScoped,
    /// `/:slug/...`
    Bare,
}

/// Returns the index of the slug segment when the shape matches.
type AnchorMatcher = fn(&[String]) -> Option<usize>;

/// Attempt order is load-bearing: season-vs-show disambiguation and
/// `/shows/...` links depend on it.
const ANCHOR_ATTEMPTS: &[(AnchorShape, AnchorMatcher)] = &[
    (AnchorShape::RootScoped, match_root_scoped),
    (AnchorShape::AdminScoped, match_admin_scoped),
    (AnchorShape::Bare, match_bare),
];

fn match_root_scoped(segments: &[String]) -> Option<usize> {
    let first = segments.first()?;
    (segments.len() >= 2 && normalize_key(first) == "shows").then_some(1)
}

fn match_admin_scoped(segments: &[String]) -> Option<usize> {
    let idx = segments.windows(2).position(|pair| {
        normalize_key(&pair[0]) == "admin" && normalize_key(&pair[1]) == "trr-shows"
    })?;
    let slug_idx = idx + 2;
    (slug_idx < segments.len()).then_some(slug_idx)
}

fn match_bare(segments: &[String]) -> Option<usize> {
    let first = segments.first()?;
    (!RESERVED_ROOTS.contains(&normalize_key(first).as_str())).then_some(0)
}

/// A located show anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowAnchor<'a> {
    pub shape: AnchorShape,
    pub slug: &'a str,
    pub base: &'a [String],
}

/// Try each anchor shape in priority order.
pub fn find_show_anchor(segments: &PathSegments) -> Option<ShowAnchor<'_>> {
    let all = segments.as_slice();
    ANCHOR_ATTEMPTS.iter().find_map(|(shape, matcher)| {
        let slug_idx = matcher(all)?;
        Some(ShowAnchor {
            shape: *shape,
            slug: &all[slug_idx],
            base: &all[slug_idx + 1..],
        })
    })
}

// ============================================================================
// Season Anchor
// ============================================================================

/// Season reference at the start of a show base: `(season, consumed)`.
fn season_prefix(base: &[String]) -> Option<(SeasonToken, usize)> {
    let first = base.first()?;
    if let Some(season) = SeasonToken::parse(first) {
        return Some((season, 1));
    }
    if normalize_key(first) == "seasons" {
        let season = base.get(1).and_then(|s| SeasonToken::parse_legacy_number(s))?;
        return Some((season, 2));
    }
    None
}

/// Base segments of a show-scoped path.
///
/// `None` when there is no anchor, or when the path is season-scoped, so
/// the show resolver never reads a season path as a show tab.
pub fn show_base_segments(segments: &PathSegments) -> Option<&[String]> {
    let anchor = find_show_anchor(segments)?;
    if season_prefix(anchor.base).is_some() {
        return None;
    }
    Some(anchor.base)
}

/// A located season anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonAnchor<'a> {
    pub show: ShowAnchor<'a>,
    pub season: SeasonToken,
    pub episode: Option<EpisodeToken>,
    /// Segments after the season (and episode, if present).
    pub base: &'a [String],
}

/// Locate `show/sN[/eN]` or `show/seasons/:n[/eN]`. The season must be > 0.
pub fn find_season_anchor(segments: &PathSegments) -> Option<SeasonAnchor<'_>> {
    let show = find_show_anchor(segments)?;
    let (season, consumed) = season_prefix(show.base)?;
    if !season.is_valid() {
        return None;
    }
    let rest = &show.base[consumed..];
    let episode = rest
        .first()
        .and_then(|s| EpisodeToken::parse(s))
        .filter(|e| e.is_valid());
    let base = if episode.is_some() { &rest[1..] } else { rest };
    Some(SeasonAnchor {
        show,
        season,
        episode,
        base,
    })
}

// ============================================================================
// Person Anchor
// ============================================================================

/// A located person anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonAnchor<'a> {
    pub show_slug: Option<&'a str>,
    pub person_slug: &'a str,
    pub base: &'a [String],
}

/// Locate `show/people/:slug` or a bare `people/:slug`.
pub fn find_person_anchor(segments: &PathSegments) -> Option<PersonAnchor<'_>> {
    let show = find_show_anchor(segments)?;
    if normalize_key(show.slug) == "people" {
        let (person_slug, base) = show.base.split_first()?;
        return Some(PersonAnchor {
            show_slug: None,
            person_slug,
            base,
        });
    }
    match show.base {
        [people, person_slug, base @ ..] if normalize_key(people) == "people" => {
            Some(PersonAnchor {
                show_slug: Some(show.slug),
                person_slug,
                base,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> PathSegments {
        PathSegments::from_pathname(path)
    }

    #[test]
    fn test_anchor_shapes() {
        let p = segs("/shows/rhoslc/cast");
        let anchor = find_show_anchor(&p).unwrap();
        assert_eq!(anchor.shape, AnchorShape::RootScoped);
        assert_eq!(anchor.slug, "rhoslc");
        assert_eq!(anchor.base, ["cast"]);

        let p = segs("/admin/trr-shows/abc-123/gallery");
        let anchor = find_show_anchor(&p).unwrap();
        assert_eq!(anchor.shape, AnchorShape::AdminScoped);
        assert_eq!(anchor.slug, "abc-123");
        assert_eq!(anchor.base, ["gallery"]);

        let p = segs("/rhoslc/s6");
        let anchor = find_show_anchor(&p).unwrap();
        assert_eq!(anchor.shape, AnchorShape::Bare);
        assert_eq!(anchor.slug, "rhoslc");
    }

    #[test]
    fn test_anchor_priority_root_scoped_first() {
        // `/shows/...` wins even when an admin anchor appears later
        let p = segs("/shows/admin/trr-shows/x");
        let anchor = find_show_anchor(&p).unwrap();
        assert_eq!(anchor.shape, AnchorShape::RootScoped);
        assert_eq!(anchor.slug, "admin");
    }

    #[test]
    fn test_admin_anchor_anywhere() {
        let p = segs("/app/admin/trr-shows/abc/cast");
        let anchor = find_show_anchor(&p).unwrap();
        assert_eq!(anchor.shape, AnchorShape::AdminScoped);
        assert_eq!(anchor.slug, "abc");
    }

    #[test]
    fn test_reserved_roots_are_not_slugs() {
        assert!(find_show_anchor(&segs("/admin/trr-shows")).is_none());
        assert!(find_show_anchor(&segs("/admin")).is_none());
        assert!(find_show_anchor(&segs("/shows")).is_none());
        assert!(find_show_anchor(&segs("/")).is_none());
    }

    #[test]
    fn test_show_base_rejects_season_paths() {
        assert_eq!(show_base_segments(&segs("/abc/s6/cast")), None);
        assert_eq!(show_base_segments(&segs("/admin/trr-shows/abc/seasons/4")), None);
        assert_eq!(show_base_segments(&segs("/abc/seasons")).unwrap(), ["seasons"]);
        assert!(show_base_segments(&segs("/abc")).unwrap().is_empty());
    }

    #[test]
    fn test_season_anchor_canonical_and_legacy() {
        let p = segs("/abc/s6/e3/cast");
        let anchor = find_season_anchor(&p).unwrap();
        assert_eq!(anchor.season, SeasonToken(6));
        assert_eq!(anchor.episode, Some(EpisodeToken(3)));
        assert_eq!(anchor.base, ["cast"]);

        let p = segs("/admin/trr-shows/abc/seasons/4/assets/brand");
        let anchor = find_season_anchor(&p).unwrap();
        assert_eq!(anchor.season, SeasonToken(4));
        assert_eq!(anchor.episode, None);
        assert_eq!(anchor.base, ["assets", "brand"]);
    }

    #[test]
    fn test_season_anchor_requires_positive_season() {
        assert!(find_season_anchor(&segs("/abc/s0/cast")).is_none());
        assert!(find_season_anchor(&segs("/abc/seasons")).is_none());
        assert!(find_season_anchor(&segs("/abc/cast")).is_none());
    }

    #[test]
    fn test_person_anchor() {
        let p = segs("/admin/trr-shows/rhoslc/people/meredith-marks/overview");
        let anchor = find_person_anchor(&p).unwrap();
        assert_eq!(anchor.show_slug, Some("rhoslc"));
        assert_eq!(anchor.person_slug, "meredith-marks");
        assert_eq!(anchor.base, ["overview"]);

        let p = segs("/admin/trr-shows/people/7f528757-5017");
        let anchor = find_person_anchor(&p).unwrap();
        assert_eq!(anchor.show_slug, None);
        assert_eq!(anchor.person_slug, "7f528757-5017");
        assert!(anchor.base.is_empty());

        let p = segs("/people/lisa-barlow--1a2b3c4d/gallery");
        let anchor = find_person_anchor(&p).unwrap();
        assert_eq!(anchor.person_slug, "lisa-barlow--1a2b3c4d");
        assert_eq!(anchor.base, ["gallery"]);

        assert!(find_person_anchor(&segs("/rhoslc/people")).is_none());
        assert!(find_person_anchor(&segs("/rhoslc/cast")).is_none());
    }
}
