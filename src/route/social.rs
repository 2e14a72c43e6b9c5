//! Social-analytics filters under the `social` tab.
//!
//! The walk over the segments after `social` is strictly ordered:
//!
//! ```text
//! [sN]            show scope only
//! [view]          bravo -> official, official/reddit -> reddit
//! [wN | week/N]   preseason -> w0
//! [platform]
//! [account/handle | handle]
//! ```
//!
//! A `reddit` view ends the walk after an optional community segment.
//! Anything unrecognized stops the walk; what was read so far is kept.

use std::fmt::Write as _;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::segments::{RESERVED_SEGMENTS, find_season_anchor, show_base_segments};
use crate::core::{PathSegments, normalize_key};
use crate::debug;
use crate::token::{
    SeasonToken, SocialAnalyticsView, SocialPlatform, Token, WeekToken, normalize_community_slug,
    normalize_handle_slug,
};

// ============================================================================
// Filter Types
// ============================================================================

/// Whether the social tab hangs off a show or a season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialScope {
    #[default]
    Show,
    Season,
}

/// Resolved social filters.
///
/// The week token and the canonical suffix are computed from the fields,
/// so they can never disagree with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialPathFilters {
    pub scope: SocialScope,
    pub view: SocialAnalyticsView,
    /// Season filter for show scope; the anchor's season for season scope.
    pub season_number: Option<u32>,
    pub week_index: Option<u32>,
    pub platform: Option<SocialPlatform>,
    pub handle: Option<String>,
    /// Reddit community, only meaningful for the reddit view.
    pub community: Option<String>,
}

impl SocialPathFilters {
    fn week(&self) -> Option<WeekToken> {
        self.week_index.and_then(|n| WeekToken::from_index(n.into()))
    }

    /// `w{n}` for the selected week.
    pub fn week_token(&self) -> Option<String> {
        self.week().map(|week| week.to_string())
    }

    /// Minimal canonical path fragment, starting at `/social`.
    ///
    /// Season scope omits the season: it already lives in the anchor.
    pub fn canonical_path_suffix(&self) -> String {
        let mut out = String::from("/social");

        if self.scope == SocialScope::Show
            && let Some(season) = self.season_number.and_then(|n| SeasonToken::from_number(n.into()))
        {
            let _ = write!(out, "/{season}");
        }

        if self.view.is_reddit() {
            out.push_str("/reddit");
            if let Some(community) = self.community.as_deref().and_then(normalize_community_slug) {
                let _ = write!(out, "/{community}");
            }
            return out;
        }

        if self.view != SocialAnalyticsView::Official {
            let _ = write!(out, "/{}", self.view);
        }
        if let Some(week) = self.week() {
            let _ = write!(out, "/{week}");
        }
        if let Some(platform) = self.platform {
            let _ = write!(out, "/{platform}");
        }
        if let Some(handle) = self.handle.as_deref().and_then(normalize_handle_slug) {
            match self.view {
                SocialAnalyticsView::Official => {
                    let _ = write!(out, "/account/{handle}");
                }
                _ => {
                    let _ = write!(out, "/{handle}");
                }
            }
        }
        out
    }
}

impl Serialize for SocialPathFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SocialPathFilters", 9)?;
        state.serialize_field("scope", &self.scope)?;
        state.serialize_field("view", &self.view)?;
        state.serialize_field("season_number", &self.season_number)?;
        state.serialize_field("week_token", &self.week_token())?;
        state.serialize_field("week_index", &self.week_index)?;
        state.serialize_field("platform", &self.platform)?;
        state.serialize_field("handle", &self.handle)?;
        state.serialize_field("community", &self.community)?;
        state.serialize_field("canonical_path_suffix", &self.canonical_path_suffix())?;
        state.end()
    }
}

// ============================================================================
// Path Walk
// ============================================================================

/// Could this segment be a legacy bare handle?
fn is_bare_handle(segment: &str) -> bool {
    let key = normalize_key(segment);
    !RESERVED_SEGMENTS.contains(&key.as_str()) && Token::classify(&key).is_none()
}

/// Cursor over the segments after `social`.
struct Walk<'a> {
    rest: &'a [String],
}

impl<'a> Walk<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.rest.first().map(String::as_str)
    }

    fn peek_key(&self) -> Option<String> {
        self.peek().map(normalize_key)
    }

    fn advance(&mut self, n: usize) {
        self.rest = &self.rest[n.min(self.rest.len())..];
    }

    fn take_if<T>(&mut self, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let value = parse(self.peek()?)?;
        self.advance(1);
        Some(value)
    }
}

fn walk_social(rest: &[String], scope: SocialScope, anchor_season: Option<u32>) -> SocialPathFilters {
    let mut walk = Walk { rest };
    let mut filters = SocialPathFilters {
        scope,
        season_number: anchor_season,
        ..SocialPathFilters::default()
    };

    if scope == SocialScope::Show
        && let Some(season) = walk.take_if(SeasonToken::parse)
    {
        filters.season_number = season.is_valid().then_some(season.number());
    }

    if let Some(view) = walk.take_if(SocialAnalyticsView::parse) {
        filters.view = view;
        if view == SocialAnalyticsView::Official && walk.peek_key().as_deref() == Some("reddit") {
            walk.advance(1);
            filters.view = SocialAnalyticsView::Reddit;
        }
    }
    if filters.view.is_reddit() {
        filters.community = walk.peek().and_then(normalize_community_slug);
        return filters;
    }

    if let Some(week) = walk.take_if(WeekToken::parse) {
        filters.week_index = Some(week.index());
    } else if walk.peek_key().as_deref() == Some("week")
        && let Some(week) = walk.rest.get(1).and_then(|s| WeekToken::parse_legacy_index(s))
    {
        walk.advance(2);
        filters.week_index = Some(week.index());
    }

    filters.platform = walk.take_if(SocialPlatform::parse);

    match walk.peek_key().as_deref() {
        Some("account") => {
            filters.handle = walk.rest.get(1).and_then(|s| normalize_handle_slug(s));
        }
        Some(_) => {
            filters.handle = walk
                .peek()
                .filter(|s| is_bare_handle(s))
                .and_then(normalize_handle_slug);
        }
        None => {}
    }

    filters
}

// ============================================================================
// Public API
// ============================================================================

/// Social filters for a show-scoped path (`/abc/social/...`).
pub fn parse_show_social_path_filters(pathname: &str) -> Option<SocialPathFilters> {
    let segments = PathSegments::from_pathname(pathname);
    let base = show_base_segments(&segments)?;
    let (first, rest) = base.split_first()?;
    if normalize_key(first) != "social" {
        return None;
    }
    let filters = walk_social(rest, SocialScope::Show, None);
    debug!("social"; "show filters {}", filters.canonical_path_suffix());
    Some(filters)
}

/// Social filters for a season-scoped path (`/abc/s6/social/...`).
pub fn parse_season_social_path_filters(pathname: &str) -> Option<SocialPathFilters> {
    let segments = PathSegments::from_pathname(pathname);
    let anchor = find_season_anchor(&segments)?;
    let (first, rest) = anchor.base.split_first()?;
    if normalize_key(first) != "social" {
        return None;
    }
    let filters = walk_social(rest, SocialScope::Season, Some(anchor.season.number()));
    debug!("social"; "season {} filters {}", anchor.season, filters.canonical_path_suffix());
    Some(filters)
}

/// View implied by a social path; `None` when the path is not under `social`.
pub fn parse_social_analytics_view_from_path(pathname: &str) -> Option<SocialAnalyticsView> {
    parse_season_social_path_filters(pathname)
        .or_else(|| parse_show_social_path_filters(pathname))
        .map(|filters| filters.view)
}
