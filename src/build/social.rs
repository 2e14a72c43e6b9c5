//! Social-analytics URLs.
//!
//! Every builder here goes through [`SocialPathFilters::canonical_path_suffix`],
//! so a built URL and a parsed one can never disagree on the suffix.

use super::season::{season_root, seasons_index};
use super::{clean_legacy_routing_query, slug_segment};
use crate::core::QueryParams;
use crate::route::{SocialPathFilters, SocialScope};
use crate::token::{SeasonToken, SocialAnalyticsView, SocialPlatform, WeekToken};

/// Query key a few screens used for the analytics view before it moved
/// into the path.
const SOCIAL_VIEW_KEY: &str = "social_view";

/// Fields of a social tab URL, at either show or season scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialUrl<'a> {
    pub show_slug: &'a str,
    /// Show scope: an optional season filter. Season scope: the season.
    pub season_number: Option<i64>,
    /// Explicit view; falls back to `social_view` in the query, then official.
    pub view: Option<SocialAnalyticsView>,
    pub week_index: Option<i64>,
    pub platform: Option<SocialPlatform>,
    pub handle: Option<&'a str>,
    pub community: Option<&'a str>,
    pub query: Option<&'a QueryParams>,
}

/// One week of a season's social analytics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonSocialWeekUrl<'a> {
    pub show_slug: &'a str,
    pub season_number: i64,
    pub week_index: i64,
    pub view: Option<SocialAnalyticsView>,
    pub platform: Option<SocialPlatform>,
    pub handle: Option<&'a str>,
    pub query: Option<&'a QueryParams>,
}

/// The show's reddit view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowRedditUrl<'a> {
    pub show_slug: &'a str,
    pub season_number: Option<i64>,
    pub query: Option<&'a QueryParams>,
}

/// One reddit community under the show's reddit view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowRedditCommunityUrl<'a> {
    pub show_slug: &'a str,
    pub community: &'a str,
    pub season_number: Option<i64>,
    pub query: Option<&'a QueryParams>,
}

fn resolve_view(explicit: Option<SocialAnalyticsView>, query: Option<&QueryParams>) -> SocialAnalyticsView {
    explicit
        .or_else(|| query?.get(SOCIAL_VIEW_KEY).and_then(SocialAnalyticsView::parse))
        .unwrap_or_default()
}

fn filters(input: &SocialUrl<'_>, scope: SocialScope) -> SocialPathFilters {
    SocialPathFilters {
        scope,
        view: resolve_view(input.view, input.query),
        season_number: input
            .season_number
            .and_then(SeasonToken::from_number)
            .map(SeasonToken::number),
        week_index: input
            .week_index
            .and_then(WeekToken::from_index)
            .map(WeekToken::index),
        platform: input.platform,
        handle: input.handle.map(str::to_owned),
        community: input.community.map(str::to_owned),
    }
}

/// Social builders also drop `social_view`: the view now lives in the path.
fn finish_social(path: String, query: Option<&QueryParams>) -> String {
    match query {
        Some(query) => clean_legacy_routing_query(query)
            .without(&[SOCIAL_VIEW_KEY])
            .append_to(path),
        None => path,
    }
}

/// `/{slug}/social...` at show scope.
pub fn build_show_social_url(input: &SocialUrl<'_>) -> String {
    let suffix = filters(input, SocialScope::Show).canonical_path_suffix();
    finish_social(format!("{}{suffix}", slug_segment(input.show_slug)), input.query)
}

/// `/{slug}/s{N}/social...`; a missing or invalid season falls back to the
/// show's season index.
pub fn build_season_social_url(input: &SocialUrl<'_>) -> String {
    let root = input
        .season_number
        .and_then(|season| season_root(input.show_slug, season, None));
    let Some(root) = root else {
        return finish_social(seasons_index(input.show_slug), input.query);
    };
    let suffix = filters(input, SocialScope::Season).canonical_path_suffix();
    finish_social(format!("{root}{suffix}"), input.query)
}

/// `/{slug}/s{N}/social[/view]/w{week}[/platform][/account/handle]`.
pub fn build_season_social_week_url(input: &SeasonSocialWeekUrl<'_>) -> String {
    build_season_social_url(&SocialUrl {
        show_slug: input.show_slug,
        season_number: Some(input.season_number),
        view: input.view,
        week_index: Some(input.week_index),
        platform: input.platform,
        handle: input.handle,
        community: None,
        query: input.query,
    })
}

/// `/{slug}/social/reddit`.
pub fn build_show_reddit_url(input: &ShowRedditUrl<'_>) -> String {
    build_show_social_url(&SocialUrl {
        show_slug: input.show_slug,
        season_number: input.season_number,
        view: Some(SocialAnalyticsView::Reddit),
        query: input.query,
        ..SocialUrl::default()
    })
}

/// `/{slug}/social/reddit/{community}`.
pub fn build_show_reddit_community_url(input: &ShowRedditCommunityUrl<'_>) -> String {
    build_show_social_url(&SocialUrl {
        show_slug: input.show_slug,
        season_number: input.season_number,
        view: Some(SocialAnalyticsView::Reddit),
        community: Some(input.community),
        query: input.query,
        ..SocialUrl::default()
    })
}
