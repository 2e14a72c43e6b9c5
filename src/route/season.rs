//! Season page route state.

use serde::Serialize;

use super::segments::find_season_anchor;
use super::{resolve_path_tab, resolve_query_tab};
use crate::alias::{season_tab_by_path_segment, season_tab_by_query};
use crate::core::{AssetsSubTab, PathSegments, QueryParams, RouteSource, SeasonAdminTab};
use crate::debug;

/// Normalized season page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonRouteState {
    pub tab: SeasonAdminTab,
    pub assets_sub_tab: AssetsSubTab,
    pub source: RouteSource,
}

impl SeasonRouteState {
    const fn new(tab: SeasonAdminTab, assets_sub_tab: AssetsSubTab, source: RouteSource) -> Self {
        Self {
            tab,
            assets_sub_tab,
            source,
        }
    }
}

/// Resolve the season tab from a pathname and its query.
///
/// A season anchor with no recognizable tab segment (`/abc/s6`) is the
/// season's overview page, reported as [`RouteSource::Path`] because the
/// path alone identified it. The legacy query is still consulted first.
pub fn parse_season_route_state(pathname: &str, query: &QueryParams) -> SeasonRouteState {
    let segments = PathSegments::from_pathname(pathname);
    let anchor = find_season_anchor(&segments);

    if let Some(anchor) = &anchor
        && let Some((tab, sub_tab)) = resolve_path_tab(anchor.base, season_tab_by_path_segment)
    {
        debug!("route"; "season {} tab `{}` from path", anchor.season, tab);
        return SeasonRouteState::new(tab, sub_tab, RouteSource::Path);
    }

    if let Some((tab, sub_tab)) = resolve_query_tab(query, season_tab_by_query) {
        debug!("route"; "season tab `{}` from legacy query", tab);
        return SeasonRouteState::new(tab, sub_tab, RouteSource::Query);
    }

    let source = match anchor {
        Some(_) => RouteSource::Path,
        None => RouteSource::Default,
    };
    SeasonRouteState::new(SeasonAdminTab::Overview, AssetsSubTab::Images, source)
}

/// Episode number peeled off right after the season segment (`/abc/s6/e3`).
pub fn parse_season_episode_number_from_path(pathname: &str) -> Option<u32> {
    let segments = PathSegments::from_pathname(pathname);
    find_season_anchor(&segments)?.episode.map(|e| e.number())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str, query: &str) -> SeasonRouteState {
        parse_season_route_state(path, &QueryParams::parse(query))
    }

    #[test]
    fn test_bare_season_root() {
        assert_eq!(
            parse("/abc/s6", ""),
            SeasonRouteState::new(SeasonAdminTab::Overview, AssetsSubTab::Images, RouteSource::Path)
        );
        assert_eq!(
            parse("/admin/trr-shows/rhoslc/seasons/4", "").source,
            RouteSource::Path
        );
    }

    #[test]
    fn test_assets_path() {
        let state = parse("/rhoslc/s6/assets/videos", "");
        assert_eq!(
            state,
            SeasonRouteState::new(SeasonAdminTab::Assets, AssetsSubTab::Videos, RouteSource::Path)
        );

        let state = parse("/admin/trr-shows/rhoslc/seasons/4/assets/brand", "");
        assert_eq!(state.assets_sub_tab, AssetsSubTab::Branding);
    }

    #[test]
    fn test_query_fallback() {
        let state = parse("/admin/trr-shows/rhoslc/seasons/4", "tab=media");
        assert_eq!(
            state,
            SeasonRouteState::new(SeasonAdminTab::Assets, AssetsSubTab::Images, RouteSource::Query)
        );

        assert_eq!(parse("/rhoslc/s4", "tab=fandom").tab, SeasonAdminTab::Fandom);
        assert_eq!(parse("/rhoslc/s4", "tab=details").tab, SeasonAdminTab::Overview);
        assert_eq!(parse("/rhoslc/s4", "tab=details").source, RouteSource::Query);
    }

    #[test]
    fn test_episode_does_not_hide_tab() {
        let state = parse("/rhoslc/s6/e3/cast", "");
        assert_eq!(state.tab, SeasonAdminTab::Cast);
        assert_eq!(state.source, RouteSource::Path);
    }

    #[test]
    fn test_not_a_season_path() {
        assert_eq!(parse("/rhoslc/cast", "").source, RouteSource::Default);
        assert_eq!(parse("/rhoslc/s0/cast", "").source, RouteSource::Default);
        assert_eq!(parse("", "").tab, SeasonAdminTab::Overview);
    }

    #[test]
    fn test_path_wins_over_query() {
        let state = parse("/rhoslc/s6/surveys", "tab=cast");
        assert_eq!(state.tab, SeasonAdminTab::Surveys);
    }

    #[test]
    fn test_episode_number() {
        assert_eq!(parse_season_episode_number_from_path("/abc/s6/e3"), Some(3));
        assert_eq!(parse_season_episode_number_from_path("/abc/s6/e3/social"), Some(3));
        assert_eq!(
            parse_season_episode_number_from_path("/admin/trr-shows/abc/seasons/6/e12"),
            Some(12)
        );
        assert_eq!(parse_season_episode_number_from_path("/abc/s6/cast"), None);
        assert_eq!(parse_season_episode_number_from_path("/abc/s6/e0"), None);
        assert_eq!(parse_season_episode_number_from_path("/abc/e3"), None);
    }
}
