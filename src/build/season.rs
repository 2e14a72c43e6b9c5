use super::{finish, slug_segment, tab_suffix};
use crate::core::{AssetsSubTab, QueryParams, SeasonAdminTab};
use crate::token::{EpisodeToken, SeasonToken};

/// Fields of a season page URL.
///
/// Numbers are taken as `i64` so callers can pass through whatever they
/// parsed; values a token cannot carry are handled by the builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonUrl<'a> {
    pub show_slug: &'a str,
    pub season_number: i64,
    pub episode_number: Option<i64>,
    pub tab: SeasonAdminTab,
    pub assets_sub_tab: AssetsSubTab,
    pub query: Option<&'a QueryParams>,
}

impl<'a> SeasonUrl<'a> {
    pub fn new(show_slug: &'a str, season_number: i64, tab: SeasonAdminTab) -> Self {
        Self {
            show_slug,
            season_number,
            tab,
            ..Self::default()
        }
    }
}

/// `/{slug}/s{N}[/e{E}]`, or `None` when the season is out of range or
/// there is no slug to anchor it.
pub(crate) fn season_root(show_slug: &str, season_number: i64, episode_number: Option<i64>) -> Option<String> {
    let season = SeasonToken::from_number(season_number)?;
    if show_slug.trim().is_empty() {
        return None;
    }
    let mut path = format!("{}/{season}", slug_segment(show_slug));
    if let Some(episode) = episode_number.and_then(EpisodeToken::from_number) {
        path.push('/');
        path.push_str(&episode.to_string());
    }
    Some(path)
}

/// The show's season index, used when a season URL cannot be built.
pub(crate) fn seasons_index(show_slug: &str) -> String {
    format!("{}/seasons", slug_segment(show_slug))
}

/// Canonical season page URL.
///
/// A season outside `1..=999` (or a missing slug) falls back to
/// `/{slug}/seasons`; an episode outside `1..=9999` is dropped.
pub fn build_season_admin_url(input: &SeasonUrl<'_>) -> String {
    let Some(mut path) = season_root(input.show_slug, input.season_number, input.episode_number)
    else {
        return finish(seasons_index(input.show_slug), input.query);
    };
    path.push_str(&tab_suffix(input.tab, input.assets_sub_tab));
    finish(path, input.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteSource;
    use crate::route::{parse_season_episode_number_from_path, parse_season_route_state};

    #[test]
    fn test_assets_videos_round_trip() {
        let url = build_season_admin_url(&SeasonUrl {
            assets_sub_tab: AssetsSubTab::Videos,
            ..SeasonUrl::new("rhoslc", 6, SeasonAdminTab::Assets)
        });
        assert_eq!(url, "/rhoslc/s6/assets/videos");

        let state = parse_season_route_state(&url, &QueryParams::new());
        assert_eq!(state.tab, SeasonAdminTab::Assets);
        assert_eq!(state.assets_sub_tab, AssetsSubTab::Videos);
        assert_eq!(state.source, RouteSource::Path);
    }

    #[test]
    fn test_invalid_season_falls_back_to_index() {
        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("abc", 0, SeasonAdminTab::Cast)),
            "/abc/seasons"
        );
        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("abc", -3, SeasonAdminTab::Overview)),
            "/abc/seasons"
        );
    }

    #[test]
    fn test_season_bounds() {
        let url = build_season_admin_url(&SeasonUrl::new("abc", 999, SeasonAdminTab::Cast));
        assert_eq!(url, "/abc/s999/cast");
        let state = parse_season_route_state(&url, &QueryParams::new());
        assert_eq!(state.tab, SeasonAdminTab::Cast);
        assert_eq!(state.source, RouteSource::Path);

        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("abc", 1000, SeasonAdminTab::Cast)),
            "/abc/seasons"
        );
    }

    #[test]
    fn test_episode_bounds() {
        let url = build_season_admin_url(&SeasonUrl {
            episode_number: Some(9999),
            ..SeasonUrl::new("abc", 6, SeasonAdminTab::Cast)
        });
        assert_eq!(url, "/abc/s6/e9999/cast");
        assert_eq!(parse_season_episode_number_from_path(&url), Some(9999));

        let url = build_season_admin_url(&SeasonUrl {
            episode_number: Some(10000),
            ..SeasonUrl::new("abc", 6, SeasonAdminTab::Cast)
        });
        assert_eq!(url, "/abc/s6/cast");
    }

    #[test]
    fn test_missing_slug_falls_back_to_index() {
        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("", 6, SeasonAdminTab::Cast)),
            "/seasons"
        );
        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("  ", 6, SeasonAdminTab::Overview)),
            "/seasons"
        );
    }

    #[test]
    fn test_overview_is_bare() {
        assert_eq!(
            build_season_admin_url(&SeasonUrl::new("abc", 6, SeasonAdminTab::Overview)),
            "/abc/s6"
        );
    }

    #[test]
    fn test_episode() {
        let url = build_season_admin_url(&SeasonUrl {
            episode_number: Some(3),
            ..SeasonUrl::new("abc", 6, SeasonAdminTab::Cast)
        });
        assert_eq!(url, "/abc/s6/e3/cast");
        assert_eq!(parse_season_episode_number_from_path(&url), Some(3));

        let url = build_season_admin_url(&SeasonUrl {
            episode_number: Some(0),
            ..SeasonUrl::new("abc", 6, SeasonAdminTab::Cast)
        });
        assert_eq!(url, "/abc/s6/cast");
    }

    #[test]
    fn test_query_is_cleaned() {
        let query = QueryParams::parse("tab=episodes&scope=season&page=2");
        let url = build_season_admin_url(&SeasonUrl {
            query: Some(&query),
            ..SeasonUrl::new("abc", 2, SeasonAdminTab::Episodes)
        });
        assert_eq!(url, "/abc/s2/episodes?page=2");
    }

    #[test]
    fn test_round_trip_every_tab() {
        for tab in SeasonAdminTab::ALL {
            let url = build_season_admin_url(&SeasonUrl::new("abc", 4, *tab));
            let state = parse_season_route_state(&url, &QueryParams::new());
            assert_eq!(state.tab, *tab, "{url}");
            assert_eq!(state.source, RouteSource::Path, "{url}");
        }
    }
}
