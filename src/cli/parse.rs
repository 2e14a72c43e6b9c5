//! `parse` command: everything the route grammar can read from one URL.

use serde::Serialize;
use trr_routes::build::humanize_person_slug;
use trr_routes::core::{PathSegments, split_location};
use trr_routes::route::segments::{find_person_anchor, find_season_anchor, find_show_anchor};
use trr_routes::route::{
    PersonRouteState, SeasonCastRouteState, SeasonRouteState, ShowCastRouteState, ShowRouteState,
    SocialPathFilters, parse_person_route_state, parse_season_cast_route_state,
    parse_season_route_state, parse_season_social_path_filters, parse_show_cast_route_state,
    parse_show_route_state, parse_show_social_path_filters,
};
use trr_routes::{SeasonAdminTab, ShowAdminTab, SocialAnalyticsView};

/// Resolved state of a URL. Hierarchies that do not apply are `None`.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub pathname: String,
    pub show_slug: Option<String>,
    pub show: Option<ShowRouteState>,
    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,
    pub season: Option<SeasonRouteState>,
    pub person_slug: Option<String>,
    pub person_name: Option<String>,
    pub person: Option<PersonRouteState>,
    pub social_view: Option<SocialAnalyticsView>,
    pub social: Option<SocialPathFilters>,
    pub show_cast: Option<ShowCastRouteState>,
    pub season_cast: Option<SeasonCastRouteState>,
}

/// Resolve `href` against every hierarchy.
///
/// A person path is reported only as a person; a season path only as a
/// season. The show state is reported for everything else under a show.
pub fn parse_url(href: &str) -> ParseReport {
    let (pathname, query) = split_location(href);
    let segments = PathSegments::from_pathname(pathname);

    let show_anchor = find_show_anchor(&segments);
    let season_anchor = find_season_anchor(&segments);
    let person_anchor = find_person_anchor(&segments);

    let person = person_anchor.map(|_| parse_person_route_state(pathname, &query));
    let season = match (&person, season_anchor) {
        (None, Some(_)) => Some(parse_season_route_state(pathname, &query)),
        _ => None,
    };
    let show = match (&person, &season, show_anchor) {
        (None, None, Some(_)) => Some(parse_show_route_state(pathname, &query)),
        _ => None,
    };

    let social = parse_season_social_path_filters(pathname)
        .or_else(|| parse_show_social_path_filters(pathname));

    let show_cast = show
        .filter(|state| state.tab == ShowAdminTab::Cast)
        .map(|_| parse_show_cast_route_state(&query));
    let season_cast = season
        .filter(|state| state.tab == SeasonAdminTab::Cast)
        .map(|_| parse_season_cast_route_state(&query));

    ParseReport {
        pathname: pathname.to_owned(),
        show_slug: person_anchor
            .map(|anchor| anchor.show_slug)
            .unwrap_or_else(|| show_anchor.map(|anchor| anchor.slug))
            .map(str::to_owned),
        show,
        season_number: season_anchor.map(|anchor| anchor.season.number()),
        episode_number: season_anchor.and_then(|anchor| anchor.episode.map(|e| e.number())),
        season,
        person_slug: person_anchor.map(|anchor| anchor.person_slug.to_owned()),
        person_name: person_anchor.map(|anchor| humanize_person_slug(anchor.person_slug)),
        person,
        social_view: social.as_ref().map(|filters| filters.view),
        social,
        show_cast,
        season_cast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trr_routes::{AssetsSubTab, PersonAdminTab, RouteSource};

    #[test]
    fn test_legacy_season_url() {
        let report = parse_url("/admin/trr-shows/rhoslc/seasons/4?tab=media");
        assert_eq!(report.pathname, "/admin/trr-shows/rhoslc/seasons/4");
        assert_eq!(report.show_slug.as_deref(), Some("rhoslc"));
        assert_eq!(report.season_number, Some(4));
        assert!(report.show.is_none());

        let season = report.season.unwrap();
        assert_eq!(season.tab, SeasonAdminTab::Assets);
        assert_eq!(season.assets_sub_tab, AssetsSubTab::Images);
        assert_eq!(season.source, RouteSource::Query);
    }

    #[test]
    fn test_person_url() {
        let report = parse_url("/rhoslc/people/meredith-marks--7f528757/gallery");
        assert_eq!(report.show_slug.as_deref(), Some("rhoslc"));
        assert_eq!(report.person_name.as_deref(), Some("Meredith Marks"));
        assert_eq!(report.person.unwrap().tab, PersonAdminTab::Gallery);
        assert!(report.show.is_none());
        assert!(report.season.is_none());
    }

    #[test]
    fn test_social_and_cast() {
        let report = parse_url("/abc/s6/e2/social/bravo/w1#top");
        assert_eq!(report.episode_number, Some(2));
        assert_eq!(report.social_view, Some(SocialAnalyticsView::Official));
        assert_eq!(report.social.unwrap().week_token().as_deref(), Some("w1"));

        let report = parse_url("/abc/cast?cast_sort=name");
        assert!(report.show_cast.is_some());
        assert!(report.season_cast.is_none());
    }

    #[test]
    fn test_no_anchor() {
        let report = parse_url("/admin");
        assert!(report.show_slug.is_none());
        assert!(report.show.is_none());
        assert!(report.season.is_none());
        assert!(report.person.is_none());
    }
}
