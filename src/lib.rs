//! trr-routes - URL route grammar for the TRR admin dashboard.
//!
//! Reads any historical URL shape of a show, season, person or social page
//! into a normalized route state, and builds the one canonical URL for a
//! given state.
//!
//! ```text
//! pathname + query ──► route::parse_*  ──► ShowRouteState / SeasonRouteState / ...
//! structured fields ──► build::build_* ──► "/rhoslc/s6/assets/videos"
//! ```
//!
//! - [`token`]: fixed-format segment tokens (`s6`, `e3`, `w0`, platforms, handles)
//! - [`alias`]: legacy path/query spellings to canonical tabs
//! - [`route`]: anchor detection and route state resolution
//! - [`build`]: canonical URL builders and person slugs
//! - [`core`]: tab enums, query parameters, segment decoding

#[macro_use]
pub mod logger;

pub mod alias;
pub mod build;
pub mod core;
pub mod route;
pub mod token;

pub use build::{
    PersonUrl, SeasonSocialWeekUrl, SeasonUrl, ShowRedditCommunityUrl, ShowRedditUrl, ShowUrl,
    SocialUrl, build_person_admin_url, build_person_route_slug, build_season_admin_url,
    build_season_social_url, build_season_social_week_url, build_show_admin_url,
    build_show_reddit_community_url, build_show_reddit_url, build_show_social_url,
    clean_legacy_person_routing_query, clean_legacy_routing_query, parse_person_route_slug,
    to_person_slug,
};
pub use crate::core::{
    AssetsSubTab, PersonAdminTab, QueryParams, RouteSource, SeasonAdminTab, ShowAdminTab,
};
pub use route::{
    PersonRouteState, SeasonRouteState, ShowRouteState, SocialPathFilters, SocialScope,
    parse_person_route_state, parse_season_episode_number_from_path, parse_season_route_state,
    parse_season_social_path_filters, parse_show_route_state, parse_show_social_path_filters,
    parse_social_analytics_view_from_path,
};
pub use token::{SocialAnalyticsView, SocialPlatform, normalize_handle_slug};
