//! URL builders - structured route fields to one canonical URL.
//!
//! Builders only ever emit the canonical shapes:
//!
//! ```text
//! /{show}[/assets[/videos|/branding] | /{tab}]
//! /{show}/s{N}[/e{E}][/assets[/videos|/branding] | /{tab}]
//! /{show}/people/{person}/{tab}
//! /{show}[/s{N}]/social...
//! ```
//!
//! Slugs are trimmed and encoded like `encodeURIComponent`. A pass-through
//! query loses its legacy routing keys before it is appended.

mod person;
mod season;
mod show;
mod slug;
mod social;

use std::fmt::Display;

pub use person::{PersonUrl, build_person_admin_url};
pub use season::{SeasonUrl, build_season_admin_url};
pub use show::{ShowUrl, build_show_admin_url};
pub use slug::{
    PersonRouteSlug, build_person_route_slug, humanize_person_slug, parse_person_route_slug,
    to_person_slug,
};
pub use social::{
    SeasonSocialWeekUrl, ShowRedditCommunityUrl, ShowRedditUrl, SocialUrl,
    build_season_social_url, build_season_social_week_url, build_show_reddit_community_url,
    build_show_reddit_url, build_show_social_url,
};

use crate::core::{
    AssetsSubTab, HasAssetsTab, LEGACY_ROUTING_KEYS, QueryParams, encode_component,
};

/// Legacy person links carried the owning show as `showId`.
const LEGACY_PERSON_KEYS: &[&str] = &["showId"];

/// Drop `tab`, `assets` and `scope`.
pub fn clean_legacy_routing_query(query: &QueryParams) -> QueryParams {
    query.without(LEGACY_ROUTING_KEYS)
}

/// [`clean_legacy_routing_query`] plus the legacy `showId` key.
pub fn clean_legacy_person_routing_query(query: &QueryParams) -> QueryParams {
    clean_legacy_routing_query(query).without(LEGACY_PERSON_KEYS)
}

/// `/{slug}` with the slug trimmed and encoded; empty when there is no slug.
pub(crate) fn slug_segment(slug: &str) -> String {
    let slug = slug.trim();
    if slug.is_empty() {
        return String::new();
    }
    format!("/{}", encode_component(slug))
}

/// Tab suffix shared by show and season pages. The root tab is bare.
pub(crate) fn tab_suffix<T>(tab: T, sub_tab: AssetsSubTab) -> String
where
    T: HasAssetsTab + Display,
{
    if tab == T::ROOT {
        String::new()
    } else if tab == T::ASSETS && sub_tab == AssetsSubTab::Images {
        "/assets".to_owned()
    } else if tab == T::ASSETS {
        format!("/assets/{sub_tab}")
    } else {
        format!("/{tab}")
    }
}

/// Attach the cleaned query. An empty path becomes `/`.
pub(crate) fn finish(path: String, query: Option<&QueryParams>) -> String {
    let path = if path.is_empty() { "/".to_owned() } else { path };
    match query {
        Some(query) => clean_legacy_routing_query(query).append_to(path),
        None => path,
    }
}
