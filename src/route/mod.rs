//! Route state resolvers - pathname + query to normalized route state.
//!
//! Precedence is the same for every hierarchy:
//!
//! ```text
//! path segment  ->  `tab` query parameter  ->  default tab
//! ```
//!
//! No resolver ever fails: malformed input degrades to the nearest default.
//!
//! - [`segments`]: anchor detection (shared by every resolver)
//! - [`show`], [`season`], [`person`]: tab resolution per hierarchy
//! - [`social`]: social-analytics filters under the social tab
//! - [`cast`]: cast panel query state

pub mod cast;
pub mod person;
pub mod season;
pub mod segments;
pub mod show;
pub mod social;

pub use cast::{
    CastHasImageFilter, CastSortBy, CastSortOrder, SeasonCastRouteState, ShowCastRouteState,
    parse_season_cast_route_state, parse_show_cast_route_state, write_season_cast_route_state,
    write_show_cast_route_state,
};
pub use person::{PersonRouteState, parse_person_route_state};
pub use season::{SeasonRouteState, parse_season_episode_number_from_path, parse_season_route_state};
pub use show::{ShowRouteState, parse_show_route_state};
pub use social::{
    SocialPathFilters, SocialScope, parse_season_social_path_filters,
    parse_show_social_path_filters, parse_social_analytics_view_from_path,
};

use crate::alias::{TabAlias, assets_sub_tab};
use crate::core::{AssetsSubTab, HasAssetsTab, QueryParams};

/// Resolve the first base segment; `assets` also consumes a sub-tab.
///
/// A sub-tab implied by the first segment (`media-videos`) wins over the
/// second segment, which then belongs to nothing.
pub(crate) fn resolve_path_tab<T: HasAssetsTab>(
    base: &[String],
    lookup: fn(&str) -> Option<TabAlias<T>>,
) -> Option<(T, AssetsSubTab)> {
    let alias = lookup(base.first()?)?;
    if alias.tab != T::ASSETS {
        return Some((alias.tab, AssetsSubTab::default()));
    }
    let sub_tab = alias
        .sub_tab
        .or_else(|| base.get(1).and_then(|s| assets_sub_tab(s)))
        .unwrap_or_default();
    Some((alias.tab, sub_tab))
}

/// Resolve the legacy `tab` / `assets` query parameters.
///
/// An explicit `assets` value wins over a sub-tab implied by `tab`.
pub(crate) fn resolve_query_tab<T: HasAssetsTab>(
    query: &QueryParams,
    lookup: fn(&str) -> Option<TabAlias<T>>,
) -> Option<(T, AssetsSubTab)> {
    let alias = lookup(query.get("tab")?)?;
    if alias.tab != T::ASSETS {
        return Some((alias.tab, AssetsSubTab::default()));
    }
    let sub_tab = query
        .get("assets")
        .and_then(assets_sub_tab)
        .or(alias.sub_tab)
        .unwrap_or_default();
    Some((alias.tab, sub_tab))
}
