//! Show page route state.

use serde::Serialize;

use super::segments::show_base_segments;
use super::{resolve_path_tab, resolve_query_tab};
use crate::alias::{show_tab_by_path_segment, show_tab_by_query};
use crate::core::{AssetsSubTab, PathSegments, QueryParams, RouteSource, ShowAdminTab};
use crate::debug;

/// Normalized show page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowRouteState {
    pub tab: ShowAdminTab,
    pub assets_sub_tab: AssetsSubTab,
    pub source: RouteSource,
}

impl ShowRouteState {
    const fn new(tab: ShowAdminTab, assets_sub_tab: AssetsSubTab, source: RouteSource) -> Self {
        Self {
            tab,
            assets_sub_tab,
            source,
        }
    }
}

/// Resolve the show tab from a pathname and its query.
///
/// A bare show root carries no tab, so it resolves to `details` with
/// [`RouteSource::Default`].
pub fn parse_show_route_state(pathname: &str, query: &QueryParams) -> ShowRouteState {
    let segments = PathSegments::from_pathname(pathname);

    if let Some(base) = show_base_segments(&segments)
        && let Some((tab, sub_tab)) = resolve_path_tab(base, show_tab_by_path_segment)
    {
        debug!("route"; "show tab `{}` from path {}", tab, pathname);
        return ShowRouteState::new(tab, sub_tab, RouteSource::Path);
    }

    if let Some((tab, sub_tab)) = resolve_query_tab(query, show_tab_by_query) {
        debug!("route"; "show tab `{}` from legacy query", tab);
        return ShowRouteState::new(tab, sub_tab, RouteSource::Query);
    }

    ShowRouteState::new(
        ShowAdminTab::Details,
        AssetsSubTab::Images,
        RouteSource::Default,
    )
}
