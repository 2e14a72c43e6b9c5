//! Person page route state.

use serde::Serialize;

use super::segments::find_person_anchor;
use crate::alias::{person_tab_by_path_segment, person_tab_by_query};
use crate::core::{PathSegments, PersonAdminTab, QueryParams, RouteSource};
use crate::debug;

/// Normalized person page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonRouteState {
    pub tab: PersonAdminTab,
    pub source: RouteSource,
}

/// Resolve the person tab from a pathname and its query.
pub fn parse_person_route_state(pathname: &str, query: &QueryParams) -> PersonRouteState {
    let segments = PathSegments::from_pathname(pathname);
    let anchor = find_person_anchor(&segments);

    if let Some(anchor) = &anchor
        && let Some(tab) = anchor
            .base
            .first()
            .and_then(|s| person_tab_by_path_segment(s))
    {
        debug!("route"; "person `{}` tab `{}` from path", anchor.person_slug, tab);
        return PersonRouteState {
            tab,
            source: RouteSource::Path,
        };
    }

    if let Some(tab) = query.get("tab").and_then(person_tab_by_query) {
        return PersonRouteState {
            tab,
            source: RouteSource::Query,
        };
    }

    PersonRouteState {
        tab: PersonAdminTab::Overview,
        source: RouteSource::Default,
    }
}
