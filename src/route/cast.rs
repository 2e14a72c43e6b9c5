//! Cast panel state, carried entirely in the query string.
//!
//! Keys: `cast_q`, `cast_sort`, `cast_order`, `cast_img`, plus CSV filter
//! lists. Older links used `cast_roles` / `cast_credits`; those are read as a
//! fallback and removed on write.

use serde::Serialize;

use crate::core::QueryParams;

// ============================================================================
// Query Keys
// ============================================================================

const KEY_QUERY: &str = "cast_q";
const KEY_SORT: &str = "cast_sort";
const KEY_ORDER: &str = "cast_order";
const KEY_IMAGE: &str = "cast_img";
const KEY_SEASONS: &str = "cast_seasons";
const KEY_FILTERS: &str = "cast_filters";
const KEY_ROLE_FILTERS: &str = "cast_role_filters";
const KEY_CREDIT_FILTERS: &str = "cast_credit_filters";
const LEGACY_ROLES: &str = "cast_roles";
const LEGACY_CREDITS: &str = "cast_credits";

// ============================================================================
// Panel Options
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastSortBy {
    #[default]
    Episodes,
    Season,
    Name,
}

impl CastSortBy {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("season") => Self::Season,
            Some("name") => Self::Name,
            _ => Self::Episodes,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Episodes => "episodes",
            Self::Season => "season",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastSortOrder {
    #[default]
    Desc,
    Asc,
}

impl CastSortOrder {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastHasImageFilter {
    #[default]
    All,
    Yes,
    No,
}

impl CastHasImageFilter {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::All,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

// ============================================================================
// Route State
// ============================================================================

/// Cast panel state on a show page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowCastRouteState {
    pub search_query: String,
    pub sort_by: CastSortBy,
    pub sort_order: CastSortOrder,
    pub has_image_filter: CastHasImageFilter,
    /// Sorted, deduplicated, all > 0.
    pub season_filters: Vec<u32>,
    pub filters: Vec<String>,
}

/// Cast panel state on a season page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonCastRouteState {
    pub search_query: String,
    pub sort_by: CastSortBy,
    pub sort_order: CastSortOrder,
    pub has_image_filter: CastHasImageFilter,
    pub role_filters: Vec<String>,
    pub credit_filters: Vec<String>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Trimmed, non-empty, first occurrence wins.
fn parse_csv(value: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in value.unwrap_or_default().split(',').map(str::trim) {
        if !token.is_empty() && !out.iter().any(|seen| seen == token) {
            out.push(token.to_owned());
        }
    }
    out
}

/// Leading decimal digits of `token`, after an optional `+`: `3abc` is 3,
/// `1.5` is 1. A leading `-` or no digits yields `None`.
fn leading_number(token: &str) -> Option<u32> {
    let unsigned = token.strip_prefix('+').unwrap_or(token);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

fn parse_number_csv(value: Option<&str>) -> Vec<u32> {
    let mut numbers: Vec<u32> = parse_csv(value)
        .iter()
        .filter_map(|token| leading_number(token))
        .filter(|n| *n > 0)
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

/// Canonical list, or the legacy one when the canonical list is empty.
fn csv_with_fallback(query: &QueryParams, key: &str, legacy: &str) -> Vec<String> {
    let canonical = parse_csv(query.get(key));
    if canonical.is_empty() {
        parse_csv(query.get(legacy))
    } else {
        canonical
    }
}

fn search_query(query: &QueryParams) -> String {
    query.get(KEY_QUERY).map(str::trim).unwrap_or_default().to_owned()
}

/// Set `key` when `value` has content, otherwise remove it.
fn set_or_delete(query: &mut QueryParams, key: &str, value: Option<String>) {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => query.set(key, v),
        None => query.delete(key),
    }
}

fn non_default<T: Default + PartialEq>(value: T, as_str: fn(T) -> &'static str) -> Option<String> {
    (value != T::default()).then(|| as_str(value).to_owned())
}

fn join(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

/// Write the scalar keys shared by both panels.
fn write_common(
    next: &mut QueryParams,
    search: &str,
    sort_by: CastSortBy,
    sort_order: CastSortOrder,
    has_image: CastHasImageFilter,
) {
    set_or_delete(next, KEY_QUERY, Some(search.trim().to_owned()));
    set_or_delete(next, KEY_SORT, non_default(sort_by, CastSortBy::as_str));
    set_or_delete(next, KEY_ORDER, non_default(sort_order, CastSortOrder::as_str));
    set_or_delete(next, KEY_IMAGE, non_default(has_image, CastHasImageFilter::as_str));
}

// ============================================================================
// Parse / Write
// ============================================================================

pub fn parse_show_cast_route_state(query: &QueryParams) -> ShowCastRouteState {
    ShowCastRouteState {
        search_query: search_query(query),
        sort_by: CastSortBy::parse(query.get(KEY_SORT)),
        sort_order: CastSortOrder::parse(query.get(KEY_ORDER)),
        has_image_filter: CastHasImageFilter::parse(query.get(KEY_IMAGE)),
        season_filters: parse_number_csv(query.get(KEY_SEASONS)),
        filters: csv_with_fallback(query, KEY_FILTERS, LEGACY_ROLES),
    }
}

pub fn parse_season_cast_route_state(query: &QueryParams) -> SeasonCastRouteState {
    SeasonCastRouteState {
        search_query: search_query(query),
        sort_by: CastSortBy::parse(query.get(KEY_SORT)),
        sort_order: CastSortOrder::parse(query.get(KEY_ORDER)),
        has_image_filter: CastHasImageFilter::parse(query.get(KEY_IMAGE)),
        role_filters: csv_with_fallback(query, KEY_ROLE_FILTERS, LEGACY_ROLES),
        credit_filters: csv_with_fallback(query, KEY_CREDIT_FILTERS, LEGACY_CREDITS),
    }
}

/// Write show cast state over `query`, keeping unrelated parameters.
pub fn write_show_cast_route_state(query: &QueryParams, state: &ShowCastRouteState) -> QueryParams {
    let mut next = query.clone();
    next.delete(LEGACY_ROLES);
    write_common(
        &mut next,
        &state.search_query,
        state.sort_by,
        state.sort_order,
        state.has_image_filter,
    );

    let mut seasons = state.season_filters.clone();
    seasons.sort_unstable();
    let seasons: Vec<String> = seasons.iter().map(u32::to_string).collect();
    set_or_delete(&mut next, KEY_SEASONS, join(&seasons));
    set_or_delete(&mut next, KEY_FILTERS, join(&state.filters));
    next
}

/// Write season cast state over `query`, keeping unrelated parameters.
pub fn write_season_cast_route_state(
    query: &QueryParams,
    state: &SeasonCastRouteState,
) -> QueryParams {
    let mut next = query.without(&[LEGACY_ROLES, LEGACY_CREDITS]);
    write_common(
        &mut next,
        &state.search_query,
        state.sort_by,
        state.sort_order,
        state.has_image_filter,
    );
    set_or_delete(&mut next, KEY_ROLE_FILTERS, join(&state.role_filters));
    set_or_delete(&mut next, KEY_CREDIT_FILTERS, join(&state.credit_filters));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_state_round_trip() {
        let initial = QueryParams::parse(
            "tab=cast&cast_q=Lisa&cast_sort=name&cast_order=asc&cast_img=yes&cast_seasons=6,1,6&cast_filters=role:friend,credit:Crew",
        );
        let parsed = parse_show_cast_route_state(&initial);
        assert_eq!(parsed.search_query, "Lisa");
        assert_eq!(parsed.sort_by, CastSortBy::Name);
        assert_eq!(parsed.sort_order, CastSortOrder::Asc);
        assert_eq!(parsed.has_image_filter, CastHasImageFilter::Yes);
        assert_eq!(parsed.season_filters, [1, 6]);
        assert_eq!(parsed.filters, ["role:friend", "credit:Crew"]);

        let written = write_show_cast_route_state(&initial, &parsed);
        assert_eq!(written.get("cast_seasons"), Some("1,6"));
        assert_eq!(written.get("cast_filters"), Some("role:friend,credit:Crew"));
        assert_eq!(written.get("tab"), Some("cast"));
        assert_eq!(parse_show_cast_route_state(&written), parsed);
    }

    #[test]
    fn test_legacy_keys() {
        let parsed = parse_show_cast_route_state(&QueryParams::parse("cast_roles=role:host,credit:Cast"));
        assert_eq!(parsed.filters, ["role:host", "credit:Cast"]);

        let parsed = parse_season_cast_route_state(&QueryParams::parse(
            "cast_roles=Housewife,Friend&cast_credits=Cast,Guest",
        ));
        assert_eq!(parsed.role_filters, ["Housewife", "Friend"]);
        assert_eq!(parsed.credit_filters, ["Cast", "Guest"]);
    }

    #[test]
    fn test_season_writer_drops_legacy_keeps_rest() {
        let initial = QueryParams::parse(
            "tab=cast&assets=media&cast_q=Heather&cast_roles=legacyRole&cast_credits=legacyCredit",
        );
        let state = SeasonCastRouteState {
            search_query: "Heather".into(),
            role_filters: vec!["Housewife".into(), "Host".into()],
            credit_filters: vec!["Cast".into(), "Guest".into()],
            ..Default::default()
        };
        let written = write_season_cast_route_state(&initial, &state);
        assert_eq!(written.get("cast_q"), Some("Heather"));
        assert_eq!(written.get("cast_role_filters"), Some("Housewife,Host"));
        assert_eq!(written.get("cast_credit_filters"), Some("Cast,Guest"));
        assert!(!written.contains("cast_roles"));
        assert!(!written.contains("cast_credits"));
        assert_eq!(written.get("assets"), Some("media"));
    }

    #[test]
    fn test_defaults_are_not_written() {
        let written = write_show_cast_route_state(
            &QueryParams::parse("tab=cast&cast_sort=name"),
            &ShowCastRouteState::default(),
        );
        assert_eq!(written.to_string(), "tab=cast");
    }

    #[test]
    fn test_lenient_parsing() {
        let parsed = parse_show_cast_route_state(&QueryParams::parse(
            "cast_sort=NAME&cast_order=up&cast_img=maybe&cast_seasons=0,x,%203%20,-2&cast_q=%20%20",
        ));
        assert_eq!(parsed.sort_by, CastSortBy::Episodes);
        assert_eq!(parsed.sort_order, CastSortOrder::Desc);
        assert_eq!(parsed.has_image_filter, CastHasImageFilter::All);
        assert_eq!(parsed.season_filters, [3]);
        assert_eq!(parsed.search_query, "");
    }

    #[test]
    fn test_season_filters_read_leading_digits() {
        let parsed = parse_show_cast_route_state(&QueryParams::parse(
            "cast_seasons=3abc,1.5,+4,-7,abc4",
        ));
        assert_eq!(parsed.season_filters, [1, 3, 4]);

        let written = write_show_cast_route_state(&QueryParams::new(), &parsed);
        assert_eq!(written.get("cast_seasons"), Some("1,3,4"));
    }
}
