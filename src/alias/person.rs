//! Person page aliases. Person pages have no assets sub-tabs.

use crate::core::{PersonAdminTab, normalize_key};

fn lookup(key: &str) -> Option<PersonAdminTab> {
    use PersonAdminTab::*;
    match key {
        "overview" | "details" => Some(Overview),
        "gallery" | "photos" | "images" | "media" | "assets" => Some(Gallery),
        "videos" => Some(Videos),
        "news" => Some(News),
        "credits" | "shows" => Some(Credits),
        "fandom" => Some(Fandom),
        _ => None,
    }
}

/// First path segment after the person anchor.
pub fn person_tab_by_path_segment(segment: &str) -> Option<PersonAdminTab> {
    lookup(&normalize_key(segment))
}

/// Value of the legacy `tab` query parameter.
pub fn person_tab_by_query(value: &str) -> Option<PersonAdminTab> {
    lookup(&normalize_key(value))
}
