//! Alias tables - legacy spellings to canonical tabs.
//!
//! One module per hierarchy, each with a path-segment table and a query-tab
//! table. Tables are `match` expressions: immutable, total over their known
//! keys, `None` for anything else. Keys are compared trimmed and lowercased.

mod person;
mod season;
mod show;

pub use person::{person_tab_by_path_segment, person_tab_by_query};
pub use season::{season_tab_by_path_segment, season_tab_by_query};
pub use show::{show_tab_by_path_segment, show_tab_by_query};

use crate::core::{AssetsSubTab, normalize_key};

/// A table hit: the canonical tab, plus the assets sub-tab when the legacy
/// spelling already names one (`media-videos` -> assets/videos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabAlias<T> {
    pub tab: T,
    pub sub_tab: Option<AssetsSubTab>,
}

impl<T> TabAlias<T> {
    #[inline]
    pub(crate) const fn tab(tab: T) -> Self {
        Self { tab, sub_tab: None }
    }

    #[inline]
    pub(crate) const fn assets(tab: T, sub_tab: AssetsSubTab) -> Self {
        Self {
            tab,
            sub_tab: Some(sub_tab),
        }
    }
}

/// Assets sub-tab spellings, shared by path segments and the `assets` query.
pub fn assets_sub_tab(key: &str) -> Option<AssetsSubTab> {
    match normalize_key(key).as_str() {
        "images" | "image" | "photos" | "gallery" | "media" | "media-gallery" => {
            Some(AssetsSubTab::Images)
        }
        "videos" | "video" | "media-videos" => Some(AssetsSubTab::Videos),
        "branding" | "brand" | "media-brand" | "logos" => Some(AssetsSubTab::Branding),
        _ => None,
    }
}
