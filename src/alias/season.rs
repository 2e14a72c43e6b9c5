//! Season page aliases.

use super::TabAlias;
use crate::core::{AssetsSubTab, SeasonAdminTab, normalize_key};

type Alias = TabAlias<SeasonAdminTab>;

/// Entries shared by the path and query tables.
fn common(key: &str) -> Option<Alias> {
    use SeasonAdminTab::*;
    let alias = match key {
        "overview" | "details" => Alias::tab(Overview),
        "episodes" => Alias::tab(Episodes),
        "assets" => Alias::tab(Assets),
        "news" => Alias::tab(News),
        "cast" => Alias::tab(Cast),
        "surveys" => Alias::tab(Surveys),
        "social" => Alias::tab(Social),
        "fandom" => Alias::tab(Fandom),
        "media" | "gallery" | "images" => Alias::assets(Assets, AssetsSubTab::Images),
        "videos" => Alias::assets(Assets, AssetsSubTab::Videos),
        "brand" | "branding" => Alias::assets(Assets, AssetsSubTab::Branding),
        _ => return None,
    };
    Some(alias)
}

/// First path segment after the season anchor (and episode, if any).
pub fn season_tab_by_path_segment(segment: &str) -> Option<Alias> {
    let key = normalize_key(segment);
    common(&key).or_else(|| match key.as_str() {
        "media-gallery" => Some(Alias::assets(SeasonAdminTab::Assets, AssetsSubTab::Images)),
        "media-videos" => Some(Alias::assets(SeasonAdminTab::Assets, AssetsSubTab::Videos)),
        "media-brand" => Some(Alias::assets(SeasonAdminTab::Assets, AssetsSubTab::Branding)),
        _ => None,
    })
}

/// Value of the legacy `tab` query parameter.
pub fn season_tab_by_query(value: &str) -> Option<Alias> {
    common(&normalize_key(value))
}
