//! Show page aliases.

use super::TabAlias;
use crate::core::{AssetsSubTab, ShowAdminTab, normalize_key};

type Alias = TabAlias<ShowAdminTab>;

/// First path segment after the show anchor.
pub fn show_tab_by_path_segment(segment: &str) -> Option<Alias> {
    use ShowAdminTab::*;
    let alias = match normalize_key(segment).as_str() {
        "overview" | "details" => Alias::tab(Details),
        "settings" => Alias::tab(Settings),
        "seasons" => Alias::tab(Seasons),
        "assets" => Alias::tab(Assets),
        "news" => Alias::tab(News),
        "cast" => Alias::tab(Cast),
        "surveys" => Alias::tab(Surveys),
        "social" => Alias::tab(Social),
        "gallery" | "media" | "images" | "media-gallery" => {
            Alias::assets(Assets, AssetsSubTab::Images)
        }
        "videos" | "media-videos" => Alias::assets(Assets, AssetsSubTab::Videos),
        "brand" | "branding" | "media-brand" => Alias::assets(Assets, AssetsSubTab::Branding),
        _ => return None,
    };
    Some(alias)
}

/// Value of the legacy `tab` query parameter.
pub fn show_tab_by_query(value: &str) -> Option<Alias> {
    use ShowAdminTab::*;
    let alias = match normalize_key(value).as_str() {
        "overview" | "details" => Alias::tab(Details),
        "settings" => Alias::tab(Settings),
        "seasons" => Alias::tab(Seasons),
        "assets" => Alias::tab(Assets),
        "news" => Alias::tab(News),
        "cast" => Alias::tab(Cast),
        "surveys" => Alias::tab(Surveys),
        "social" => Alias::tab(Social),
        "gallery" | "media" | "images" => Alias::assets(Assets, AssetsSubTab::Images),
        "videos" => Alias::assets(Assets, AssetsSubTab::Videos),
        "brand" | "branding" => Alias::assets(Assets, AssetsSubTab::Branding),
        _ => return None,
    };
    Some(alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_and_details_collapse() {
        assert_eq!(show_tab_by_path_segment("overview").unwrap().tab, ShowAdminTab::Details);
        assert_eq!(show_tab_by_path_segment("details").unwrap().tab, ShowAdminTab::Details);
        assert_eq!(show_tab_by_query("overview").unwrap().tab, ShowAdminTab::Details);
    }

    #[test]
    fn test_legacy_assets_segments() {
        let alias = show_tab_by_path_segment("media-videos").unwrap();
        assert_eq!(alias, Alias::assets(ShowAdminTab::Assets, AssetsSubTab::Videos));

        let alias = show_tab_by_path_segment("gallery").unwrap();
        assert_eq!(alias.sub_tab, Some(AssetsSubTab::Images));

        // Plain `assets` leaves the sub-tab to the next segment
        assert_eq!(show_tab_by_path_segment("assets").unwrap().sub_tab, None);
    }

    #[test]
    fn test_every_canonical_tab_is_its_own_alias() {
        for tab in ShowAdminTab::ALL {
            assert_eq!(show_tab_by_path_segment(tab.as_str()).unwrap().tab, *tab);
            assert_eq!(show_tab_by_query(tab.as_str()).unwrap().tab, *tab);
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(show_tab_by_path_segment("s6"), None);
        assert_eq!(show_tab_by_path_segment("people"), None);
        assert_eq!(show_tab_by_query(""), None);
    }
}
