use super::{finish, slug_segment, tab_suffix};
use crate::core::{AssetsSubTab, QueryParams, ShowAdminTab};

/// Fields of a show page URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowUrl<'a> {
    pub show_slug: &'a str,
    pub tab: ShowAdminTab,
    pub assets_sub_tab: AssetsSubTab,
    pub query: Option<&'a QueryParams>,
}

impl<'a> ShowUrl<'a> {
    pub fn new(show_slug: &'a str, tab: ShowAdminTab) -> Self {
        Self {
            show_slug,
            tab,
            ..Self::default()
        }
    }
}

/// Canonical show page URL: `/{slug}`, `/{slug}/assets[/sub]` or `/{slug}/{tab}`.
pub fn build_show_admin_url(input: &ShowUrl<'_>) -> String {
    let mut path = slug_segment(input.show_slug);
    path.push_str(&tab_suffix(input.tab, input.assets_sub_tab));
    finish(path, input.query)
}
