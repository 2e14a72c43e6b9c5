use super::{clean_legacy_person_routing_query, slug_segment};
use crate::core::{PersonAdminTab, QueryParams};

/// Fields of a person page URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonUrl<'a> {
    /// Owning show; person pages also exist outside any show.
    pub show_slug: Option<&'a str>,
    pub person_slug: &'a str,
    pub tab: PersonAdminTab,
    pub query: Option<&'a QueryParams>,
}

/// Canonical person page URL. The tab is always spelled out.
pub fn build_person_admin_url(input: &PersonUrl<'_>) -> String {
    let show = input.show_slug.map(slug_segment).unwrap_or_default();
    let path = format!(
        "{show}/people{}/{}",
        slug_segment(input.person_slug),
        input.tab
    );
    match input.query {
        Some(query) => clean_legacy_person_routing_query(query).append_to(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::parse_person_route_state;

    #[test]
    fn test_with_show() {
        let url = build_person_admin_url(&PersonUrl {
            show_slug: Some("the-real-housewives-of-salt-lake-city"),
            person_slug: "meredith-marks--7f528757",
            tab: PersonAdminTab::Gallery,
            query: None,
        });
        assert_eq!(
            url,
            "/the-real-housewives-of-salt-lake-city/people/meredith-marks--7f528757/gallery"
        );
    }

    #[test]
    fn test_without_show_and_default_tab() {
        let url = build_person_admin_url(&PersonUrl {
            person_slug: "meredith-marks--7f528757",
            ..Default::default()
        });
        assert_eq!(url, "/people/meredith-marks--7f528757/overview");

        let url = build_person_admin_url(&PersonUrl {
            show_slug: Some(" "),
            person_slug: "x",
            ..Default::default()
        });
        assert_eq!(url, "/people/x/overview");
    }

    #[test]
    fn test_query_drops_show_id() {
        let query = QueryParams::parse("showId=rhoslc&tab=gallery&seasonNumber=4");
        let url = build_person_admin_url(&PersonUrl {
            show_slug: Some("rhoslc"),
            person_slug: "x",
            tab: PersonAdminTab::Credits,
            query: Some(&query),
        });
        assert_eq!(url, "/rhoslc/people/x/credits?seasonNumber=4");
    }

    #[test]
    fn test_round_trip() {
        for tab in PersonAdminTab::ALL {
            for show in [Some("rhoslc"), None] {
                let url = build_person_admin_url(&PersonUrl {
                    show_slug: show,
                    person_slug: "lisa-barlow--1a2b3c4d",
                    tab: *tab,
                    query: None,
                });
                assert_eq!(parse_person_route_state(&url, &QueryParams::new()).tab, *tab, "{url}");
            }
        }
    }
}
