//! `build` command: canonical URLs from command-line fields.

use trr_routes::QueryParams;
use trr_routes::build::{
    PersonUrl, SeasonUrl, ShowRedditCommunityUrl, ShowRedditUrl, ShowUrl, SocialUrl,
    build_person_admin_url, build_season_admin_url, build_season_social_url,
    build_show_admin_url, build_show_reddit_community_url, build_show_reddit_url,
    build_show_social_url,
};
use trr_routes::debug;

use super::args::{BuildTarget, QueryArg, SocialArgs};

impl QueryArg {
    fn parsed(&self) -> Option<QueryParams> {
        self.query.as_deref().map(QueryParams::parse)
    }
}

fn social_url<'a>(
    show_slug: &'a str,
    social: &'a SocialArgs,
    query: Option<&'a QueryParams>,
) -> SocialUrl<'a> {
    SocialUrl {
        show_slug,
        season_number: social.season,
        view: social.view,
        week_index: social.week,
        platform: social.platform,
        handle: social.handle.as_deref(),
        community: None,
        query,
    }
}

/// Build the canonical URL for one target.
pub fn build_url(target: &BuildTarget) -> String {
    let url = match target {
        BuildTarget::Show {
            show_slug,
            tab,
            assets,
            query,
        } => {
            let query = query.parsed();
            build_show_admin_url(&ShowUrl {
                show_slug,
                tab: *tab,
                assets_sub_tab: *assets,
                query: query.as_ref(),
            })
        }
        BuildTarget::Season {
            show_slug,
            season,
            episode,
            tab,
            assets,
            query,
        } => {
            let query = query.parsed();
            build_season_admin_url(&SeasonUrl {
                show_slug,
                season_number: *season,
                episode_number: *episode,
                tab: *tab,
                assets_sub_tab: *assets,
                query: query.as_ref(),
            })
        }
        BuildTarget::Person {
            person_slug,
            show,
            tab,
            query,
        } => {
            let query = query.parsed();
            build_person_admin_url(&PersonUrl {
                show_slug: show.as_deref(),
                person_slug,
                tab: *tab,
                query: query.as_ref(),
            })
        }
        BuildTarget::Social {
            show_slug,
            social,
            query,
        } => {
            let query = query.parsed();
            let input = social_url(show_slug, social, query.as_ref());
            if social.in_season {
                build_season_social_url(&input)
            } else {
                build_show_social_url(&input)
            }
        }
        BuildTarget::Reddit {
            show_slug,
            community: Some(community),
            season,
            query,
        } => {
            let query = query.parsed();
            build_show_reddit_community_url(&ShowRedditCommunityUrl {
                show_slug,
                community,
                season_number: *season,
                query: query.as_ref(),
            })
        }
        BuildTarget::Reddit {
            show_slug,
            community: None,
            season,
            query,
        } => {
            let query = query.parsed();
            build_show_reddit_url(&ShowRedditUrl {
                show_slug,
                season_number: *season,
                query: query.as_ref(),
            })
        }
    };
    debug!("build"; "{url}");
    url
}
