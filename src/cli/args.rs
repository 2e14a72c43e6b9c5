//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use trr_routes::{AssetsSubTab, PersonAdminTab, SeasonAdminTab, ShowAdminTab};
use trr_routes::{SocialAnalyticsView, SocialPlatform};

use crate::config::OutputFormat;

/// Route grammar for the TRR admin dashboard
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: trr-routes.toml, if present)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output format, overrides `[output] format`
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Print resolver decisions to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a URL (pathname plus optional query) into route state
    #[command(visible_alias = "p")]
    Parse {
        /// e.g. `/admin/trr-shows/rhoslc/seasons/4?tab=media`
        url: String,
    },

    /// Build a canonical URL
    #[command(visible_alias = "b")]
    Build {
        #[command(subcommand)]
        target: BuildTarget,
    },

    /// Slugify a person name, optionally with an id prefix
    #[command(visible_alias = "s")]
    Slug {
        /// Display name, e.g. "Meredith Marks"
        name: String,

        /// Person id; its first group becomes the collision suffix
        #[arg(long)]
        id: Option<String>,
    },
}

/// What to build a URL for.
#[derive(Subcommand, Debug, Clone)]
pub enum BuildTarget {
    /// Show page
    Show {
        show_slug: String,

        #[arg(short, long, default_value = "details")]
        tab: ShowAdminTab,

        #[arg(short, long, default_value = "images")]
        assets: AssetsSubTab,

        #[command(flatten)]
        query: QueryArg,
    },

    /// Season page
    Season {
        show_slug: String,

        #[arg(allow_negative_numbers = true)]
        season: i64,

        #[arg(short, long)]
        episode: Option<i64>,

        #[arg(short, long, default_value = "overview")]
        tab: SeasonAdminTab,

        #[arg(short, long, default_value = "images")]
        assets: AssetsSubTab,

        #[command(flatten)]
        query: QueryArg,
    },

    /// Person page
    Person {
        person_slug: String,

        /// Owning show slug
        #[arg(short, long)]
        show: Option<String>,

        #[arg(short, long, default_value = "overview")]
        tab: PersonAdminTab,

        #[command(flatten)]
        query: QueryArg,
    },

    /// Social tab, show scope (`--season` filters) or season scope (`--in-season`)
    Social {
        show_slug: String,

        #[command(flatten)]
        social: SocialArgs,

        #[command(flatten)]
        query: QueryArg,
    },

    /// Reddit view, optionally for one community
    Reddit {
        show_slug: String,

        #[arg(long)]
        community: Option<String>,

        #[arg(long)]
        season: Option<i64>,

        #[command(flatten)]
        query: QueryArg,
    },
}

/// Social filter fields.
#[derive(clap::Args, Debug, Clone)]
pub struct SocialArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub season: Option<i64>,

    /// Nest under the season instead of filtering the show's social tab
    #[arg(long, requires = "season")]
    pub in_season: bool,

    /// official, sentiment, hashtags, advanced, reddit (`bravo` = official)
    #[arg(long)]
    pub view: Option<SocialAnalyticsView>,

    /// Week index, 0 = pre-season
    #[arg(short, long, allow_negative_numbers = true)]
    pub week: Option<i64>,

    #[arg(long)]
    pub platform: Option<SocialPlatform>,

    #[arg(long)]
    pub handle: Option<String>,
}

/// Pass-through query string.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArg {
    /// Query string to carry over, e.g. `q=lisa&tab=cast`
    #[arg(short, long = "query", value_name = "QUERY")]
    pub query: Option<String>,
}
