//! Token codec - fixed-grammar path segments.
//!
//! Every token kind has a `parse` that never fails loudly (unparseable input
//! is `None`) and a canonical `Display`. Canonical output always re-parses
//! to an equal token; alias spellings (`preseason`, `bravo`, `@Handle`) only
//! exist on the input side.
//!
//! - [`number`]: season `sN` and episode `eN`
//! - [`week`]: week `wN` / `preseason`
//! - [`platform`]: social platform slugs
//! - [`view`]: social-analytics view slugs
//! - [`handle`]: account handle sanitization

mod handle;
mod number;
mod platform;
mod view;
mod week;

pub use handle::{normalize_community_slug, normalize_handle_slug};
pub use number::{EpisodeToken, SeasonToken};
pub use platform::SocialPlatform;
pub use view::SocialAnalyticsView;
pub use week::{PRESEASON, WeekToken};

/// A segment recognized as one of the structural token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Season(SeasonToken),
    Episode(EpisodeToken),
    Week(WeekToken),
    Platform(SocialPlatform),
}

impl Token {
    /// Classify a single segment, trying season, episode, week, platform.
    pub fn classify(segment: &str) -> Option<Self> {
        SeasonToken::parse(segment)
            .map(Self::Season)
            .or_else(|| EpisodeToken::parse(segment).map(Self::Episode))
            .or_else(|| WeekToken::parse(segment).map(Self::Week))
            .or_else(|| SocialPlatform::parse(segment).map(Self::Platform))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Season(t) => t.fmt(f),
            Self::Episode(t) => t.fmt(f),
            Self::Week(t) => t.fmt(f),
            Self::Platform(t) => t.fmt(f),
        }
    }
}
