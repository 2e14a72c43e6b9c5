//! Season (`sN`) and episode (`eN`) tokens.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::normalize_key;

static SEASON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^s([0-9]{1,3})$").expect("season token regex"));

static EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^e([0-9]{1,4})$").expect("episode token regex"));

/// Largest season a token can carry (three digits).
pub const MAX_SEASON: u32 = 999;

/// Largest episode a token can carry (four digits).
pub const MAX_EPISODE: u32 = 9999;

/// Capture the numeric suffix of a lowercased token.
fn capture_number(re: &Regex, segment: &str) -> Option<u32> {
    let key = normalize_key(segment);
    let caps = re.captures(&key)?;
    caps.get(1)?.as_str().parse().ok()
}

/// `s6` -> season 6.
///
/// `s0` is syntactically a season token; [`SeasonToken::is_valid`] is the
/// semantic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonToken(pub u32);

impl SeasonToken {
    pub fn parse(segment: &str) -> Option<Self> {
        capture_number(&SEASON_RE, segment).map(Self)
    }

    /// Parse a legacy `seasons/:n` value: bare digits or an `sN` token.
    pub fn parse_legacy_number(segment: &str) -> Option<Self> {
        let key = normalize_key(segment);
        if !key.is_empty() && key.len() <= 3 && key.bytes().all(|b| b.is_ascii_digit()) {
            return key.parse().ok().map(Self);
        }
        Self::parse(&key)
    }

    /// Build from a caller-supplied number in `1..=MAX_SEASON`.
    pub fn from_number(n: i64) -> Option<Self> {
        u32::try_from(n)
            .ok()
            .filter(|n| *n <= MAX_SEASON)
            .map(Self)
            .filter(|t| t.is_valid())
    }

    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for SeasonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// `e3` -> episode 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeToken(pub u32);

impl EpisodeToken {
    pub fn parse(segment: &str) -> Option<Self> {
        capture_number(&EPISODE_RE, segment).map(Self)
    }

    /// Build from a caller-supplied number in `1..=MAX_EPISODE`.
    pub fn from_number(n: i64) -> Option<Self> {
        u32::try_from(n)
            .ok()
            .filter(|n| *n <= MAX_EPISODE)
            .map(Self)
            .filter(|t| t.is_valid())
    }

    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for EpisodeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
