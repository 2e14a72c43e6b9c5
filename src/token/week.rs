//! Week tokens: `wN`, with `preseason` accepted as week 0.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::normalize_key;

static WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^w([0-9]{1,3})$").expect("week token regex"));

/// Legacy spelling of week 0.
pub const PRESEASON: &str = "preseason";

/// Largest week a token can carry (three digits).
pub const MAX_WEEK: u32 = 999;

/// Social-analytics week. Week 0 is the pre-season.
///
/// Always serialized as `w{n}`; `preseason` is input-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekToken(pub u32);

impl WeekToken {
    pub fn parse(segment: &str) -> Option<Self> {
        let key = normalize_key(segment);
        if key == PRESEASON {
            return Some(Self(0));
        }
        let caps = WEEK_RE.captures(&key)?;
        caps.get(1)?.as_str().parse().ok().map(Self)
    }

    /// Parse the value of a legacy `week/:n` pair (bare digits).
    pub fn parse_legacy_index(segment: &str) -> Option<Self> {
        let key = normalize_key(segment);
        if key.is_empty() || key.len() > 3 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return Self::parse(&key);
        }
        key.parse().ok().map(Self)
    }

    /// Build from a caller-supplied index in `0..=MAX_WEEK`.
    pub fn from_index(n: i64) -> Option<Self> {
        u32::try_from(n).ok().filter(|n| *n <= MAX_WEEK).map(Self)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WeekToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}
