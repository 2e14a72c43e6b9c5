//! Social-analytics view slugs.

use serde::Serialize;

use crate::core::normalize_key;

/// Analytics view under the social tab.
///
/// `bravo` is accepted on input as the legacy name of [`Self::Official`];
/// it is never produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialAnalyticsView {
    #[default]
    Official,
    Sentiment,
    Hashtags,
    Advanced,
    Reddit,
}

impl SocialAnalyticsView {
    pub const ALL: &'static [Self] = &[
        Self::Official,
        Self::Sentiment,
        Self::Hashtags,
        Self::Advanced,
        Self::Reddit,
    ];

    /// Parse a view slug, folding the `bravo` alias into `official`.
    pub fn parse(segment: &str) -> Option<Self> {
        match normalize_key(segment).as_str() {
            "official" | "bravo" => Some(Self::Official),
            "sentiment" => Some(Self::Sentiment),
            "hashtags" => Some(Self::Hashtags),
            "advanced" => Some(Self::Advanced),
            "reddit" => Some(Self::Reddit),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Sentiment => "sentiment",
            Self::Hashtags => "hashtags",
            Self::Advanced => "advanced",
            Self::Reddit => "reddit",
        }
    }

    /// Reddit has its own path shape with no week/platform/handle segments.
    #[inline]
    pub const fn is_reddit(self) -> bool {
        matches!(self, Self::Reddit)
    }
}

impl std::fmt::Display for SocialAnalyticsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialAnalyticsView {
    type Err = crate::core::UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::core::UnknownLiteral {
            kind: "social view",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bravo_alias() {
        assert_eq!(SocialAnalyticsView::parse("bravo"), Some(SocialAnalyticsView::Official));
        assert_eq!(SocialAnalyticsView::parse("BRAVO"), Some(SocialAnalyticsView::Official));
        assert_eq!(SocialAnalyticsView::Official.as_str(), "official");
    }

    #[test]
    fn test_round_trip() {
        for view in SocialAnalyticsView::ALL {
            assert_eq!(SocialAnalyticsView::parse(view.as_str()), Some(*view));
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(SocialAnalyticsView::parse("tiktok-overview"), None);
        assert!("nope".parse::<SocialAnalyticsView>().is_err());
    }
}
