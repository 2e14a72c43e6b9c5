//! Social platform slugs.

use serde::Serialize;

use crate::core::normalize_key;

/// Closed set of platforms with their own analytics pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Tiktok,
    Twitter,
    Youtube,
    Facebook,
    Threads,
}

impl SocialPlatform {
    pub const ALL: &'static [Self] = &[
        Self::Instagram,
        Self::Tiktok,
        Self::Twitter,
        Self::Youtube,
        Self::Facebook,
        Self::Threads,
    ];

    /// Case-insensitive parse of a platform segment.
    pub fn parse(segment: &str) -> Option<Self> {
        match normalize_key(segment).as_str() {
            "instagram" => Some(Self::Instagram),
            "tiktok" => Some(Self::Tiktok),
            "twitter" => Some(Self::Twitter),
            "youtube" => Some(Self::Youtube),
            "facebook" => Some(Self::Facebook),
            "threads" => Some(Self::Threads),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::Threads => "threads",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = crate::core::UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::core::UnknownLiteral {
            kind: "social platform",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(SocialPlatform::parse("TikTok"), Some(SocialPlatform::Tiktok));
        assert_eq!(SocialPlatform::parse(" youtube "), Some(SocialPlatform::Youtube));
        assert_eq!(SocialPlatform::parse("reddit"), None);
        assert_eq!(SocialPlatform::parse(""), None);
    }

    #[test]
    fn test_round_trip() {
        for platform in SocialPlatform::ALL {
            assert_eq!(SocialPlatform::parse(platform.as_str()), Some(*platform));
        }
    }
}
