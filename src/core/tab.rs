//! Tab and sub-tab literals for the show, season and person pages.
//!
//! Each enum has exactly one canonical spelling per variant. Legacy spellings
//! live in [`crate::alias`], never here.

use serde::Serialize;

/// Error returned when a string is not a canonical literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical spelling used in URLs.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $lit ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownLiteral;

            /// Parse a canonical spelling (trimmed, case-insensitive).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase();
                match key.as_str() {
                    $( $lit => Ok(Self::$variant), )+
                    _ => Err(UnknownLiteral { kind: $kind, value: s.to_owned() }),
                }
            }
        }
    };
}

literal_enum! {
    /// Top-level tab of a show page.
    ShowAdminTab ("show tab") {
        Details => "details",
        Settings => "settings",
        Seasons => "seasons",
        Assets => "assets",
        News => "news",
        Cast => "cast",
        Surveys => "surveys",
        Social => "social",
    }
    default = Details
}

literal_enum! {
    /// Top-level tab of a season page.
    SeasonAdminTab ("season tab") {
        Overview => "overview",
        Episodes => "episodes",
        Assets => "assets",
        News => "news",
        Cast => "cast",
        Surveys => "surveys",
        Social => "social",
        Fandom => "fandom",
    }
    default = Overview
}

literal_enum! {
    /// Tab of a person page.
    PersonAdminTab ("person tab") {
        Overview => "overview",
        Gallery => "gallery",
        Videos => "videos",
        News => "news",
        Credits => "credits",
        Fandom => "fandom",
    }
    default = Overview
}

literal_enum! {
    /// Sub-tab of the assets tab (shared by show and season pages).
    AssetsSubTab ("assets sub-tab") {
        Images => "images",
        Videos => "videos",
        Branding => "branding",
    }
    default = Images
}

/// Tab enums that have an assets tab.
pub trait HasAssetsTab: Copy + Eq {
    /// The variant that selects the assets tab.
    const ASSETS: Self;

    /// The variant rendered when the URL carries no tab segment.
    const ROOT: Self;
}

impl HasAssetsTab for ShowAdminTab {
    const ASSETS: Self = Self::Assets;
    const ROOT: Self = Self::Details;
}

impl HasAssetsTab for SeasonAdminTab {
    const ASSETS: Self = Self::Assets;
    const ROOT: Self = Self::Overview;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for tab in ShowAdminTab::ALL {
            assert_eq!(tab.as_str().parse::<ShowAdminTab>(), Ok(*tab));
        }
        for tab in SeasonAdminTab::ALL {
            assert_eq!(tab.as_str().parse::<SeasonAdminTab>(), Ok(*tab));
        }
        for tab in PersonAdminTab::ALL {
            assert_eq!(tab.as_str().parse::<PersonAdminTab>(), Ok(*tab));
        }
        for sub in AssetsSubTab::ALL {
            assert_eq!(sub.as_str().parse::<AssetsSubTab>(), Ok(*sub));
        }
    }

    #[test]
    fn test_counts() {
        assert_eq!(ShowAdminTab::ALL.len(), 8);
        assert_eq!(SeasonAdminTab::ALL.len(), 8);
        assert_eq!(PersonAdminTab::ALL.len(), 6);
        assert_eq!(AssetsSubTab::ALL.len(), 3);
    }

    #[test]
    fn test_from_str_is_canonical_only() {
        // Legacy spellings are alias-table business
        assert!("gallery".parse::<ShowAdminTab>().is_err());
        assert!("brand".parse::<AssetsSubTab>().is_err());
        assert_eq!(" CAST ".parse::<ShowAdminTab>(), Ok(ShowAdminTab::Cast));
    }

    #[test]
    fn test_unknown_literal_display() {
        let err = "bogus".parse::<PersonAdminTab>().unwrap_err();
        assert_eq!(err.to_string(), "unknown person tab `bogus`");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ShowAdminTab::default(), ShowAdminTab::Details);
        assert_eq!(SeasonAdminTab::default(), SeasonAdminTab::Overview);
        assert_eq!(PersonAdminTab::default(), PersonAdminTab::Overview);
        assert_eq!(AssetsSubTab::default(), AssetsSubTab::Images);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&SeasonAdminTab::Fandom).unwrap();
        assert_eq!(json, r#""fandom""#);
    }
}
