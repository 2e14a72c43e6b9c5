//! Core types - pure value types shared by resolvers and builders.

mod query;
mod source;
mod tab;
mod url;

pub use query::{LEGACY_ROUTING_KEYS, QueryParams};
pub use source::RouteSource;
pub use tab::{
    AssetsSubTab, HasAssetsTab, PersonAdminTab, SeasonAdminTab, ShowAdminTab, UnknownLiteral,
};
pub use url::{PathSegments, encode_component, normalize_key, split_location};
