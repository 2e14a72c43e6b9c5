//! Precedence tier that produced a resolved route state.

use serde::Serialize;

/// Which input decided the tab.
///
/// Diagnostic only: callers render the same page regardless of the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// A path segment named the tab - always wins over the query.
    Path,
    /// The legacy `tab` query parameter named the tab.
    Query,
    /// Nothing matched; the hierarchy's default tab.
    Default,
}
