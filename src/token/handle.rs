//! Account handle slugs.

/// Normalize an account handle: strip one leading `@`, lowercase, and keep
/// only `[a-z0-9._-]`.
///
/// Returns `None` when nothing survives, never an empty string. The result
/// is a fixed point: normalizing it again yields the same value.
///
/// # Examples
/// ```
/// use trr_routes::token::normalize_handle_slug;
/// assert_eq!(normalize_handle_slug("@Lisa.Barlow!!").as_deref(), Some("lisa.barlow"));
/// assert_eq!(normalize_handle_slug("@"), None);
/// ```
pub fn normalize_handle_slug(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let without_at = trimmed.strip_prefix('@').unwrap_or(trimmed);
    let slug: String = without_at
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
        .collect();
    (!slug.is_empty()).then_some(slug)
}

/// Normalize a reddit community reference: strip `r/`, lowercase, and keep
/// only `[a-z0-9_-]`. `None` when nothing survives.
pub fn normalize_community_slug(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let name = lowered
        .strip_prefix("/r/")
        .or_else(|| lowered.strip_prefix("r/"))
        .unwrap_or(&lowered);
    let slug: String = name
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect();
    (!slug.is_empty()).then_some(slug)
}
