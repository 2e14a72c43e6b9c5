//! Person slugs.
//!
//! A person route slug is the name slug plus a short id prefix that keeps
//! two people with the same name apart:
//!
//! ```text
//! "Meredith Marks" + 7f528757-5017-... -> meredith-marks--7f528757
//! ```

use serde::Serialize;

const COLLISION_SEPARATOR: &str = "--";
const ID_PREFIX_MAX: usize = 8;

/// URL slug for a display name: ASCII-transliterated, `&` spelled `and`,
/// lowercase, runs of anything else collapsed to a single `-`.
pub fn to_person_slug(name: &str) -> String {
    let ascii = deunicode::deunicode(name).replace('&', " and ");
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// First dash-group of an id, lowercase alphanumeric, at most 8 chars.
fn id_prefix(person_id: &str) -> String {
    person_id
        .trim()
        .split('-')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(ID_PREFIX_MAX)
        .collect()
}

/// `{name-slug}--{id-prefix}`. Either half is dropped when it is empty.
pub fn build_person_route_slug(person_name: &str, person_id: &str) -> String {
    let slug = to_person_slug(person_name);
    let prefix = id_prefix(person_id);
    match (slug.is_empty(), prefix.is_empty()) {
        (_, true) => slug,
        (true, false) => prefix,
        (false, false) => format!("{slug}{COLLISION_SEPARATOR}{prefix}"),
    }
}

/// A person route slug split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRouteSlug {
    pub name_slug: String,
    pub id_prefix: Option<String>,
}

/// Split `meredith-marks--7f528757` into name slug and id prefix.
///
/// A slug without a well-formed suffix is all name.
pub fn parse_person_route_slug(route_slug: &str) -> PersonRouteSlug {
    let route_slug = route_slug.trim();
    if let Some((name, prefix)) = route_slug.rsplit_once(COLLISION_SEPARATOR)
        && !name.is_empty()
        && (1..=ID_PREFIX_MAX).contains(&prefix.len())
        && prefix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    {
        return PersonRouteSlug {
            name_slug: name.to_owned(),
            id_prefix: Some(prefix.to_owned()),
        };
    }
    PersonRouteSlug {
        name_slug: route_slug.to_owned(),
        id_prefix: None,
    }
}

/// Readable label for a person slug: `meredith-marks--7f528757` -> `Meredith Marks`.
pub fn humanize_person_slug(route_slug: &str) -> String {
    let parsed = parse_person_route_slug(route_slug);
    parsed
        .name_slug
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
