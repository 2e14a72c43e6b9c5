//! `slug` command.

use serde::Serialize;
use trr_routes::build::{build_person_route_slug, parse_person_route_slug, to_person_slug};

#[derive(Debug, Serialize)]
pub struct SlugReport {
    pub slug: String,
    pub name_slug: String,
    pub id_prefix: Option<String>,
}

pub fn person_slug(name: &str, id: Option<&str>) -> SlugReport {
    let name_slug = to_person_slug(name);
    let Some(id) = id else {
        return SlugReport {
            slug: name_slug.clone(),
            name_slug,
            id_prefix: None,
        };
    };
    let slug = build_person_route_slug(name, id);
    let id_prefix = parse_person_route_slug(&slug).id_prefix;
    SlugReport {
        slug,
        name_slug,
        id_prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id() {
        let report = person_slug("Meredith Marks", Some("7f528757-5017-4599-8252-c02f0d0736cf"));
        assert_eq!(report.slug, "meredith-marks--7f528757");
        assert_eq!(report.name_slug, "meredith-marks");
        assert_eq!(report.id_prefix.as_deref(), Some("7f528757"));
    }

    #[test]
    fn test_without_id() {
        let report = person_slug("Jax & Brittany", None);
        assert_eq!(report.slug, "jax-and-brittany");
        assert_eq!(report.id_prefix, None);
    }
}
