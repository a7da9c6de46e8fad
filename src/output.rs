//! JSON output documents for the CLI.
//!
//! When `--json` is active the CLI emits exactly one document on stdout and
//! nothing else. The document types live here, separate from the domain
//! types: the registry records stay serialization-free and this module owns
//! the wire shape.

use serde::Serialize;

use crate::project::{ProjectEntry, ProjectRegistry};

/// A single project entry as it appears in JSON output.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonProject {
    /// Unique project identifier
    pub slug: &'static str,

    /// Human-readable display name
    pub name: &'static str,

    /// Free-text summary
    pub description: &'static str,

    /// Absolute URL to the project's home
    pub url: &'static str,

    /// Free-text implementation language label
    pub language: &'static str,
}

impl From<&'static ProjectEntry> for JsonProject {
    fn from(entry: &'static ProjectEntry) -> Self {
        Self {
            slug: entry.slug,
            name: entry.name,
            description: entry.description,
            url: entry.url,
            language: entry.language,
        }
    }
}

/// The document emitted by `list --json`.
#[derive(Serialize, Debug)]
pub struct JsonListing {
    /// Number of projects in the listing
    pub count: usize,

    /// The projects, in display order
    pub projects: Vec<JsonProject>,
}

impl JsonListing {
    /// Build a listing document from the entries to display.
    ///
    /// The entry order is preserved; `count` always equals `projects.len()`.
    #[must_use]
    pub fn from_entries(entries: &[&'static ProjectEntry]) -> Self {
        let projects: Vec<JsonProject> = entries.iter().map(|&entry| entry.into()).collect();

        Self {
            count: projects.len(),
            projects,
        }
    }
}

/// The document emitted by `show --json`.
///
/// A lookup miss is a normal result, not an error: the document still renders,
/// with `found: false` and no project payload.
#[derive(Serialize, Debug)]
pub struct JsonLookup {
    /// The slug that was queried (echoed back verbatim)
    pub slug: String,

    /// Whether the slug resolved to a known project
    pub found: bool,

    /// The resolved project, when found
    pub project: Option<JsonProject>,
}

impl JsonLookup {
    /// Build a lookup document from a lookup result.
    #[must_use]
    pub fn from_result(slug: &str, result: Option<&'static ProjectEntry>) -> Self {
        Self {
            slug: slug.to_string(),
            found: result.is_some(),
            project: result.map(Into::into),
        }
    }
}

/// The document emitted by `slugs --json`.
#[derive(Serialize, Debug)]
pub struct JsonSlugs {
    /// All known slugs, in display order
    pub slugs: Vec<&'static str>,
}

impl JsonSlugs {
    /// Build a slug-set document from a registry.
    #[must_use]
    pub fn from_registry(registry: &ProjectRegistry) -> Self {
        Self {
            slugs: registry.slugs().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_preserves_order_and_count() {
        let registry = ProjectRegistry::builtin();
        let entries: Vec<_> = registry.iter().collect();
        let listing = JsonListing::from_entries(&entries);

        assert_eq!(listing.count, registry.len());
        assert_eq!(listing.projects.len(), registry.len());

        let slugs: Vec<_> = listing.projects.iter().map(|p| p.slug).collect();
        let expected: Vec<_> = registry.slugs().collect();
        assert_eq!(slugs, expected);
    }

    #[test]
    fn test_lookup_hit_document() {
        let registry = ProjectRegistry::builtin();
        let result = registry.find_by_slug("hookedllm");
        let lookup = JsonLookup::from_result("hookedllm", result);

        assert_eq!(lookup.slug, "hookedllm");
        assert!(lookup.found);
        assert_eq!(lookup.project.unwrap().name, "hookedllm");
    }

    #[test]
    fn test_lookup_miss_document() {
        let registry = ProjectRegistry::builtin();
        let result = registry.find_by_slug("nonexistent-slug");
        let lookup = JsonLookup::from_result("nonexistent-slug", result);

        assert_eq!(lookup.slug, "nonexistent-slug");
        assert!(!lookup.found);
        assert!(lookup.project.is_none());
    }

    #[test]
    fn test_lookup_miss_serializes_with_null_project() {
        let lookup = JsonLookup::from_result("nope", None);
        let value = serde_json::to_value(&lookup).unwrap();

        assert_eq!(value["slug"], "nope");
        assert_eq!(value["found"], false);
        assert!(value["project"].is_null());
    }

    #[test]
    fn test_slugs_document() {
        let registry = ProjectRegistry::builtin();
        let slugs = JsonSlugs::from_registry(&registry);

        assert_eq!(slugs.slugs.len(), registry.len());
        assert!(slugs.slugs.contains(&"codii"));
    }
}
