//! Registry collection and lookup operations.
//!
//! This module provides the `ProjectRegistry` struct which wraps an ordered,
//! immutable table of project entries and provides the operations consumers
//! need: iteration in declared order, lookup by slug, and the derived set of
//! known slugs.

use super::{ProjectEntry, data::PROJECTS};

/// An ordered, immutable collection of project entries.
///
/// The registry is a thin wrapper around a `'static` slice of entries. It has
/// a single state (populated, immutable) for the lifetime of the process, so
/// it is `Copy` and can be read from any number of threads without
/// coordination. The canonical instance wraps the built-in [`PROJECTS`] table;
/// alternative tables (fixtures, future split listings) go through
/// [`ProjectRegistry::new`].
#[derive(Clone, Copy, Debug)]
pub struct ProjectRegistry {
    /// The backing table, in display order
    entries: &'static [ProjectEntry],
}

impl ProjectRegistry {
    /// Create a registry over an arbitrary entry table.
    ///
    /// # Arguments
    ///
    /// * `entries` - The backing table; its declaration order is the display
    ///   order
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_projects::project::{ProjectEntry, ProjectRegistry};
    ///
    /// static TABLE: &[ProjectEntry] = &[];
    /// let registry = ProjectRegistry::new(TABLE);
    /// assert!(registry.is_empty());
    /// ```
    #[must_use]
    pub const fn new(entries: &'static [ProjectEntry]) -> Self {
        Self { entries }
    }

    /// The registry over the built-in [`PROJECTS`] table.
    ///
    /// This is the instance every real consumer wants; the website listing,
    /// the CLI, and the tests all read the same table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(PROJECTS)
    }

    /// All entries in declared order.
    ///
    /// Repeated calls return the same slice; nothing is computed, filtered,
    /// or reordered.
    #[must_use]
    pub const fn as_slice(&self) -> &'static [ProjectEntry] {
        self.entries
    }

    /// Iterate over the entries in declared order.
    pub fn iter(&self) -> std::slice::Iter<'static, ProjectEntry> {
        self.entries.iter()
    }

    /// The number of entries in the registry.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its slug.
    ///
    /// The match is exact and case-sensitive: the slug is a key, not a search
    /// term. A miss is a normal outcome for the caller to handle (an unknown
    /// route renders a 404), so it surfaces as `None` rather than an error.
    ///
    /// # Arguments
    ///
    /// * `slug` - The slug to resolve
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_projects::project::ProjectRegistry;
    ///
    /// let registry = ProjectRegistry::builtin();
    /// assert!(registry.find_by_slug("hookedllm").is_some());
    /// assert!(registry.find_by_slug("nonexistent-slug").is_none());
    /// ```
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&'static ProjectEntry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    /// Whether a slug refers to a known project.
    #[must_use]
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.find_by_slug(slug).is_some()
    }

    /// The derived set of valid slugs, in declared order.
    ///
    /// Consumers that accept a project parameter use this (or
    /// [`ProjectRegistry::contains_slug`]) to constrain it to known projects,
    /// e.g. when validating the `project` field of a blog post.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.slug)
    }

    /// The entries whose language label matches exactly, in declared order.
    ///
    /// The label is the free-text `language` field, so `"Python"` does not
    /// match `"Python & TypeScript"`. An unknown label yields an empty list.
    #[must_use]
    pub fn entries_for_language(&self, language: &str) -> Vec<&'static ProjectEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.language == language)
            .collect()
    }
}

impl Default for ProjectRegistry {
    /// The built-in registry; equivalent to [`ProjectRegistry::builtin`].
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<&'static [ProjectEntry]> for ProjectRegistry {
    /// Wrap an entry table in a registry.
    fn from(entries: &'static [ProjectEntry]) -> Self {
        Self::new(entries)
    }
}

impl IntoIterator for ProjectRegistry {
    type Item = &'static ProjectEntry;
    type IntoIter = std::slice::Iter<'static, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for &ProjectRegistry {
    type Item = &'static ProjectEntry;
    type IntoIter = std::slice::Iter<'static, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_default() {
        let builtin = ProjectRegistry::builtin();
        let default = ProjectRegistry::default();

        assert_eq!(builtin.as_slice(), default.as_slice());
    }

    #[test]
    fn test_find_by_slug_is_exact() {
        let registry = ProjectRegistry::builtin();

        assert!(registry.find_by_slug("codii").is_some());
        assert!(registry.find_by_slug("Codii").is_none());
        assert!(registry.find_by_slug("codii ").is_none());
    }

    #[test]
    fn test_entries_for_language_matches_label_exactly() {
        let registry = ProjectRegistry::builtin();

        let python = registry.entries_for_language("Python");
        assert!(!python.is_empty());
        assert!(python.iter().all(|entry| entry.language == "Python"));

        // A combined label is its own value, not a union of its parts.
        assert!(!python.iter().any(|entry| entry.slug == "codii"));
        assert_eq!(registry.entries_for_language("COBOL").len(), 0);
    }

    #[test]
    fn test_iteration_matches_slice() {
        let registry = ProjectRegistry::builtin();
        let collected: Vec<_> = registry.iter().collect();
        let from_slice: Vec<_> = registry.as_slice().iter().collect();

        assert_eq!(collected, from_slice);
    }

    #[test]
    fn test_into_iterator_forms_agree() {
        let registry = ProjectRegistry::builtin();

        // The registry is `Copy`, so the owned form does not consume it.
        let owned: Vec<_> = registry.into_iter().map(|entry| entry.slug).collect();
        let by_ref: Vec<_> = (&registry).into_iter().map(|entry| entry.slug).collect();

        assert_eq!(owned, by_ref);
        assert_eq!(owned, registry.slugs().collect::<Vec<_>>());
    }
}
