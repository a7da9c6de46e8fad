//! Core project record type.
//!
//! This module defines the record that describes a single portfolio project.
//! Every entry in the registry is one of these, and all fields are borrowed
//! from the binary's static data so records can live in a `static` table and
//! be copied around freely.

use std::fmt::{Display, Formatter, Result};

/// Metadata for a single portfolio project.
///
/// An entry is pure data: five mandatory string fields describing one project
/// shown on the projects page. Entries are declared once, at compile time, and
/// never mutated; the registry hands out references into the static table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectEntry {
    /// Unique, URL-safe identifier for the project.
    ///
    /// The slug doubles as the cross-reference key for externally-authored
    /// content: blog posts carry a `project` field that should match one of
    /// these values. That match is validated by whatever wires the two
    /// together, not here.
    pub slug: &'static str,

    /// Human-readable display name.
    ///
    /// Usually the same as the slug, but not necessarily (`codii` is shown
    /// as `codii.dev`).
    pub name: &'static str,

    /// Free-text summary shown in the listing.
    pub description: &'static str,

    /// Absolute URL to the project's external home.
    ///
    /// Either a repository or a dedicated site.
    pub url: &'static str,

    /// Free-text label describing the implementation language(s).
    ///
    /// This is not a controlled enumeration; combined labels such as
    /// `"Python & TypeScript"` are valid values.
    pub language: &'static str,
}

impl Display for ProjectEntry {
    /// Format the entry as a single line suitable for compact listings.
    ///
    /// # Examples
    ///
    /// - `hookedllm (https://github.com/mkarots/hookedllm)`
    /// - `codii.dev (https://codii.dev)`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
