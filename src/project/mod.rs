//! Project registry data and operations.
//!
//! This module contains the data structures that make up the project
//! registry: the individual project record, the authoritative table of
//! published projects, and the collection type consumers read it through.
//!
//! ## Main Parts
//!
//! - [`ProjectEntry`] - Metadata for a single portfolio project
//! - [`PROJECTS`] - The built-in table of published projects, in display order
//! - [`ProjectRegistry`] - The collection with iteration and slug lookup

pub mod data;
pub mod entry;
pub mod registry;

pub use data::PROJECTS;
pub use entry::ProjectEntry;
pub use registry::ProjectRegistry;
