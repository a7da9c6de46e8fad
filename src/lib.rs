//! # portfolio-projects
//!
//! The fixed list of portfolio project metadata (slug, name, description, URL,
//! language) rendered by the website's projects page, plus the plumbing a small
//! CLI consumer needs to display it.
//!
//! This library provides the project registry itself: an ordered, compile-time
//! table of project records with lookup by slug. Consumers iterate the table in
//! declared order or resolve a single entry from a slug.

pub mod config;
pub mod output;
pub mod project;
