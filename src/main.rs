//! # portfolio-projects
//!
//! A small CLI for rendering the portfolio project registry: the fixed,
//! compile-time list of project metadata shown on the website's projects page.
//!
//! The registry itself lives in the library crate; this binary is one of its
//! consumers. It prints the listing in declared order, resolves a single entry
//! from a slug, or dumps the known slug set, as text or as a single JSON
//! document.
//!
//! ## Features
//!
//! - Full listing in declared display order
//! - Per-slug lookup with a friendly not-found path
//! - The derived set of known slugs
//! - JSON mode for scripting (`--json`)
//! - Persistent defaults via `~/.config/portfolio-projects/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # List every project
//! portfolio-projects
//!
//! # Narrow the listing to one language label
//! portfolio-projects list --language Python
//!
//! # Look up a single project
//! portfolio-projects show codii
//!
//! # Machine-readable output
//! portfolio-projects show codii --json
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use portfolio_projects::{
    config::FileConfig,
    output::{JsonListing, JsonLookup, JsonSlugs},
    project::{ProjectEntry, ProjectRegistry},
};
use std::process::exit;

/// Entry point for the portfolio-projects application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Resolves the effective options (CLI argument > config file > default)
/// 4. Renders the requested view of the registry, as text or JSON
///
/// A lookup miss on `show` is not an error: it prints a not-found message (or
/// a `found: false` JSON document) and exits with status 1.
///
/// # Errors
///
/// This function can return errors from:
/// - Config file loading (malformed TOML)
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let (file_config, config_warning) = match FileConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (FileConfig::default(), Some(e)),
    };

    let json_mode = args.json(&file_config);

    if let Some(e) = config_warning
        && !json_mode
    {
        eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
    }

    let registry = ProjectRegistry::builtin();

    match args.command() {
        Command::List { .. } => run_list(&registry, args.language_filter(&file_config), json_mode),
        Command::Show { slug } => run_show(&registry, &slug, json_mode),
        Command::Slugs => run_slugs(&registry, json_mode),
    }
}

/// Render the listing, optionally narrowed to one language label.
fn run_list(registry: &ProjectRegistry, language: Option<String>, json_mode: bool) -> Result<()> {
    let entries: Vec<&ProjectEntry> = match &language {
        Some(label) => registry.entries_for_language(label),
        None => registry.iter().collect(),
    };

    if json_mode {
        let output = JsonListing::from_entries(&entries);
        println!("{}", serde_json::to_string_pretty(&output)?);

        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "✨ No projects match the requested language!".green());

        return Ok(());
    }

    println!("{}", "📁 Portfolio projects:".bold());
    for entry in &entries {
        display_listing_line(entry);
    }

    println!(
        "\n  {} projects",
        entries.len().to_string().bright_white()
    );

    Ok(())
}

/// Render a single entry resolved from a slug.
fn run_show(registry: &ProjectRegistry, slug: &str, json_mode: bool) -> Result<()> {
    let result = registry.find_by_slug(slug);

    if json_mode {
        let output = JsonLookup::from_result(slug, result);
        println!("{}", serde_json::to_string_pretty(&output)?);

        if result.is_none() {
            exit(1);
        }

        return Ok(());
    }

    match result {
        Some(entry) => {
            display_entry(entry);

            Ok(())
        }
        None => {
            println!(
                "{} {}",
                "No project found for slug:".yellow(),
                slug.bright_white()
            );
            println!(
                "Known slugs: {}",
                registry.slugs().collect::<Vec<_>>().join(", ")
            );

            exit(1);
        }
    }
}

/// Print the derived slug set.
fn run_slugs(registry: &ProjectRegistry, json_mode: bool) -> Result<()> {
    if json_mode {
        let output = JsonSlugs::from_registry(registry);
        println!("{}", serde_json::to_string_pretty(&output)?);

        return Ok(());
    }

    for slug in registry.slugs() {
        println!("{slug}");
    }

    Ok(())
}

/// Print one entry as a listing block: name, summary, and URL.
fn display_listing_line(entry: &ProjectEntry) {
    println!(
        "\n  {} ({})",
        entry.name.bright_white().bold(),
        entry.language
    );
    println!("      {}", entry.description);
    println!("      {}", entry.url.green());
}

/// Print the detail view of a single entry.
fn display_entry(entry: &ProjectEntry) {
    println!("{} {}", "📁".bold(), entry.to_string().bright_white().bold());
    println!("  slug:     {}", entry.slug);
    println!("  language: {}", entry.language);
    println!("  url:      {}", entry.url.green());
    println!("\n  {}", entry.description);
}
