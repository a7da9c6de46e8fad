//! The project table.
//!
//! This is the single authoritative list of published projects. Entries appear
//! here in display order; adding, removing, or reordering a project is an edit
//! to this table and nothing else.

use super::ProjectEntry;

/// All published projects, in display order.
///
/// The slug must match the `project` field used by blog posts that reference
/// the project.
pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        slug: "hookedllm",
        name: "hookedllm",
        description: "HookedLLM allows you to run hooks before and after LLM calls.",
        url: "https://github.com/mkarots/hookedllm",
        language: "Python",
    },
    ProjectEntry {
        slug: "grompt",
        name: "grompt",
        description: "Grompt is a tool for decoupling prompts from your code.",
        url: "https://github.com/mkarots/grompt",
        language: "Python",
    },
    ProjectEntry {
        slug: "noesis",
        name: "noesis",
        description: "Noesis aims to make it simple for developers to deploy agentic applications with minimal effort.",
        url: "https://github.com/mkarots/noesis",
        language: "Python",
    },
    ProjectEntry {
        slug: "codii",
        name: "codii.dev",
        description: "Codii is an AI-powered code review assistant that helps you ship better code.",
        url: "https://codii.dev",
        language: "Python & TypeScript",
    },
    // ProjectEntry {
    //     slug: "tinyrag",
    //     name: "TinyRAG",
    //     description: "TinyRAG is a tiny RAG library that makes it easy to build small scale RAG applications.",
    //     url: "https://github.com/mkarots/tinyrag",
    //     language: "Python",
    // },
];
