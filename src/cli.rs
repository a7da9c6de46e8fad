use clap::{Parser, Subcommand};

use portfolio_projects::config::FileConfig;

#[derive(Parser)]
struct OutputArgs {
    /// Emit a single JSON document instead of the text rendering
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "portfolio-projects")]
#[command(about = "Render the portfolio project registry: list all projects or look one up by slug")]
pub(crate) struct Cli {
    /// What to display; defaults to the full listing
    #[command(subcommand)]
    command: Option<Command>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand, Clone)]
pub(crate) enum Command {
    /// List all projects in display order
    List {
        /// Only list projects whose language label matches exactly
        #[arg(short = 'l', long)]
        language: Option<String>,
    },

    /// Show a single project by its slug
    Show {
        /// The slug of the project to show
        slug: String,
    },

    /// Print the known project slugs, one per line
    Slugs,
}

impl Cli {
    /// The requested command; a bare invocation means the full listing.
    pub(crate) fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List { language: None })
    }

    /// Whether JSON output is active (CLI flag > config file > off).
    pub(crate) fn json(&self, config: &FileConfig) -> bool {
        self.output.json || config.output.json.unwrap_or(false)
    }

    /// The language filter for listings (CLI argument > config file > none).
    pub(crate) fn language_filter(&self, config: &FileConfig) -> Option<String> {
        if let Some(Command::List {
            language: Some(label),
        }) = &self.command
        {
            return Some(label.clone());
        }

        config.filtering.language.clone()
    }
}
