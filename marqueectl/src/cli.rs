use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use marquee_core::model::ImageKind;

#[derive(Debug, Parser)]
#[command(
    name = "marqueectl",
    version,
    about = "Browse an AI-curated movie catalog from the terminal"
)]
pub struct Cli {
    /// Path to marquee.toml (defaults to ./marquee.toml or config/marquee.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the hero title and every catalog row
    Browse {
        /// Skip the content provider and show the static picks only
        #[arg(long)]
        offline: bool,
        #[arg(long)]
        json: bool,
    },
    /// Load a single row by genre heading
    Row {
        genre: String,
        #[arg(long)]
        json: bool,
    },
    /// Search for titles
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show cast, runtime and mood for a title
    Details {
        title: String,
        /// Narrow the match to this release year
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        json: bool,
    },
    /// Resolve artwork URLs for a JSON movie (or array) read from FILE or stdin
    Resolve { file: Option<PathBuf> },
    /// Print the placeholder image URL for a title
    Placeholder {
        title: String,
        #[arg(long, value_enum, default_value = "poster")]
        kind: KindArg,
    },
    /// List the configured row headings
    Genres,
    /// Print the effective configuration with the API key masked
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Poster,
    Backdrop,
}

impl From<KindArg> for ImageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Poster => ImageKind::Poster,
            KindArg::Backdrop => ImageKind::Backdrop,
        }
    }
}

impl Command {
    /// Commands that never talk to the content provider.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Command::Browse { offline: true, .. }
                | Command::Resolve { .. }
                | Command::Placeholder { .. }
                | Command::Genres
                | Command::Config
        )
    }
}
