use clap::Subcommand;
use std::path::PathBuf;

use crate::answers::ExportFormat;

pub mod inspect;
pub mod languages;
pub mod play;

#[derive(Subcommand)]
pub enum Commands {
    /// Show a tree's languages, start node and node list
    Inspect {
        /// Unpacked tree directory
        path: PathBuf,
    },

    /// Walk through a tree interactively
    Play {
        /// Unpacked tree directory
        path: PathBuf,

        /// Language to play in (defaults to the tree's base language)
        #[arg(short, long)]
        language: Option<String>,

        /// Player configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory to write the answer export into
        #[arg(short, long, default_value = ".")]
        export_dir: PathBuf,

        /// Export format, overriding the configuration
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// List the languages a tree is available in
    Languages {
        /// Unpacked tree directory
        path: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Inspect { path } => inspect::execute(path),
            Commands::Play {
                path,
                language,
                config,
                export_dir,
                format,
            } => play::execute(
                path,
                language.as_deref(),
                config.as_deref(),
                export_dir,
                *format,
            ),
            Commands::Languages { path } => languages::execute(path),
        }
    }
}
