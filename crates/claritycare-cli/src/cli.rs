use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "claritycare")]
#[command(
    author,
    version,
    about = "Browse vetted health-education topics, with a developer content-safety linter"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the topic dataset
    #[arg(long, global = true, default_value = "data/topics.json")]
    pub topics: PathBuf,

    /// Directory holding image assets
    #[arg(long, global = true, default_value = "assets")]
    pub assets: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics, with optional category and search filters
    List {
        /// Category filter ("All" passes everything)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Search over titles and summaries
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Render one topic by title
    Show {
        /// Topic title (matched case-insensitively)
        title: String,

        /// Hide the ELI5 summary
        #[arg(long)]
        no_eli5: bool,

        /// Show extra-detail captions where authored
        #[arg(long)]
        extra_detail: bool,

        /// Show developer safety warnings for this topic
        #[arg(long)]
        dev_warnings: bool,
    },

    /// Run the content-safety linter across the dataset
    Lint {
        /// Lint a single topic by title instead of the whole dataset
        #[arg(long)]
        topic: Option<String>,

        /// Scan-policy YAML overriding the built-in table and thresholds
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}
