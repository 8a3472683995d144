pub mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "Browse the Open Library catalog from the terminal", long_about = None)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show trending books and the subject sections
    Trending,
    /// Search books by title, author or topic
    Search {
        /// Search terms
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Discover books by rotating through subjects
    Discover {
        /// Number of "surprise me" rounds
        #[arg(short, long, default_value_t = 1)]
        rounds: usize,
    },
    /// Show extended details for one record
    Detail {
        /// Catalog key, e.g. /works/OL45883W
        key: String,

        /// Open the cover image in the browser
        #[arg(long)]
        open_cover: bool,
    },
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the saved theme mode
    Show,
    /// Cycle light -> dark -> system
    Toggle,
    /// Save a specific mode
    Set {
        /// light, dark or system
        mode: String,
    },
}
