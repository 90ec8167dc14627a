use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::modules::{
    data_exchange::ExchangeFormat,
    session::{
        domain::value_objects::{default_max_year, DEFAULT_MIN_YEAR},
        SortMode,
    },
};

/// Command-line arguments for reelscout
#[derive(Parser, Debug)]
#[command(name = "reelscout")]
#[command(
    about = "Search movies, compare ratings and runtimes, exchange lists as JSON/CSV"
)]
#[command(version)]
pub struct Cli {
    /// Search endpoint, overrides REELSCOUT_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, overrides REELSCOUT_TIMEOUT_SECS
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the movie provider by title
    Search(SearchArgs),
    /// Load a JSON or CSV movie list and show it
    Import(ImportArgs),
    /// Rating and runtime comparison for a JSON or CSV movie list
    Stats(ImportArgs),
    /// Write an example CSV file to start an import from
    Template {
        /// Directory the template is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// List quick-pick titles
    Popular,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Movie title to look for
    pub query: String,

    #[arg(long, default_value_t = DEFAULT_MIN_YEAR)]
    pub min_year: i32,

    /// Defaults to the current year
    #[arg(long, default_value_t = default_max_year())]
    pub max_year: i32,

    /// relevance, newest, oldest or rating
    #[arg(long, default_value = "relevance")]
    pub sort: SortMode,

    /// Also write the results to a file (json or csv)
    #[arg(long)]
    pub export: Option<ExchangeFormat>,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Look up streaming offers for results that came without any
    #[arg(long, default_value_t = false)]
    pub offers: bool,

    /// Print each source item (poster fields removed) after its card
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Maximum number of cards printed
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON or CSV file
    pub file: PathBuf,

    /// Declared MIME type (application/json or text/csv); the extension is used otherwise
    #[arg(long)]
    pub mime: Option<String>,
}
