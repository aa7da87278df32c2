use clap::{Parser, Subcommand};

/// CLI arguments for tzfind
#[derive(Debug, Parser)]
#[command(
    name = "tzfind",
    version,
    about = "CLI for ranking and inspecting the tzfind timezone reference table"
)]
pub struct CliArgs {
    /// Use a tab-separated table file instead of the built-in one
    #[arg(short = 't', long = "table", global = true)]
    pub table: Option<String>,

    /// Resolver settings as JSON (k, query_source, include_global_zones)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table contents
    Stats,

    /// Rank the table against a query and print the best rows
    Rank {
        /// Free-form query (e.g. "Tokyo" or a whole request)
        query: String,

        /// Number of rows to print
        #[arg(short = 'k', long = "top")]
        k: Option<usize>,

        /// Also print similarity scores
        #[arg(short = 's', long = "scores")]
        scores: bool,
    },

    /// Print the prompt that would be sent to the answer generator
    Prompt {
        /// The original request
        request: String,

        /// Number of candidate rows
        #[arg(short = 'k', long = "top")]
        k: Option<usize>,

        /// Query to rank against instead of the request (stands in for a phrase extractor)
        #[arg(short = 'p', long = "phrase")]
        phrase: Option<String>,

        /// Leave out the country-less reference zones
        #[arg(long = "no-global")]
        no_global: bool,
    },

    /// List zones for a country code
    Country {
        /// ISO2 code (e.g. DE, jp)
        code: String,
    },

    /// Show details for a TZ identifier
    Zone {
        /// TZ identifier, case-insensitive (e.g. europe/berlin)
        identifier: String,
    },
}
