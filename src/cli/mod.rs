use clap::{Subcommand, ValueEnum};

use crate::domain::DEFAULT_TOP_K;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the service for assessments matching a query or job description
    Recommend {
        query: String,

        /// Number of recommendations to request
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Send several queries in one request
    Batch {
        #[arg(required = true)]
        queries: Vec<String>,

        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that the recommendation service is up
    Health,

    /// Interactive terminal interface
    Tui {
        /// Initial number of recommendations to request
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,
    },
}
