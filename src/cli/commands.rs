//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GridDB connector CLI
#[derive(Parser, Debug)]
#[command(name = "griddb-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON (takes precedence over --config)
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Transport timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum requests per second sent to the Web API
    #[arg(long, global = true)]
    pub rate_limit: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show connector specification
    Spec,

    /// Test connection to the database
    Check,

    /// Run a SQL query
    Query {
        /// SQL text
        sql: Option<String>,

        /// Read the SQL text from a file
        #[arg(long, conflicts_with = "sql")]
        file: Option<PathBuf>,
    },

    /// List containers and their columns
    Schema,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Indented JSON
    Pretty,
}
