//! CLI module
//!
//! Command-line interface for exercising the connector outside the host.
//!
//! # Commands
//!
//! - `spec` - Print identity and configuration form
//! - `check` - Test connection to the database
//! - `query` - Run a SQL query and print the result table
//! - `schema` - Print every container and its columns

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
