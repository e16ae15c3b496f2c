//! # GridDB Connector
//!
//! Lets an analytics front end run SQL against a GridDB cluster through its
//! Web API, and browse the database schema.
//!
//! ## Features
//!
//! - **Type Mapping**: GridDB column types collapsed to five generic types
//! - **Query Execution**: positional result blocks reshaped into named rows
//! - **Schema Catalog**: every container and its columns, all-or-nothing
//! - **Basic Auth**: credentials held as secrets, never logged
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use griddb_connector::{Connector, GridDbConnector, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = serde_json::json!({
//!         "host": "localhost",
//!         "port": 8080,
//!         "cluster": "myCluster",
//!         "database": "public",
//!         "username": "admin",
//!         "password": "admin"
//!     });
//!     let connector = GridDbConnector::from_value(&config)?;
//!
//!     connector.test_connection().await?;
//!
//!     let result = connector.run_query("SELECT * FROM sensors").await?;
//!     println!("{} rows", result.row_count());
//!
//!     for container in connector.get_schema().await? {
//!         println!("{}: {:?}", container.name, container.columns);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Connector Interface                      │
//! │  spec()   test_connection()   run_query()   get_schema()     │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┼───────────────┬───────────────┐
//! │    Check     │     Query     │    Schema     │    Mapping    │
//! ├──────────────┼───────────────┼───────────────┼───────────────┤
//! │ GET          │ POST sql      │ GET containers│ GridDB type → │
//! │ checkConn.   │ envelope →    │ GET …/info    │ generic type  │
//! │              │ columns/rows  │ fold catalog  │               │
//! └──────────────┴───────────────┴───────────────┴───────────────┘
//!                                │
//!                 Endpoint URLs · HTTP client · Basic auth
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection configuration and configuration form
pub mod config;

/// Remote type mapping
pub mod mapping;

/// Web API endpoint URLs
pub mod endpoint;

/// Authentication
pub mod auth;

/// HTTP client with optional rate limiting
pub mod http;

/// Connectivity check
pub mod check;

/// SQL query execution
pub mod query;

/// Schema enumeration
pub mod schema;

/// Connector trait and GridDB connector
pub mod connector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConnectionConfig;
pub use connector::{Connector, ConnectorSpec, GridDbConnector};
pub use error::{Error, Result};
pub use mapping::map_type;
pub use query::{Column, QueryResult};
pub use schema::{ContainerDescriptor, SchemaCatalog};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
