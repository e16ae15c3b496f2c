//! SQL query execution
//!
//! Submits one `sql-select` statement to the Web API and reshapes the
//! positional result block into named rows.
//!
//! # Response handling
//!
//! - **200**: the first block of the result envelope becomes a [`QueryResult`]
//! - **other statuses**: the remote `errorMessage` becomes [`Error::Query`](crate::Error::Query)
//! - **anything else**: malformed bodies are [`Error::Decode`](crate::Error::Decode)

mod executor;
mod types;

pub use executor::QueryExecutor;
pub use types::{Column, QueryResult, Row, SqlStatement, STATEMENT_TYPE};

#[cfg(test)]
mod tests;
