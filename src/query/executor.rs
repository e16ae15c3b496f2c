//! Query executor
//!
//! Wraps exactly one statement in the batch envelope the Web API expects,
//! POSTs it once and decodes the first result block. Nothing is retried.

use super::types::{ErrorBody, QueryResult, ResultBlock, SqlStatement};
use crate::config::ConnectionConfig;
use crate::endpoint::{action, build_url};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Runs SQL against one configured database
pub struct QueryExecutor<'a> {
    client: &'a HttpClient,
    config: &'a ConnectionConfig,
}

impl<'a> QueryExecutor<'a> {
    /// Create an executor over an authenticated client
    pub fn new(client: &'a HttpClient, config: &'a ConnectionConfig) -> Self {
        Self { client, config }
    }

    /// Execute a query and reshape its result
    ///
    /// A non-200 response yields [`Error::Query`] carrying the remote
    /// `errorMessage` verbatim.
    pub async fn execute(&self, query: &str) -> Result<QueryResult> {
        let url = build_url(self.config, action::SQL);
        let body = serde_json::to_value([SqlStatement::select(query)])?;

        let response = self.client.post(&url, body).await?;
        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            let error: ErrorBody = serde_json::from_str(&text).map_err(|e| {
                Error::decode(format!("HTTP {status} response has no errorMessage: {e}"))
            })?;
            warn!("Query failed with HTTP {}: {}", status.as_u16(), error.error_message);
            return Err(Error::query(error.error_message));
        }

        // One block per submitted statement; exactly one statement was sent
        let envelope: Vec<ResultBlock> = serde_json::from_str(&text)
            .map_err(|e| Error::decode(format!("invalid SQL result envelope: {e}")))?;
        let block = envelope
            .into_iter()
            .next()
            .ok_or_else(|| Error::decode("SQL result envelope is empty"))?;

        let result = block.into_result()?;
        debug!(
            "Query returned {} columns, {} rows",
            result.columns.len(),
            result.row_count()
        );
        Ok(result)
    }
}
