//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectionConfig;
use crate::connector::{Connector, GridDbConnector};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Spec => {
                self.spec();
                Ok(())
            }
            Commands::Check => self.check().await,
            Commands::Query { sql, file } => self.query(sql.as_deref(), file.as_deref()).await,
            Commands::Schema => self.schema().await,
        }
    }

    /// Load configuration; inline JSON takes precedence over a file
    fn load_config(&self) -> Result<ConnectionConfig> {
        if let Some(json_str) = &self.cli.config_json {
            return ConnectionConfig::from_json(json_str);
        }

        if let Some(path) = &self.cli.config {
            return ConnectionConfig::from_file(path);
        }

        Err(Error::config(
            "No configuration given (use --config or --config-json)",
        ))
    }

    /// HTTP settings from the global flags
    fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder();
        if let Some(seconds) = self.cli.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(rps) = self.cli.rate_limit {
            builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
        }
        builder.build()
    }

    fn connector(&self) -> Result<GridDbConnector> {
        GridDbConnector::with_http_config(self.load_config()?, self.http_config())
    }

    /// Print connector specification
    fn spec(&self) {
        self.output_message(&json!({
            "type": "SPEC",
            "spec": GridDbConnector::connector_spec()
        }));
    }

    /// Check connection
    async fn check(&self) -> Result<()> {
        let connector = self.connector()?;

        let status = match connector.test_connection().await {
            Ok(()) => json!({
                "status": "SUCCEEDED",
                "message": "Connection successful"
            }),
            Err(e) => json!({
                "status": "FAILED",
                "message": e.to_string()
            }),
        };

        self.output_message(&json!({
            "type": "CONNECTION_STATUS",
            "connectionStatus": status
        }));
        Ok(())
    }

    /// Run a query
    async fn query(&self, sql: Option<&str>, file: Option<&Path>) -> Result<()> {
        let text = query_text(sql, file)?;
        let connector = self.connector()?;

        match connector.run_query(&text).await {
            Ok(result) => {
                self.output_message(&json!({
                    "type": "QUERY_RESULT",
                    "result": result
                }));
                Ok(())
            }
            Err(e) if e.is_query_error() => {
                self.output_message(&json!({
                    "type": "QUERY_ERROR",
                    "error": e.to_string()
                }));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Print the schema catalog
    async fn schema(&self) -> Result<()> {
        let connector = self.connector()?;
        let containers = connector.get_schema().await?;

        self.output_message(&json!({
            "type": "SCHEMA",
            "containers": containers
        }));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        println!("{}", self.render(msg));
    }

    fn render(&self, msg: &Value) -> String {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg).unwrap_or_default(),
            OutputFormat::Pretty => serde_json::to_string_pretty(msg).unwrap_or_default(),
        }
    }
}

/// Resolve the SQL text from the positional argument or `--file`
fn query_text(sql: Option<&str>, file: Option<&Path>) -> Result<String> {
    let text = match (sql, file) {
        (Some(sql), _) => sql.to_string(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read query file {}: {e}", path.display()))
        })?,
        (None, None) => return Err(Error::config("No query given (pass SQL or --file)")),
    };

    if text.trim().is_empty() {
        return Err(Error::config("Query is empty"));
    }
    Ok(text)
}
