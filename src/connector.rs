//! Connector trait and the GridDB connector
//!
//! The host application talks to data sources through [`Connector`]: it reads
//! the identity and configuration form from `spec()`, validates settings with
//! `test_connection()`, then runs queries and loads the schema browser.

use crate::auth::AuthConfig;
use crate::check::ConnectionChecker;
use crate::config::{ConfigSpec, ConnectionConfig};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::{QueryExecutor, QueryResult};
use crate::schema::{ContainerDescriptor, SchemaCatalog, SchemaEnumerator};
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Stable type tag of the connector
pub const CONNECTOR_TYPE: &str = "griddb";

/// Human-readable connector name
pub const CONNECTOR_NAME: &str = "GridDB";

// ============================================================================
// Connector Spec (for UI)
// ============================================================================

/// Identity and configuration form of a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSpec {
    /// Stable type tag
    #[serde(rename = "type")]
    pub connector_type: String,

    /// Display name
    pub name: String,

    /// Configuration form
    pub configuration_schema: ConfigSpec,
}

// ============================================================================
// Connector Trait
// ============================================================================

/// Operations a query runner exposes to the host
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the connector specification (for UI/validation)
    fn spec(&self) -> ConnectorSpec;

    /// Verify that the database is reachable with the configured credentials
    async fn test_connection(&self) -> Result<()>;

    /// Run a query; on failure the error text is the remote message
    async fn run_query(&self, query: &str) -> Result<QueryResult>;

    /// Describe every container in the database
    async fn get_schema(&self) -> Result<Vec<ContainerDescriptor>>;
}

// ============================================================================
// GridDB Connector
// ============================================================================

/// Connector for the GridDB Web API
#[derive(Debug)]
pub struct GridDbConnector {
    config: ConnectionConfig,
    client: HttpClient,
}

impl GridDbConnector {
    /// Create a connector with default HTTP settings
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        Self::with_http_config(config, HttpClientConfig::default())
    }

    /// Create a connector with custom HTTP settings
    pub fn with_http_config(config: ConnectionConfig, http: HttpClientConfig) -> Result<Self> {
        let client = HttpClient::with_auth(http, AuthConfig::from_connection(&config))?;
        Ok(Self { config, client })
    }

    /// Create a connector from the host's JSON settings
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        Self::new(ConnectionConfig::from_value(value)?)
    }

    /// The connection settings
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Build the schema catalog
    pub async fn catalog(&self) -> Result<SchemaCatalog> {
        SchemaEnumerator::new(&self.client, &self.config)
            .enumerate()
            .await
    }

    /// Static specification, available without a connection
    pub fn connector_spec() -> ConnectorSpec {
        ConnectorSpec {
            connector_type: CONNECTOR_TYPE.to_string(),
            name: CONNECTOR_NAME.to_string(),
            configuration_schema: ConfigSpec::griddb(),
        }
    }
}

#[async_trait]
impl Connector for GridDbConnector {
    fn spec(&self) -> ConnectorSpec {
        Self::connector_spec()
    }

    async fn test_connection(&self) -> Result<()> {
        ConnectionChecker::new(&self.client, &self.config)
            .check()
            .await
    }

    async fn run_query(&self, query: &str) -> Result<QueryResult> {
        QueryExecutor::new(&self.client, &self.config)
            .execute(query)
            .await
    }

    async fn get_schema(&self) -> Result<Vec<ContainerDescriptor>> {
        Ok(self.catalog().await?.into_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_connector_spec() {
        let spec = GridDbConnector::connector_spec();
        assert_eq!(spec.connector_type, "griddb");
        assert_eq!(spec.name, "GridDB");
        assert_eq!(spec.configuration_schema.order.len(), 6);
    }

    #[test]
    fn test_connector_spec_json() {
        let value = serde_json::to_value(GridDbConnector::connector_spec()).unwrap();
        assert_eq!(value["type"], "griddb");
        assert_eq!(value["name"], "GridDB");
        assert_eq!(
            value["configuration_schema"]["required"],
            json!(["host", "port", "cluster", "database", "username", "password"])
        );
    }

    #[test]
    fn test_from_value() {
        let connector = GridDbConnector::from_value(&json!({
            "host": "localhost",
            "port": 8080,
            "cluster": "myCluster",
            "database": "public",
            "username": "admin",
            "password": "admin"
        }))
        .unwrap();

        assert_eq!(connector.config().cluster, "myCluster");
        assert_eq!(connector.spec().connector_type, CONNECTOR_TYPE);
    }

    #[test]
    fn test_from_value_missing_field() {
        let err = GridDbConnector::from_value(&json!({"host": "localhost"})).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_debug_hides_password() {
        let connector =
            GridDbConnector::new(ConnectionConfig::new("h", 1, "c", "d", "admin", "s3cr3t"))
                .unwrap();
        assert!(!format!("{connector:?}").contains("s3cr3t"));
    }
}
