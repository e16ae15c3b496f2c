//! Connectivity check
//!
//! One authenticated GET against `checkConnection`. The caller only learns
//! whether the database is reachable; status codes are not told apart.

use crate::config::ConnectionConfig;
use crate::endpoint::{action, build_url};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use reqwest::StatusCode;
use tracing::{info, warn};

/// Probes one configured database
pub struct ConnectionChecker<'a> {
    client: &'a HttpClient,
    config: &'a ConnectionConfig,
}

impl<'a> ConnectionChecker<'a> {
    /// Create a checker over an authenticated client
    pub fn new(client: &'a HttpClient, config: &'a ConnectionConfig) -> Self {
        Self { client, config }
    }

    /// Succeed only on HTTP 200
    pub async fn check(&self) -> Result<()> {
        let url = build_url(self.config, action::CHECK_CONNECTION);

        let response = self.client.get(&url).await.map_err(|e| {
            warn!("Connection check could not reach {}: {}", url, e);
            Error::connection(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Connection check failed with HTTP {}", status.as_u16());
            return Err(Error::connection(format!("HTTP {}", status.as_u16())));
        }

        info!(
            "Connected to cluster '{}' database '{}'",
            self.config.cluster, self.config.database
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;
    use crate::http::HttpClientConfig;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHECK_PATH: &str = "/griddb/v2/myCluster/dbs/public/checkConnection";

    fn setup(server: &MockServer) -> (HttpClient, ConnectionConfig) {
        let addr = server.address();
        let config = ConnectionConfig::new(
            addr.ip().to_string(),
            addr.port(),
            "myCluster",
            "public",
            "admin",
            "admin",
        );
        let client = HttpClient::with_auth(
            HttpClientConfig::default(),
            AuthConfig::from_connection(&config),
        )
        .unwrap();
        (client, config)
    }

    #[tokio::test]
    async fn test_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(CHECK_PATH))
            .and(header("Authorization", "Basic YWRtaW46YWRtaW4="))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, config) = setup(&mock_server);
        ConnectionChecker::new(&client, &config).check().await.unwrap();
    }

    #[tokio::test]
    async fn test_check_forbidden() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(CHECK_PATH))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, config) = setup(&mock_server);
        let err = ConnectionChecker::new(&client, &config)
            .check()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Connection { .. }));
    }

    #[tokio::test]
    async fn test_check_other_success_codes_fail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(CHECK_PATH))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let (client, config) = setup(&mock_server);
        let err = ConnectionChecker::new(&client, &config)
            .check()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Connection { .. }));
    }

    #[tokio::test]
    async fn test_check_unreachable() {
        let config = {
            let mock_server = MockServer::start().await;
            setup(&mock_server).1
        };
        let client = HttpClient::new().unwrap();

        let err = ConnectionChecker::new(&client, &config)
            .check()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Connection { .. }));
        assert!(!err.to_string().contains("admin"));
    }
}
