//! Schema enumerator
//!
//! Lists the database's containers, then fetches each container's `/info`
//! one after another. The catalog is folded sequentially and only returned
//! once every container has been described.

use super::types::{ContainerDescriptor, ContainerInfo, ContainerList, SchemaCatalog};
use crate::config::ConnectionConfig;
use crate::endpoint::{action, build_url, container_info_url};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Upper bound on the container names requested from the listing
pub const MAX_CONTAINERS: usize = 5000;

/// Message of the error raised when the listing fails
pub const LIST_FAILED: &str = "failed getting list of containers";

/// Message of the error raised when a container's info fails
pub const INFO_FAILED: &str = "failed getting schema";

/// Enumerates the containers of one configured database
pub struct SchemaEnumerator<'a> {
    client: &'a HttpClient,
    config: &'a ConnectionConfig,
}

impl<'a> SchemaEnumerator<'a> {
    /// Create an enumerator over an authenticated client
    pub fn new(client: &'a HttpClient, config: &'a ConnectionConfig) -> Self {
        Self { client, config }
    }

    /// Build the full catalog
    ///
    /// Fails with [`Error::Schema`] as soon as any request is rejected; no
    /// partial catalog is returned.
    pub async fn enumerate(&self) -> Result<SchemaCatalog> {
        let names = self.list_containers().await?;
        debug!("Listing returned {} containers", names.len());

        let catalog = stream::iter(names)
            .map(Ok::<_, Error>)
            .try_fold(SchemaCatalog::new(), |mut catalog, name| async move {
                catalog.insert(self.container_info(&name).await?);
                Ok::<_, Error>(catalog)
            })
            .await?;

        info!("Schema catalog built with {} containers", catalog.len());
        Ok(catalog)
    }

    /// List container names, capped at [`MAX_CONTAINERS`]
    pub async fn list_containers(&self) -> Result<Vec<String>> {
        let url = build_url(self.config, action::CONTAINERS);
        let response = self
            .client
            .get_with_config(&url, RequestConfig::new().query("limit", MAX_CONTAINERS))
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Container listing failed with HTTP {}", status.as_u16());
            return Err(Error::schema(LIST_FAILED));
        }

        let text = response.text().await?;
        let list: ContainerList = serde_json::from_str(&text)
            .map_err(|e| Error::decode(format!("invalid container listing: {e}")))?;
        Ok(list.names)
    }

    /// Fetch one container's column names
    pub async fn container_info(&self, container: &str) -> Result<ContainerDescriptor> {
        let url = container_info_url(self.config, container);
        let response = self.client.get(&url).await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "Info for container '{}' failed with HTTP {}",
                container,
                status.as_u16()
            );
            return Err(Error::schema(INFO_FAILED));
        }

        let text = response.text().await?;
        let info: ContainerInfo = serde_json::from_str(&text).map_err(|e| {
            Error::decode(format!("invalid info for container '{container}': {e}"))
        })?;
        Ok(info.into())
    }
}
