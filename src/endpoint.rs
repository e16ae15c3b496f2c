//! Web API endpoint URLs
//!
//! Every request targets `http://{host}:{port}/griddb/v2/{cluster}/dbs/{database}/{action}`.
//! Fields are composed as-is; they are expected not to need percent-encoding.

use crate::config::ConnectionConfig;

/// Root path of the GridDB Web API
pub const API_ROOT: &str = "griddb";

/// Web API version segment
pub const API_VERSION: &str = "v2";

/// Action names understood by the Web API
pub mod action {
    /// Connectivity probe
    pub const CHECK_CONNECTION: &str = "checkConnection";
    /// SQL execution
    pub const SQL: &str = "sql";
    /// Container listing
    pub const CONTAINERS: &str = "containers";
}

/// Build the URL for an action against the configured database
pub fn build_url(config: &ConnectionConfig, action: &str) -> String {
    format!(
        "http://{host}:{port}/{API_ROOT}/{API_VERSION}/{cluster}/dbs/{database}/{action}",
        host = config.host,
        port = config.port,
        cluster = config.cluster,
        database = config.database,
    )
}

/// Build the URL of a container's `/info` sub-resource
pub fn container_info_url(config: &ConnectionConfig, container: &str) -> String {
    format!("{}/{container}/info", build_url(config, action::CONTAINERS))
}
