//! Connection configuration
//!
//! The configuration is built once per connector instance from the host's
//! JSON settings and is read-only afterwards. The password is kept in a
//! [`SecretString`] and never appears in `Debug` output, serialized dumps or
//! error messages.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, PropertyType};
use secrecy::{ExposeSecret, SecretString};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Placeholder written instead of the password when a config is serialized
pub const REDACTED: &str = "**********";

/// Field names in display order
pub const FIELD_ORDER: [&str; 6] = ["host", "port", "cluster", "database", "username", "password"];

/// Fields that must be masked by the host UI
pub const SECRET_FIELDS: [&str; 1] = ["password"];

// ============================================================================
// Connection Config
// ============================================================================

/// Settings needed to reach one GridDB database through the Web API
pub struct ConnectionConfig {
    /// Web API host name
    pub host: String,
    /// Web API port
    pub port: u16,
    /// Cluster name
    pub cluster: String,
    /// Database name
    pub database: String,
    /// Basic auth user
    pub username: String,
    password: SecretString,
}

impl ConnectionConfig {
    /// Create a config from its parts
    pub fn new(
        host: impl Into<String>,
        port: u16,
        cluster: impl Into<String>,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            cluster: cluster.into(),
            database: database.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Build a config from the host's JSON settings object
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::config("Configuration must be a JSON object"))?;

        let config = Self {
            host: non_empty_string(obj, "host")?,
            port: port(obj)?,
            cluster: non_empty_string(obj, "cluster")?,
            database: non_empty_string(obj, "database")?,
            username: string(obj, "username")?,
            password: SecretString::from(string(obj, "password")?),
        };
        Ok(config)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Load a config file; `.yaml`/`.yml` files are parsed as YAML, anything else as JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let value: JsonValue = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Self::from_value(&value)
    }

    /// Expose the password for request signing
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

fn field<'a>(obj: &'a JsonObject, name: &str) -> Result<&'a JsonValue> {
    match obj.get(name) {
        None | Some(JsonValue::Null) => Err(Error::missing_field(name)),
        Some(value) => Ok(value),
    }
}

fn string(obj: &JsonObject, name: &str) -> Result<String> {
    field(obj, name)?
        .as_str()
        .map(String::from)
        .ok_or_else(|| Error::invalid_value(name, "expected a string"))
}

fn non_empty_string(obj: &JsonObject, name: &str) -> Result<String> {
    let value = string(obj, name)?;
    if value.trim().is_empty() {
        return Err(Error::invalid_value(name, "must not be empty"));
    }
    Ok(value)
}

fn port(obj: &JsonObject) -> Result<u16> {
    let value = field(obj, "port")?;
    let number = value
        .as_u64()
        .or_else(|| {
            // The host form stores numbers as floats
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })
        .ok_or_else(|| Error::invalid_value("port", "expected a number"))?;

    u16::try_from(number)
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| Error::invalid_value("port", format!("{number} is not a valid port")))
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cluster", &self.cluster)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl Serialize for ConnectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConnectionConfig", 6)?;
        state.serialize_field("host", &self.host)?;
        state.serialize_field("port", &self.port)?;
        state.serialize_field("cluster", &self.cluster)?;
        state.serialize_field("database", &self.database)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("password", REDACTED)?;
        state.end()
    }
}

// ============================================================================
// Config Spec (for the host's configuration form)
// ============================================================================

/// Configuration property definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

/// JSON-schema style description of the configuration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSpec {
    /// Always "object"
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Configuration properties
    pub properties: BTreeMap<String, PropertyConfig>,

    /// Required property names
    pub required: Vec<String>,

    /// Display order of the properties
    pub order: Vec<String>,

    /// Properties to mask
    pub secret: Vec<String>,
}

impl ConfigSpec {
    /// The form for a GridDB connection: every field required, password masked
    pub fn griddb() -> Self {
        let properties = FIELD_ORDER
            .iter()
            .map(|name| {
                let property_type = if *name == "port" {
                    PropertyType::Number
                } else {
                    PropertyType::String
                };
                (name.to_string(), PropertyConfig { property_type })
            })
            .collect();

        let names = || FIELD_ORDER.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            schema_type: "object".to_string(),
            properties,
            required: names(),
            order: names(),
            secret: SECRET_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check whether a property must be masked
    pub fn is_secret(&self, name: &str) -> bool {
        self.secret.iter().any(|s| s == name)
    }
}
