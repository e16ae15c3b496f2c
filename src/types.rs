//! Common types used throughout the connector
//!
//! Shared type definitions and aliases used by the query, schema and
//! configuration modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Generic Type
// ============================================================================

/// Coarse analytic type used by the front end for display
///
/// Serialized in lower case (`"string"`, `"datetime"`, ...), which is the
/// vocabulary the host expects in a result document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenericType {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
}

impl GenericType {
    /// Lower-case name as written in result documents
    pub fn as_str(&self) -> &'static str {
        match self {
            GenericType::String => "string",
            GenericType::Integer => "integer",
            GenericType::Float => "float",
            GenericType::Boolean => "boolean",
            GenericType::Datetime => "datetime",
        }
    }
}

impl std::fmt::Display for GenericType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Property Type (for spec)
// ============================================================================

/// Property type for the configuration schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    String,
    Number,
}
