//! Remote column type mapping
//!
//! GridDB reports column types with its own vocabulary (`LONG`, `TIMESTAMP`,
//! `DOUBLE_ARRAY`, ...). The front end only needs a coarse analytic type, so
//! the table below collapses that vocabulary into [`GenericType`]. Array
//! columns are surfaced as opaque text and never decoded.

use crate::types::GenericType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TYPE_MAP: Lazy<HashMap<&'static str, GenericType>> = Lazy::new(|| {
    HashMap::from([
        ("STRING", GenericType::String),
        ("BOOL", GenericType::Boolean),
        ("BYTE", GenericType::Integer),
        ("SHORT", GenericType::Integer),
        ("INTEGER", GenericType::Integer),
        ("LONG", GenericType::Integer),
        ("FLOAT", GenericType::Float),
        ("DOUBLE", GenericType::Float),
        ("TIMESTAMP", GenericType::Datetime),
        ("GEOMETRY", GenericType::String),
        ("BLOB", GenericType::String),
        ("STRING_ARRAY", GenericType::String),
        ("BOOL_ARRAY", GenericType::String),
        ("BYTE_ARRAY", GenericType::String),
        ("SHORT_ARRAY", GenericType::String),
        ("INTEGER_ARRAY", GenericType::String),
        ("LONG_ARRAY", GenericType::String),
        ("FLOAT_ARRAY", GenericType::String),
        ("DOUBLE_ARRAY", GenericType::String),
        ("TIMESTAMP_ARRAY", GenericType::String),
    ])
});

/// Map a remote type name to its generic type
///
/// Names outside the table yield `None`, which consumers treat as untyped.
pub fn map_type(remote_type: &str) -> Option<GenericType> {
    TYPE_MAP.get(remote_type).copied()
}

/// All remote type names the mapper knows about
pub fn known_types() -> impl Iterator<Item = &'static str> {
    TYPE_MAP.keys().copied()
}
