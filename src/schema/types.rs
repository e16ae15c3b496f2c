//! Schema catalog types

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// One container and its column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// Container name
    pub name: String,
    /// Column names in definition order
    pub columns: Vec<String>,
}

impl ContainerDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// Container descriptors keyed by name
///
/// Inserting a name twice replaces the earlier descriptor but keeps its
/// position, so iteration follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCatalog {
    entries: Vec<ContainerDescriptor>,
    index: HashMap<String, usize>,
}

impl SchemaCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a descriptor
    pub fn insert(&mut self, descriptor: ContainerDescriptor) {
        match self.index.get(&descriptor.name) {
            Some(&position) => self.entries[position] = descriptor,
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.entries.len());
                self.entries.push(descriptor);
            }
        }
    }

    /// Look up a container by name
    pub fn get(&self, name: &str) -> Option<&ContainerDescriptor> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Check if a container is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of containers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over descriptors
    pub fn iter(&self) -> impl Iterator<Item = &ContainerDescriptor> {
        self.entries.iter()
    }

    /// Container names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name.as_str())
    }

    /// Consume the catalog, returning its descriptors
    pub fn into_entries(self) -> Vec<ContainerDescriptor> {
        self.entries
    }
}

impl Serialize for SchemaCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl IntoIterator for SchemaCatalog {
    type Item = ContainerDescriptor;
    type IntoIter = std::vec::IntoIter<ContainerDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ============================================================================
// Web API Payloads
// ============================================================================

/// Body of the container listing
#[derive(Debug, Deserialize)]
pub(crate) struct ContainerList {
    pub names: Vec<String>,
}

/// Column entry of a container's `/info`
#[derive(Debug, Deserialize)]
pub(crate) struct InfoColumn {
    pub name: String,
}

/// Body of a container's `/info`
#[derive(Debug, Deserialize)]
pub(crate) struct ContainerInfo {
    pub container_name: String,
    pub columns: Vec<InfoColumn>,
}

impl From<ContainerInfo> for ContainerDescriptor {
    fn from(info: ContainerInfo) -> Self {
        Self {
            name: info.container_name,
            columns: info.columns.into_iter().map(|c| c.name).collect(),
        }
    }
}
