//! Schema enumeration
//!
//! Builds a catalog of every container in a database and its column names.
//!
//! # Features
//!
//! - **Bounded Listing**: at most [`MAX_CONTAINERS`] names per request
//! - **All-or-Nothing**: one failed `/info` call aborts the whole catalog
//! - **Stable Order**: entries keep the order of the remote listing

mod enumerator;
mod types;

pub use enumerator::{SchemaEnumerator, INFO_FAILED, LIST_FAILED, MAX_CONTAINERS};
pub use types::{ContainerDescriptor, SchemaCatalog};
