//! Query result types and Web API payloads

use crate::error::{Error, Result};
use crate::mapping::map_type;
use crate::types::{GenericType, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Statement type submitted for every query
pub const STATEMENT_TYPE: &str = "sql-select";

/// A single row, keyed by column name
pub type Row = JsonObject;

// ============================================================================
// Result Types
// ============================================================================

/// A result column with its generic type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (unique within a result)
    pub name: String,

    /// Generic type, `None` when the remote type is unknown
    #[serde(rename = "type")]
    pub column_type: Option<GenericType>,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, column_type: Option<GenericType>) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Tabular query result handed to the front end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Columns in remote order
    pub columns: Vec<Column>,
    /// Rows in remote order
    pub rows: Vec<Row>,
}

impl QueryResult {
    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Serialize to the `{columns, rows}` document stored by the host
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Web API Payloads
// ============================================================================

/// One statement of the request batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlStatement {
    #[serde(rename = "type")]
    pub statement_type: &'static str,
    pub stmt: String,
}

impl SqlStatement {
    /// A select statement
    pub fn select(stmt: impl Into<String>) -> Self {
        Self {
            statement_type: STATEMENT_TYPE,
            stmt: stmt.into(),
        }
    }
}

/// Column metadata as reported by the Web API
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// One block of the result envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ResultBlock {
    pub columns: Vec<RemoteColumn>,
    pub results: Vec<Vec<JsonValue>>,
}

/// Body of a failed SQL request
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl ResultBlock {
    /// Map column types and zip every positional row against the column names
    pub fn into_result(self) -> Result<QueryResult> {
        let names = unique_names(self.columns.iter().map(|c| c.name.as_str()));
        let columns: Vec<Column> = names
            .iter()
            .zip(&self.columns)
            .map(|(name, remote)| Column::new(name.clone(), map_type(&remote.type_name)))
            .collect();

        let rows = self
            .results
            .into_iter()
            .enumerate()
            .map(|(index, values)| {
                if values.len() != names.len() {
                    return Err(Error::decode(format!(
                        "row {index} has {} values but the result has {} columns",
                        values.len(),
                        names.len()
                    )));
                }
                Ok(names.iter().cloned().zip(values).collect::<Row>())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryResult { columns, rows })
    }
}

/// Suffix repeated column names with one counter shared across the result
/// (`a, b, a, b` becomes `a, b, a1, b2`) so every row key is distinct
fn unique_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counter = 1usize;
    let mut unique = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        while seen.contains(&candidate) {
            candidate = format!("{candidate}{counter}");
            counter += 1;
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }

    unique
}
