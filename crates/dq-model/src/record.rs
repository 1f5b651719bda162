//! Raw metadata rows as exported by the database dictionary dump.

use serde::{Deserialize, Serialize};

/// One row of a `metadados_<schema>.csv` export.
///
/// Records are kept verbatim for the raw passthrough table; the typed
/// [`SchemaMetadata`](crate::SchemaMetadata) model is built from them once
/// per schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Schema/owner the table belongs to.
    pub owner: String,
    pub table_name: String,
    pub column_name: String,
    /// Declared data type token (e.g. `VARCHAR2`, `NUMBER`).
    pub data_type: String,
    pub nullable: bool,
    /// Whether the column participates in the table's primary key.
    pub is_pk: bool,
    /// Foreign-key target table, when the column carries an FK reference.
    pub fk_table: Option<String>,
    /// Foreign-key target column, when the column carries an FK reference.
    pub fk_column: Option<String>,
    /// Ordinal position of the column within its table (1-based).
    pub position: u32,
}
