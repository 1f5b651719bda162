//! Typed in-memory representation of one schema's structural metadata.
//!
//! Built once per schema from loaded [`MetadataRecord`]s and read-only to
//! every downstream component. Construction fails with
//! [`ModelError::MalformedMetadata`] when the records contradict the model's
//! own invariants (a primary-key entry naming a non-existent column, a
//! column name repeated within its table); dangling foreign keys are a
//! data-quality finding, not corrupt input, and never fail construction.

use std::collections::BTreeSet;

use crate::error::{ModelError, Result};
use crate::record::MetadataRecord;

/// A foreign-key reference to another table's column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub position: u32,
    pub foreign_key: Option<ForeignKeyRef>,
}

#[derive(Debug, Clone)]
pub struct TableMetadata {
    pub name: String,
    pub columns: Vec<ColumnMetadata>,
    /// Column names forming the primary key; possibly empty.
    pub primary_key: BTreeSet<String>,
}

impl TableMetadata {
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Schema name plus its tables, in first-appearance order of the input.
#[derive(Debug, Clone)]
pub struct SchemaMetadata {
    pub name: String,
    pub tables: Vec<TableMetadata>,
}

impl SchemaMetadata {
    /// Build the typed model from loaded records.
    ///
    /// Tables keep the order in which they first appear; columns within a
    /// table are sorted by ordinal position. Column names must be unique
    /// within their table and every primary-key entry must resolve to a
    /// column of its table.
    pub fn from_records(name: &str, records: &[MetadataRecord]) -> Result<Self> {
        let mut tables: Vec<TableMetadata> = Vec::new();

        for record in records {
            let index = match tables
                .iter()
                .position(|table| table.name == record.table_name)
            {
                Some(index) => index,
                None => {
                    tables.push(TableMetadata {
                        name: record.table_name.clone(),
                        columns: Vec::new(),
                        primary_key: BTreeSet::new(),
                    });
                    tables.len() - 1
                }
            };
            let table = &mut tables[index];

            // Rows with an empty column name declare the table only. The
            // dictionary export emits these for tables without columns.
            if record.column_name.trim().is_empty() {
                if record.is_pk {
                    return Err(ModelError::MalformedMetadata {
                        schema: name.to_string(),
                        table: record.table_name.clone(),
                        detail: "primary key entry without a column name".to_string(),
                    });
                }
                continue;
            }

            let foreign_key = match (&record.fk_table, &record.fk_column) {
                (Some(table), Some(column)) => Some(ForeignKeyRef {
                    table: table.clone(),
                    column: column.clone(),
                }),
                (Some(table), None) => Some(ForeignKeyRef {
                    table: table.clone(),
                    column: String::new(),
                }),
                _ => None,
            };

            table.columns.push(ColumnMetadata {
                name: record.column_name.clone(),
                data_type: record.data_type.clone(),
                nullable: record.nullable,
                position: record.position,
                foreign_key,
            });
            if record.is_pk {
                table.primary_key.insert(record.column_name.clone());
            }
        }

        for table in &mut tables {
            table.columns.sort_by_key(|column| column.position);
        }

        let schema = Self {
            name: name.to_string(),
            tables,
        };
        schema.check_integrity()?;
        Ok(schema)
    }

    pub fn table(&self, name: &str) -> Option<&TableMetadata> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// True when `table.column` resolves within this schema.
    pub fn resolves(&self, table: &str, column: &str) -> bool {
        self.table(table)
            .is_some_and(|table| table.column(column).is_some())
    }

    /// Verify structural properties the model must be able to rely on:
    /// column names are unique within their table (exact match; case-variant
    /// duplicates are a rule finding, not corrupt input) and every
    /// primary-key entry resolves to a column of its table.
    pub fn check_integrity(&self) -> Result<()> {
        for table in &self.tables {
            let mut seen = BTreeSet::new();
            for column in &table.columns {
                if !seen.insert(column.name.as_str()) {
                    return Err(ModelError::MalformedMetadata {
                        schema: self.name.clone(),
                        table: table.name.clone(),
                        detail: format!("duplicate column name {}", column.name),
                    });
                }
            }
            for key_column in &table.primary_key {
                if table.column(key_column).is_none() {
                    return Err(ModelError::MalformedMetadata {
                        schema: self.name.clone(),
                        table: table.name.clone(),
                        detail: format!(
                            "primary key names non-existent column {key_column}"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
