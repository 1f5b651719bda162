//! Column-shape rules.

use std::collections::BTreeMap;

use dq_model::{Issue, IssueSeverity, QualityConfig, SchemaMetadata};

use crate::{Rule, RuleError};

/// Table has zero columns.
pub struct EmptyTable;

impl Rule for EmptyTable {
    fn id(&self) -> &'static str {
        "empty_table"
    }

    fn description(&self) -> &'static str {
        "Table has zero columns"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        _config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        Ok(schema
            .tables
            .iter()
            .filter(|table| table.columns.is_empty())
            .map(|table| {
                Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Error,
                    "table has no columns",
                )
            })
            .collect())
    }
}

/// Column declares a data type outside the allowed vocabulary.
pub struct UnknownDataType;

impl Rule for UnknownDataType {
    fn id(&self) -> &'static str {
        "unknown_type"
    }

    fn description(&self) -> &'static str {
        "Column data type is outside the known type vocabulary"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                if !config.type_is_known(&column.data_type) {
                    issues.push(Issue::column(
                        &schema.name,
                        &table.name,
                        &column.name,
                        self.id(),
                        IssueSeverity::Error,
                        format!("unknown data type {}", column.data_type),
                    ));
                }
            }
        }
        Ok(issues)
    }
}

/// Column name duplicated within a table.
///
/// Comparison is case-insensitive; dictionary exports can carry duplicates
/// differing only in case.
pub struct DuplicateColumn;

impl Rule for DuplicateColumn {
    fn id(&self) -> &'static str {
        "duplicate_column"
    }

    fn description(&self) -> &'static str {
        "Column name duplicated within a table (case-insensitive)"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        _config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            let mut seen: BTreeMap<String, &str> = BTreeMap::new();
            for column in &table.columns {
                let key = column.name.to_uppercase();
                if let Some(first) = seen.get(&key) {
                    issues.push(Issue::column(
                        &schema.name,
                        &table.name,
                        &column.name,
                        self.id(),
                        IssueSeverity::Error,
                        format!("duplicates column {first}"),
                    ));
                } else {
                    seen.insert(key, &column.name);
                }
            }
        }
        Ok(issues)
    }
}
