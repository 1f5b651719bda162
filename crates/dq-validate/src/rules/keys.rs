//! Primary-key rules.

use dq_model::{Issue, IssueSeverity, QualityConfig, SchemaMetadata};

use crate::{Rule, RuleError};

/// Table has no primary key defined.
pub struct MissingPrimaryKey;

impl Rule for MissingPrimaryKey {
    fn id(&self) -> &'static str {
        "missing_pk"
    }

    fn description(&self) -> &'static str {
        "Table has no primary key defined"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        _config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        Ok(schema
            .tables
            .iter()
            .filter(|table| !table.has_primary_key())
            .map(|table| {
                Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Error,
                    "table has no primary key",
                )
            })
            .collect())
    }
}

/// Column marked nullable yet part of the primary key.
pub struct NullablePrimaryKey;

impl Rule for NullablePrimaryKey {
    fn id(&self) -> &'static str {
        "nullable_pk"
    }

    fn description(&self) -> &'static str {
        "Nullable column is part of the primary key"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        _config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                if column.nullable && table.primary_key.contains(&column.name) {
                    issues.push(Issue::column(
                        &schema.name,
                        &table.name,
                        &column.name,
                        self.id(),
                        IssueSeverity::Error,
                        "primary key column is declared nullable",
                    ));
                }
            }
        }
        Ok(issues)
    }
}
