//! Cross-table reference rules.

use dq_model::{Issue, IssueSeverity, QualityConfig, SchemaMetadata};

use crate::{Rule, RuleError};

/// Foreign-key reference points to a table or column absent from the loaded
/// metadata.
///
/// Unlike a dangling primary-key entry, this is a finding rather than a
/// construction failure: foreign keys are expected to sometimes cross the
/// boundary of the exported snapshot.
pub struct DanglingForeignKey;

impl Rule for DanglingForeignKey {
    fn id(&self) -> &'static str {
        "dangling_fk"
    }

    fn description(&self) -> &'static str {
        "Foreign key targets a table or column absent from the metadata"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        _config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                let Some(reference) = &column.foreign_key else {
                    continue;
                };
                // A reference without a target column is table-grained.
                let detail = match schema.table(&reference.table) {
                    None => format!("references non-existent table {}", reference.table),
                    Some(_) if reference.column.is_empty() => continue,
                    Some(target) if target.column(&reference.column).is_none() => format!(
                        "references non-existent column {}.{}",
                        reference.table, reference.column
                    ),
                    Some(_) => continue,
                };
                issues.push(Issue::column(
                    &schema.name,
                    &table.name,
                    &column.name,
                    self.id(),
                    IssueSeverity::Error,
                    detail,
                ));
            }
        }
        Ok(issues)
    }
}
