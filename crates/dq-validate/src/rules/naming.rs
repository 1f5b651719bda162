//! Naming-convention rules.

use dq_model::{Issue, IssueSeverity, QualityConfig, SchemaMetadata};

use crate::{Rule, RuleError};

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn reserved_prefix<'a>(name: &str, config: &'a QualityConfig) -> Option<&'a str> {
    let upper = name.to_uppercase();
    config
        .reserved_prefixes
        .iter()
        .find(|prefix| upper.starts_with(prefix.as_str()))
        .map(String::as_str)
}

/// Table name violates the naming convention: non-identifier characters or a
/// reserved prefix.
pub struct TableNaming;

impl Rule for TableNaming {
    fn id(&self) -> &'static str {
        "table_naming"
    }

    fn description(&self) -> &'static str {
        "Table name violates the naming convention"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            if !is_identifier(&table.name) {
                issues.push(Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Warning,
                    "table name contains non-identifier characters",
                ));
            } else if let Some(prefix) = reserved_prefix(&table.name, config) {
                issues.push(Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Warning,
                    format!("table name uses reserved prefix {prefix}"),
                ));
            }
        }
        Ok(issues)
    }
}

/// Column name violates the naming convention.
pub struct ColumnNaming;

impl Rule for ColumnNaming {
    fn id(&self) -> &'static str {
        "column_naming"
    }

    fn description(&self) -> &'static str {
        "Column name violates the naming convention"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                let detail = if !is_identifier(&column.name) {
                    "column name contains non-identifier characters".to_string()
                } else if let Some(prefix) = reserved_prefix(&column.name, config) {
                    format!("column name uses reserved prefix {prefix}")
                } else {
                    continue;
                };
                issues.push(Issue::column(
                    &schema.name,
                    &table.name,
                    &column.name,
                    self.id(),
                    IssueSeverity::Warning,
                    detail,
                ));
            }
        }
        Ok(issues)
    }
}

/// Table name in the plural, outside the configured exception list.
pub struct PluralTableName;

impl Rule for PluralTableName {
    fn id(&self) -> &'static str {
        "plural_table_name"
    }

    fn description(&self) -> &'static str {
        "Table name is plural"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            let upper = table.name.to_uppercase();
            if !upper.ends_with('S') {
                continue;
            }
            let excepted = config
                .plural_exceptions
                .iter()
                .any(|exception| exception.to_uppercase() == upper);
            if !excepted {
                issues.push(Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Warning,
                    "table name should be singular",
                ));
            }
        }
        Ok(issues)
    }
}

/// Table name longer than recommended.
pub struct TableNameTooLong;

impl Rule for TableNameTooLong {
    fn id(&self) -> &'static str {
        "table_name_too_long"
    }

    fn description(&self) -> &'static str {
        "Table name is longer than recommended"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        Ok(schema
            .tables
            .iter()
            .filter(|table| table.name.chars().count() > config.max_table_name_len)
            .map(|table| {
                Issue::table(
                    &schema.name,
                    &table.name,
                    self.id(),
                    IssueSeverity::Warning,
                    format!(
                        "name length {} exceeds limit {}",
                        table.name.chars().count(),
                        config.max_table_name_len
                    ),
                )
            })
            .collect())
    }
}

/// Column name longer than recommended.
pub struct ColumnNameTooLong;

impl Rule for ColumnNameTooLong {
    fn id(&self) -> &'static str {
        "column_name_too_long"
    }

    fn description(&self) -> &'static str {
        "Column name is longer than recommended"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                let length = column.name.chars().count();
                if length > config.max_column_name_len {
                    issues.push(Issue::column(
                        &schema.name,
                        &table.name,
                        &column.name,
                        self.id(),
                        IssueSeverity::Warning,
                        format!(
                            "name length {length} exceeds limit {}",
                            config.max_column_name_len
                        ),
                    ));
                }
            }
        }
        Ok(issues)
    }
}

/// Column name does not start with one of the standard prefixes.
pub struct ColumnPrefix;

impl Rule for ColumnPrefix {
    fn id(&self) -> &'static str {
        "column_prefix"
    }

    fn description(&self) -> &'static str {
        "Column name does not use a standard prefix"
    }

    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError> {
        if config.column_prefixes.is_empty() {
            return Ok(Vec::new());
        }
        let mut issues = Vec::new();
        for table in &schema.tables {
            for column in &table.columns {
                let upper = column.name.to_uppercase();
                let standard = config
                    .column_prefixes
                    .iter()
                    .any(|prefix| upper.starts_with(prefix.as_str()));
                if !standard {
                    issues.push(Issue::column(
                        &schema.name,
                        &table.name,
                        &column.name,
                        self.id(),
                        IssueSeverity::Warning,
                        "column name does not start with a standard prefix",
                    ));
                }
            }
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::is_identifier;

    #[test]
    fn identifier_charset() {
        assert!(is_identifier("NFP_DADOS"));
        assert!(is_identifier("_HIDDEN"));
        assert!(!is_identifier("1TABLE"));
        assert!(!is_identifier("BAD-NAME"));
        assert!(!is_identifier(""));
    }
}
