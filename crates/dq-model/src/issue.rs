use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueSeverity {
    Error,
    Warning,
    /// Synthetic severity for a rule that failed internally.
    InternalError,
}

/// A single detected rule violation.
///
/// Created by a validator when a condition is detected; immutable once
/// recorded. The collector owns the result list for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub schema: String,
    pub table: String,
    pub column: Option<String>,
    pub rule_id: String,
    pub severity: IssueSeverity,
    pub description: String,
}

impl Issue {
    /// Issue at table granularity.
    pub fn table(
        schema: &str,
        table: &str,
        rule_id: &str,
        severity: IssueSeverity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.to_string(),
            table: table.to_string(),
            column: None,
            rule_id: rule_id.to_string(),
            severity,
            description: description.into(),
        }
    }

    /// Issue at column granularity.
    pub fn column(
        schema: &str,
        table: &str,
        column: &str,
        rule_id: &str,
        severity: IssueSeverity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            column: Some(column.to_string()),
            ..Self::table(schema, table, rule_id, severity, description)
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.severity,
            IssueSeverity::Error | IssueSeverity::InternalError
        )
    }
}

/// Count issues recorded under a given rule id.
pub fn count_by_rule(issues: &[Issue], rule_id: &str) -> u64 {
    issues.iter().filter(|issue| issue.rule_id == rule_id).count() as u64
}
