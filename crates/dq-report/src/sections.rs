//! In-memory result tables for one schema's audit run.

use dq_model::{Issue, Measure, MetadataRecord, Metric};

/// The four logical result tables the core produces for one schema.
///
/// The writer maps these onto the five named report files; the raw records
/// are passed through untouched for archival.
#[derive(Debug, Clone)]
pub struct SchemaAudit {
    pub schema: String,
    pub records: Vec<MetadataRecord>,
    pub issues: Vec<Issue>,
    pub measures: Vec<Measure>,
    pub metrics: Vec<Metric>,
}

impl SchemaAudit {
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
