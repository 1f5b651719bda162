use std::path::PathBuf;

/// Outcome of processing one schema.
#[derive(Debug)]
pub struct SchemaOutcome {
    pub schema: String,
    pub tables: u64,
    pub columns: u64,
    pub errors: usize,
    pub warnings: usize,
    /// Report directory, when one was written.
    pub report_dir: Option<PathBuf>,
    /// Fatal failure message, when the schema could not be processed.
    pub failure: Option<String>,
}

impl SchemaOutcome {
    pub fn failed(schema: &str, message: String) -> Self {
        Self {
            schema: schema.to_string(),
            tables: 0,
            columns: 0,
            errors: 0,
            warnings: 0,
            report_dir: None,
            failure: Some(message),
        }
    }
}

/// Result of one `dq audit` run.
#[derive(Debug)]
pub struct AuditRunResult {
    pub base_folder: PathBuf,
    pub schemas: Vec<SchemaOutcome>,
}

impl AuditRunResult {
    /// True when any schema failed fatally. Rule violations are findings,
    /// not failures, and do not affect the exit code.
    pub fn has_failures(&self) -> bool {
        self.schemas.iter().any(|schema| schema.failure.is_some())
    }
}
