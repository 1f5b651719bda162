//! Report generation for schema metadata audits.

mod sections;
mod writer;

pub use sections::SchemaAudit;
pub use writer::{ReportPaths, write_schema_report};
