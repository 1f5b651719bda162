//! Report writing.
//!
//! One directory per schema, fully regenerated each run. Sheet names from
//! the legacy workbook become file names: `0_SCHEMA_METADATA.csv`,
//! `<SCHEMA>_MEASURES.csv`, `METADATA_ISSUES.csv`, `METADATA_MEASURES.csv`,
//! `METADATA_METRICS.csv`. `audit_report.json` carries the same content in
//! a versioned machine-readable payload.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use dq_model::{Issue, Measure, Metric};

use crate::sections::SchemaAudit;

const REPORT_SCHEMA: &str = "dq.audit-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

const RECORD_HEADERS: &[&str] = &[
    "owner",
    "table_name",
    "column_name",
    "data_type",
    "nullable",
    "is_pk",
    "fk_table",
    "fk_column",
    "position",
];
const ISSUE_HEADERS: &[&str] = &[
    "schema",
    "table",
    "column",
    "rule_id",
    "severity",
    "description",
];
const MEASURE_HEADERS: &[&str] = &["schema", "measure_name", "value"];
const METRIC_HEADERS: &[&str] = &["schema", "metric_name", "value"];

/// Paths of the generated report files.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub dir: PathBuf,
    pub json: PathBuf,
}

#[derive(Debug, Serialize)]
struct AuditReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    schema_name: &'a str,
    error_count: usize,
    warning_count: usize,
    issues: &'a [Issue],
    measures: &'a [Measure],
    metrics: &'a [Metric],
}

/// Write the full report for one schema under `dir`.
pub fn write_schema_report(dir: &Path, audit: &SchemaAudit) -> Result<ReportPaths> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create report directory {}", dir.display()))?;

    write_csv(
        &dir.join("0_SCHEMA_METADATA.csv"),
        RECORD_HEADERS,
        &audit.records,
    )?;

    let schema_upper = audit.schema.to_uppercase();
    write_csv(
        &dir.join(format!("{schema_upper}_MEASURES.csv")),
        MEASURE_HEADERS,
        &audit.measures,
    )?;
    write_csv(&dir.join("METADATA_ISSUES.csv"), ISSUE_HEADERS, &audit.issues)?;
    write_csv(
        &dir.join("METADATA_MEASURES.csv"),
        MEASURE_HEADERS,
        &audit.measures,
    )?;
    write_csv(
        &dir.join("METADATA_METRICS.csv"),
        METRIC_HEADERS,
        &audit.metrics,
    )?;

    let json = dir.join("audit_report.json");
    let payload = AuditReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        schema_name: &audit.schema,
        error_count: audit.error_count(),
        warning_count: audit.warning_count(),
        issues: &audit.issues,
        measures: &audit.measures,
        metrics: &audit.metrics,
    };
    let body = serde_json::to_string_pretty(&payload).context("serialize audit report")?;
    std::fs::write(&json, format!("{body}\n"))
        .with_context(|| format!("write {}", json.display()))?;

    Ok(ReportPaths {
        dir: dir.to_path_buf(),
        json,
    })
}

/// Serialize rows to CSV. `csv::Writer` only emits headers on the first
/// `serialize` call, so an empty section writes its header row explicitly.
fn write_csv<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    if rows.is_empty() {
        writer
            .write_record(headers)
            .with_context(|| format!("write header to {}", path.display()))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
