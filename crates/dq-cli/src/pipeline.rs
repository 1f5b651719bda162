//! Per-schema audit pipeline with explicit stages.
//!
//! Stages, in order:
//! 1. **Load**: read the schema's CSV export into raw records
//! 2. **Filter**: drop excluded tables
//! 3. **Model**: build the typed metadata model
//! 4. **Validate**: run the rule catalog
//! 5. **Aggregate**: compute structural measures
//! 6. **Metrics**: derive quality metrics from issues and measures
//! 7. **Export**: write the per-schema report
//!
//! Each schema is one atomic, synchronous pass; no state crosses schema
//! boundaries.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use dq_ingest::{DiscoveredSchema, read_metadata_file};
use dq_metrics::{aggregate_measures, calculate_metrics};
use dq_model::{MetadataRecord, QualityConfig, SchemaMetadata};
use dq_report::{SchemaAudit, write_schema_report};
use dq_validate::{RuleCatalog, run_catalog};

use crate::types::SchemaOutcome;

/// A parsed `--exclude-tables` entry: optional owner plus a table-name
/// fragment. `*.FOO` and a bare `FOO` both match any owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludePattern {
    pub owner: Option<String>,
    pub fragment: String,
}

pub fn parse_exclude_patterns(items: &[String]) -> Vec<ExcludePattern> {
    let mut patterns = Vec::new();
    for raw in items {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        if let Some((owner, table)) = text.split_once('.') {
            let owner = owner.trim().to_uppercase();
            let table = table.trim().to_uppercase();
            if table.is_empty() {
                continue;
            }
            patterns.push(ExcludePattern {
                owner: if owner == "*" || owner.is_empty() {
                    None
                } else {
                    Some(owner)
                },
                fragment: table,
            });
        } else {
            patterns.push(ExcludePattern {
                owner: None,
                fragment: text.to_uppercase(),
            });
        }
    }
    patterns
}

fn is_excluded(record: &MetadataRecord, patterns: &[ExcludePattern]) -> bool {
    let owner = record.owner.to_uppercase();
    let table = record.table_name.to_uppercase();
    patterns.iter().any(|pattern| {
        let owner_matches = pattern
            .owner
            .as_ref()
            .is_none_or(|expected| *expected == owner);
        owner_matches && table.contains(&pattern.fragment)
    })
}

/// Drop records belonging to excluded tables.
pub fn filter_excluded(
    records: Vec<MetadataRecord>,
    patterns: &[ExcludePattern],
) -> Vec<MetadataRecord> {
    if patterns.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| !is_excluded(record, patterns))
        .collect()
}

pub struct PipelineOptions<'a> {
    pub output_dir: &'a Path,
    pub exclude: &'a [ExcludePattern],
    pub config: &'a QualityConfig,
    pub catalog: &'a RuleCatalog,
    pub dry_run: bool,
}

/// Run the full pipeline for one discovered schema.
pub fn run_schema(
    discovered: &DiscoveredSchema,
    options: &PipelineOptions<'_>,
) -> Result<SchemaOutcome> {
    let schema_name = &discovered.schema;

    let records = read_metadata_file(&discovered.path)
        .with_context(|| format!("load schema {schema_name}"))?;
    debug!(schema = %schema_name, records = records.len(), "records loaded");

    // Exclusions scope validation only; the report's raw passthrough keeps
    // every loaded record for archival.
    let audited = filter_excluded(records.clone(), options.exclude);

    let model = SchemaMetadata::from_records(schema_name, &audited)
        .with_context(|| format!("build model for schema {schema_name}"))?;

    let issues = run_catalog(options.catalog, &model, options.config);
    let measures = aggregate_measures(&model);
    let metrics = calculate_metrics(schema_name, &options.config.metrics, &issues, &measures)
        .with_context(|| format!("compute metrics for schema {schema_name}"))?;

    let audit = SchemaAudit {
        schema: schema_name.clone(),
        records,
        issues,
        measures,
        metrics,
    };

    let report_dir = if options.dry_run {
        None
    } else {
        let dir = options.output_dir.join(schema_name);
        let paths = write_schema_report(&dir, &audit)
            .with_context(|| format!("write report for schema {schema_name}"))?;
        Some(paths.dir)
    };

    info!(
        schema = %schema_name,
        tables = model.tables.len(),
        issues = audit.issues.len(),
        "schema audited"
    );

    Ok(SchemaOutcome {
        schema: schema_name.clone(),
        tables: model.tables.len() as u64,
        columns: model
            .tables
            .iter()
            .map(|table| table.columns.len() as u64)
            .sum(),
        errors: audit.error_count(),
        warnings: audit.warning_count(),
        report_dir,
        failure: None,
    })
}
