use anyhow::Result;
use tracing::{error, info, warn};

use dq_ingest::discover_schema_files;
use dq_model::QualityConfig;
use dq_validate::RuleCatalog;

use crate::cli::AuditArgs;
use dq_cli::pipeline::{PipelineOptions, parse_exclude_patterns, run_schema};
use dq_cli::types::{AuditRunResult, SchemaOutcome};

pub fn run_audit(args: &AuditArgs) -> Result<AuditRunResult> {
    let discovered = discover_schema_files(&args.base_folder)?;
    info!(
        base_folder = %args.base_folder.display(),
        schemas = discovered.len(),
        "discovery complete"
    );
    if discovered.is_empty() {
        warn!("no metadados_<schema>.csv files found");
    }

    let mut config = QualityConfig::default();
    if !args.plural_exceptions.is_empty() {
        config.plural_exceptions = args.plural_exceptions.clone();
    }
    let catalog = RuleCatalog::standard();
    let exclude = parse_exclude_patterns(&args.exclude_tables);
    let output_dir = args.output_dir.as_deref().unwrap_or(&args.base_folder);

    let options = PipelineOptions {
        output_dir,
        exclude: &exclude,
        config: &config,
        catalog: &catalog,
        dry_run: args.dry_run,
    };

    let mut schemas = Vec::with_capacity(discovered.len());
    for schema_file in &discovered {
        // A schema that fails fatally never aborts the others.
        match run_schema(schema_file, &options) {
            Ok(outcome) => schemas.push(outcome),
            Err(failure) => {
                error!(schema = %schema_file.schema, error = %format!("{failure:#}"), "schema failed");
                schemas.push(SchemaOutcome::failed(
                    &schema_file.schema,
                    format!("{failure:#}"),
                ));
            }
        }
    }

    Ok(AuditRunResult {
        base_folder: args.base_folder.clone(),
        schemas,
    })
}

pub fn run_rules() {
    for rule in RuleCatalog::standard().rules() {
        println!("{:<22} {}", rule.id(), rule.description());
    }
}
