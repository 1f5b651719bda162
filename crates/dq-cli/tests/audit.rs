//! End-to-end audit pipeline tests against a temporary base folder.

use std::path::PathBuf;

use dq_cli::pipeline::{PipelineOptions, parse_exclude_patterns, run_schema};
use dq_ingest::discover_schema_files;
use dq_model::QualityConfig;
use dq_validate::RuleCatalog;

fn temp_base(test: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dq-audit-{}-{test}", std::process::id()))
}

const HEADER: &str = "OWNER,TABLE_NAME,COLUMN_NAME,DATA_TYPE,NULLABLE,IS_PK,FK_TABLE,FK_COLUMN,COLUMN_ID\n";

#[test]
fn audits_a_schema_folder_end_to_end() {
    let base = temp_base("end-to-end");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(base.join("vendas")).expect("create base");

    let csv = format!(
        "{HEADER}\
         VENDAS,COD_CLIENTE,COD_ID,NUMBER,N,Y,,,1\n\
         VENDAS,COD_CLIENTE,NOM_CLIENTE,VARCHAR2,Y,N,,,2\n\
         VENDAS,PEDIDOS,COD_ID,NUMBER,N,N,,,1\n\
         VENDAS,PEDIDOS,COD_CLIENTE,NUMBER,Y,N,COD_CLIENTE,COD_ID,2\n\
         VENDAS,PEDIDOS,VLR_TOTAL,MONEY,Y,N,,,3\n"
    );
    std::fs::write(base.join("vendas").join("metadados_vendas.csv"), csv).expect("write csv");

    let discovered = discover_schema_files(&base).expect("discover");
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].schema, "vendas");

    let config = QualityConfig::default();
    let catalog = RuleCatalog::standard();
    let exclude = parse_exclude_patterns(&[]);
    let options = PipelineOptions {
        output_dir: &base,
        exclude: &exclude,
        config: &config,
        catalog: &catalog,
        dry_run: false,
    };

    let outcome = run_schema(&discovered[0], &options).expect("pipeline");
    assert_eq!(outcome.tables, 2);
    assert_eq!(outcome.columns, 5);
    assert!(outcome.failure.is_none());
    // PEDIDOS has no PK, a plural name, and an off-vocabulary MONEY column.
    assert!(outcome.errors >= 2);
    assert!(outcome.warnings >= 1);

    let report_dir = outcome.report_dir.expect("report written");
    assert!(report_dir.join("METADATA_ISSUES.csv").is_file());
    assert!(report_dir.join("VENDAS_MEASURES.csv").is_file());
    assert!(report_dir.join("audit_report.json").is_file());

    let measures =
        std::fs::read_to_string(report_dir.join("METADATA_MEASURES.csv")).expect("measures");
    assert!(measures.contains("table_count,2"));
    assert!(measures.contains("column_count,5"));
    assert!(measures.contains("pk_count,1"));
    assert!(measures.contains("fk_count,1"));

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn excluded_tables_are_archived_but_not_audited() {
    let base = temp_base("exclude");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).expect("create base");
    let csv = format!(
        "{HEADER}\
         S1,COD_CLIENTE,COD_ID,NUMBER,N,Y,,,1\n\
         S1,TMP_SCRATCH,COD_ID,NUMBER,Y,N,,,1\n"
    );
    std::fs::write(base.join("metadados_s1.csv"), csv).expect("write csv");

    let discovered = discover_schema_files(&base).expect("discover");
    let config = QualityConfig::default();
    let catalog = RuleCatalog::standard();
    let exclude = parse_exclude_patterns(&["S1.TMP_SCRATCH".to_string()]);
    let options = PipelineOptions {
        output_dir: &base,
        exclude: &exclude,
        config: &config,
        catalog: &catalog,
        dry_run: false,
    };
    let outcome = run_schema(&discovered[0], &options).expect("pipeline");
    assert_eq!(outcome.tables, 1);
    assert_eq!(outcome.errors, 0);

    let report_dir = outcome.report_dir.expect("report written");
    let raw = std::fs::read_to_string(report_dir.join("0_SCHEMA_METADATA.csv")).expect("raw");
    assert!(raw.contains("TMP_SCRATCH"));
    let issues = std::fs::read_to_string(report_dir.join("METADATA_ISSUES.csv")).expect("issues");
    assert!(!issues.contains("TMP_SCRATCH"));

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn dry_run_writes_nothing() {
    let base = temp_base("dry-run");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).expect("create base");
    let csv = format!("{HEADER}S1,T1,COD_ID,NUMBER,N,Y,,,1\n");
    std::fs::write(base.join("metadados_s1.csv"), csv).expect("write csv");

    let discovered = discover_schema_files(&base).expect("discover");
    let config = QualityConfig::default();
    let catalog = RuleCatalog::standard();
    let options = PipelineOptions {
        output_dir: &base,
        exclude: &[],
        config: &config,
        catalog: &catalog,
        dry_run: true,
    };
    let outcome = run_schema(&discovered[0], &options).expect("pipeline");
    assert!(outcome.report_dir.is_none());
    assert!(!base.join("s1").exists());

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn malformed_metadata_fails_the_schema() {
    let base = temp_base("malformed");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).expect("create base");
    // A primary-key entry without a column name is corrupt input, not a finding.
    let csv = format!("{HEADER}S1,T1,,NUMBER,N,Y,,,1\n");
    std::fs::write(base.join("metadados_s1.csv"), csv).expect("write csv");

    let discovered = discover_schema_files(&base).expect("discover");
    let config = QualityConfig::default();
    let catalog = RuleCatalog::standard();
    let options = PipelineOptions {
        output_dir: &base,
        exclude: &[],
        config: &config,
        catalog: &catalog,
        dry_run: false,
    };
    let failure = run_schema(&discovered[0], &options).unwrap_err();
    assert!(format!("{failure:#}").contains("s1"));

    let _ = std::fs::remove_dir_all(&base);
}
