pub mod config;
pub mod error;
pub mod issue;
pub mod quality;
pub mod record;
pub mod schema;

pub use config::{QualityConfig, default_metrics};
pub use error::{ModelError, Result};
pub use issue::{Issue, IssueSeverity, count_by_rule};
pub use quality::{Measure, Metric, MetricDef, find_measure};
pub use record::MetadataRecord;
pub use schema::{ColumnMetadata, ForeignKeyRef, SchemaMetadata, TableMetadata};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(table: &str, column: &str, data_type: &str, is_pk: bool) -> MetadataRecord {
        MetadataRecord {
            owner: "S1".to_string(),
            table_name: table.to_string(),
            column_name: column.to_string(),
            data_type: data_type.to_string(),
            nullable: !is_pk,
            is_pk,
            fk_table: None,
            fk_column: None,
            position: 1,
        }
    }

    #[test]
    fn builds_model_in_input_order() {
        let records = vec![
            record("T2", "COD_ID", "NUMBER", true),
            record("T1", "COD_ID", "NUMBER", true),
            MetadataRecord {
                position: 2,
                ..record("T2", "NOM_NAME", "VARCHAR2", false)
            },
        ];
        let schema = SchemaMetadata::from_records("S1", &records).expect("build model");
        let names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["T2", "T1"]);
        assert_eq!(schema.tables[0].columns.len(), 2);
        assert!(schema.tables[0].has_primary_key());
    }

    #[test]
    fn table_only_row_yields_empty_table() {
        let records = vec![record("T2", "", "", false)];
        let schema = SchemaMetadata::from_records("S2", &records).expect("build model");
        assert_eq!(schema.tables.len(), 1);
        assert!(schema.tables[0].columns.is_empty());
        assert!(!schema.tables[0].has_primary_key());
    }

    #[test]
    fn pk_without_column_is_malformed() {
        let records = vec![MetadataRecord {
            is_pk: true,
            ..record("T1", "", "", false)
        }];
        let error = SchemaMetadata::from_records("S1", &records).unwrap_err();
        assert!(matches!(error, ModelError::MalformedMetadata { .. }));
    }

    #[test]
    fn duplicate_column_name_is_malformed() {
        let records = vec![
            record("T1", "COD_ID", "NUMBER", true),
            MetadataRecord {
                position: 2,
                ..record("T1", "COD_ID", "VARCHAR2", false)
            },
        ];
        let error = SchemaMetadata::from_records("S1", &records).unwrap_err();
        assert!(matches!(error, ModelError::MalformedMetadata { .. }));
        assert!(error.to_string().contains("duplicate column name COD_ID"));
    }

    #[test]
    fn case_variant_column_names_build() {
        // Exact duplicates are corrupt input; case variants are left for the
        // rule catalog to report.
        let records = vec![
            record("T1", "id", "NUMBER", true),
            MetadataRecord {
                position: 2,
                ..record("T1", "ID", "NUMBER", false)
            },
        ];
        let schema = SchemaMetadata::from_records("S1", &records).expect("build model");
        assert_eq!(schema.tables[0].columns.len(), 2);
    }

    #[test]
    fn dangling_pk_entry_fails_integrity_check() {
        let mut schema = SchemaMetadata::from_records(
            "S1",
            &[record("T1", "COD_ID", "NUMBER", false)],
        )
        .expect("build model");
        schema.tables[0].primary_key.insert("GHOST".to_string());
        assert!(schema.check_integrity().is_err());
    }

    #[test]
    fn severity_serializes_kebab_case() {
        let json = serde_json::to_string(&IssueSeverity::InternalError).expect("serialize");
        assert_eq!(json, "\"internal-error\"");
    }

    #[test]
    fn metric_none_serializes_as_null() {
        let metric = Metric {
            schema: "S1".to_string(),
            name: "dangling_fk_ratio".to_string(),
            value: None,
        };
        let json = serde_json::to_string(&metric).expect("serialize");
        assert!(json.contains("\"value\":null"));
    }
}
