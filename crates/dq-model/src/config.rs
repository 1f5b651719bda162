//! Validation and metric configuration.
//!
//! Passed explicitly as an immutable object into the catalog and the metric
//! calculator at construction time, never read from ambient process state,
//! so every rule can be unit-tested in isolation.

use std::collections::BTreeSet;

use crate::quality::MetricDef;

#[derive(Debug, Clone)]
pub struct QualityConfig {
    /// Known data-type vocabulary; anything else is an `unknown_type` issue.
    pub allowed_types: BTreeSet<String>,
    /// Allowed column-name prefixes (three letters plus underscore).
    pub column_prefixes: Vec<String>,
    pub max_table_name_len: usize,
    pub max_column_name_len: usize,
    /// Table names allowed to end with `S` despite the singular-name rule.
    pub plural_exceptions: Vec<String>,
    /// Name prefixes reserved for the database engine or tooling.
    pub reserved_prefixes: Vec<String>,
    /// Metric registry, in fixed report order.
    pub metrics: Vec<MetricDef>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        let allowed_types = [
            "CHAR",
            "NCHAR",
            "VARCHAR2",
            "NVARCHAR2",
            "NUMBER",
            "FLOAT",
            "BINARY_FLOAT",
            "BINARY_DOUBLE",
            "DATE",
            "TIMESTAMP",
            "TIMESTAMP(6)",
            "INTERVAL DAY TO SECOND",
            "RAW",
            "LONG",
            "CLOB",
            "NCLOB",
            "BLOB",
            "XMLTYPE",
            "ROWID",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let column_prefixes = [
            "COD_", "DAT_", "DSC_", "NOM_", "NUM_", "QTD_", "SEQ_", "SIT_", "STA_",
            "TXT_", "TIP_", "TOT_", "VLR_", "BIN_", "HOR_", "XML_",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            allowed_types,
            column_prefixes,
            max_table_name_len: 30,
            max_column_name_len: 30,
            plural_exceptions: ["DAS", "INS", "SUBS", "ICMS"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            reserved_prefixes: ["SYS_", "MLOG$", "TMP_"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            metrics: default_metrics(),
        }
    }
}

impl QualityConfig {
    pub fn type_is_known(&self, data_type: &str) -> bool {
        self.allowed_types.contains(data_type.trim().to_uppercase().as_str())
    }
}

/// Default metric registry. Output order follows this declaration order.
pub fn default_metrics() -> Vec<MetricDef> {
    vec![
        MetricDef::new("missing_pk_ratio", "missing_pk", "table_count"),
        MetricDef::new("empty_table_ratio", "empty_table", "table_count"),
        MetricDef::new("table_naming_ratio", "table_naming", "table_count"),
        MetricDef::new("unknown_type_ratio", "unknown_type", "column_count"),
        MetricDef::new("column_naming_ratio", "column_naming", "column_count"),
        MetricDef::new("nullable_pk_ratio", "nullable_pk", "pk_count"),
        MetricDef::new("dangling_fk_ratio", "dangling_fk", "fk_count"),
    ]
}
