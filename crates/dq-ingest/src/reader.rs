//! CSV reading for schema metadata exports.
//!
//! The exports come from several tools, so the reader tolerates delimiter
//! variation (`,`, `;`, tab, `|`), BOM-prefixed headers, and the boolean
//! token spellings the source systems emit (including Portuguese ones).

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use dq_model::MetadataRecord;

use crate::error::{IngestError, Result};

const REQUIRED_COLUMNS: &[&str] = &[
    "TABLE_NAME",
    "COLUMN_NAME",
    "DATA_TYPE",
    "NULLABLE",
    "IS_PK",
];

const TRUE_TOKENS: &[&str] = &[
    "Y", "YES", "SIM", "S", "1", "TRUE", "VERDADE", "VERDADEIRO", "T", "ON",
];
const FALSE_TOKENS: &[&str] = &[
    "N", "NO", "NÃO", "NAO", "0", "FALSE", "FALSO", "F", "OFF",
];

/// Read one `metadados_<schema>.csv` file into raw records.
pub fn read_metadata_file(path: &Path) -> Result<Vec<MetadataRecord>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_metadata_csv(&bytes, path)
}

/// Parse CSV bytes into records. `path` is used for error context only.
pub fn parse_metadata_csv(bytes: &[u8], path: &Path) -> Result<Vec<MetadataRecord>> {
    let delimiter = sniff_delimiter(bytes);
    debug!(path = %path.display(), delimiter = %(delimiter as char), "parsing metadata csv");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(|e| IngestError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    for (position, header) in headers.iter().enumerate() {
        index.entry(normalize_header(header)).or_insert(position);
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !index.contains_key(**column))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing.join(", "),
        });
    }

    let field = |row: &csv::StringRecord, name: &str| -> String {
        index
            .get(name)
            .and_then(|&position| row.get(position))
            .map(|cell| cell.trim().trim_matches('\u{feff}').to_string())
            .unwrap_or_default()
    };

    let mut records = Vec::new();
    for row_result in reader.records() {
        let row = row_result.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let table_name = field(&row, "TABLE_NAME");
        if table_name.is_empty() {
            continue;
        }

        let fk_table = non_empty(field(&row, "FK_TABLE"));
        let fk_column = non_empty(field(&row, "FK_COLUMN"));

        records.push(MetadataRecord {
            owner: field(&row, "OWNER"),
            table_name,
            column_name: field(&row, "COLUMN_NAME"),
            data_type: field(&row, "DATA_TYPE"),
            nullable: parse_flag(&field(&row, "NULLABLE")),
            is_pk: parse_flag(&field(&row, "IS_PK")),
            fk_table,
            fk_column,
            position: field(&row, "COLUMN_ID").parse().unwrap_or(0),
        });
    }

    Ok(records)
}

/// Pick the delimiter whose candidate splits the header line the most.
/// Comma wins ties, then semicolon, tab, pipe.
fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let header_line = bytes
        .split(|&byte| byte == b'\n')
        .next()
        .unwrap_or_default();
    let mut best = b',';
    let mut best_count = 0usize;
    for &candidate in &[b',', b';', b'\t', b'|'] {
        let count = header_line.iter().filter(|&&byte| byte == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_uppercase()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Parse the boolean token spellings seen in the exports; unknown tokens
/// fall back to numeric truthiness, then `false`.
pub fn parse_flag(raw: &str) -> bool {
    let token = raw.trim().to_uppercase();
    if token.is_empty() {
        return false;
    }
    if TRUE_TOKENS.contains(&token.as_str()) {
        return true;
    }
    if FALSE_TOKENS.contains(&token.as_str()) {
        return false;
    }
    token.parse::<f64>().map(|n| n != 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{parse_flag, parse_metadata_csv, sniff_delimiter};
    use crate::error::IngestError;

    #[test]
    fn parses_boolean_tokens() {
        for token in ["Y", "yes", "Sim", "1", "true", "T"] {
            assert!(parse_flag(token), "{token} should be true");
        }
        for token in ["N", "no", "NÃO", "nao", "0", "false", ""] {
            assert!(!parse_flag(token), "{token} should be false");
        }
        assert!(parse_flag("2"));
        assert!(!parse_flag("garbage"));
    }

    #[test]
    fn sniffs_semicolon_delimiter() {
        assert_eq!(sniff_delimiter(b"A;B;C\n1;2;3"), b';');
        assert_eq!(sniff_delimiter(b"A,B,C\n"), b',');
        assert_eq!(sniff_delimiter(b"A\tB\n"), b'\t');
    }

    #[test]
    fn parses_records_with_normalized_headers() {
        let csv = "\u{feff}owner,Table_Name,COLUMN_NAME,DATA_TYPE,NULLABLE,IS_PK,FK_TABLE,FK_COLUMN,COLUMN_ID\n\
                   S1,T1,COD_ID,NUMBER,N,Y,,,1\n\
                   S1,T1,COD_REF,NUMBER,S,N,T2,COD_ID,2\n";
        let records = parse_metadata_csv(csv.as_bytes(), Path::new("metadados_s1.csv"))
            .expect("parse");
        assert_eq!(records.len(), 2);
        assert!(records[0].is_pk);
        assert!(!records[0].nullable);
        assert!(records[1].nullable);
        assert_eq!(records[1].fk_table.as_deref(), Some("T2"));
        assert_eq!(records[1].position, 2);
    }

    #[test]
    fn semicolon_export_parses() {
        let csv = "TABLE_NAME;COLUMN_NAME;DATA_TYPE;NULLABLE;IS_PK\nT1;COD_ID;NUMBER;N;Y\n";
        let records = parse_metadata_csv(csv.as_bytes(), Path::new("metadados_s1.csv"))
            .expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].table_name, "T1");
        assert_eq!(records[0].owner, "");
    }

    #[test]
    fn missing_required_columns_is_an_error() {
        let csv = "TABLE_NAME,COLUMN_NAME\nT1,COD_ID\n";
        let error = parse_metadata_csv(csv.as_bytes(), Path::new("metadados_s1.csv"))
            .unwrap_err();
        match error {
            IngestError::MissingColumns { columns, .. } => {
                assert!(columns.contains("DATA_TYPE"));
                assert!(columns.contains("IS_PK"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
