//! Discovery of `metadados_<schema>.csv` exports under a base folder.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

const FILE_PREFIX: &str = "metadados_";

/// A discovered schema metadata export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSchema {
    /// Schema identifier derived from the file name.
    pub schema: String,
    pub path: PathBuf,
}

/// Walk `base` recursively and return every `metadados_<schema>.csv` file,
/// sorted by path for deterministic processing order.
pub fn discover_schema_files(base: &Path) -> Result<Vec<DiscoveredSchema>> {
    if !base.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut discovered = Vec::new();
    let mut pending = vec![base.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| IngestError::DirectoryRead {
            path: dir.clone(),
            source: e,
        })?;
        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if let Some(schema) = match_schema_file(name) {
                discovered.push(DiscoveredSchema { schema, path });
            }
        }
    }

    discovered.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(discovered)
}

/// Match `metadados_<schema>.csv` (case-insensitive) and extract the
/// sanitized schema name.
pub fn match_schema_file(file_name: &str) -> Option<String> {
    let lower = file_name.to_lowercase();
    let stem = lower.strip_suffix(".csv")?;
    let suffix = stem.strip_prefix(FILE_PREFIX)?;
    let schema = sanitize_schema_name(suffix);
    if schema.is_empty() { None } else { Some(schema) }
}

/// Lowercase the suffix and replace every run of non `[0-9a-z_]` characters
/// with a single underscore, trimming leading/trailing underscores.
fn sanitize_schema_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = false;
    for ch in raw.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::{match_schema_file, sanitize_schema_name};

    #[test]
    fn matches_expected_pattern() {
        assert_eq!(
            match_schema_file("metadados_cadastro.csv"),
            Some("cadastro".to_string())
        );
        assert_eq!(
            match_schema_file("METADADOS_Suanota.CSV"),
            Some("suanota".to_string())
        );
        assert_eq!(match_schema_file("schema.csv"), None);
        assert_eq!(match_schema_file("metadados_x.xlsx"), None);
        assert_eq!(match_schema_file("metadados_.csv"), None);
    }

    #[test]
    fn sanitizes_suffixes() {
        assert_eq!(sanitize_schema_name("Foo Bar-2"), "foo_bar_2");
        assert_eq!(sanitize_schema_name("--x--"), "x");
    }
}
