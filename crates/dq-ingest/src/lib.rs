//! Loading of schema metadata CSV exports.
//!
//! Mechanical by design: this crate discovers `metadados_<schema>.csv` files
//! and turns them into [`MetadataRecord`](dq_model::MetadataRecord) rows.
//! Model construction and validation live downstream.

mod discovery;
mod error;
mod reader;

pub use discovery::{DiscoveredSchema, discover_schema_files, match_schema_file};
pub use error::{IngestError, Result};
pub use reader::{parse_metadata_csv, parse_flag, read_metadata_file};
