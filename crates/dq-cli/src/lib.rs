//! CLI library components for the schema metadata quality auditor.

pub mod logging;
pub mod pipeline;
pub mod types;
