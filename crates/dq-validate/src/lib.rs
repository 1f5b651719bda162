//! Rule catalog and issue collector.
//!
//! Each rule is an independent detector over one [`SchemaMetadata`]: no
//! shared mutable state, no execution-order dependency. The catalog is an
//! open, append-only registry; new rules are added by registering another
//! [`Rule`] implementation, never by touching existing rules or the
//! collector.

mod catalog;
mod collector;
pub mod rules;

pub use catalog::RuleCatalog;
pub use collector::run_catalog;

use dq_model::{Issue, QualityConfig, SchemaMetadata};
use thiserror::Error;

/// A rule failed internally. Recovered by the collector into a single
/// synthetic `internal-error` issue; never aborts the validation pass.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RuleError(pub String);

/// One category of structural problem.
pub trait Rule {
    /// Stable identifier, used in issues and as metric numerator key.
    fn id(&self) -> &'static str;

    /// Short human-readable description for listings.
    fn description(&self) -> &'static str;

    /// Detect violations in the given schema.
    fn detect(
        &self,
        schema: &SchemaMetadata,
        config: &QualityConfig,
    ) -> Result<Vec<Issue>, RuleError>;
}
