use dq_model::{Issue, IssueSeverity, QualityConfig, SchemaMetadata};
use tracing::{debug, warn};

use crate::RuleCatalog;

/// Run every catalog rule against the model, in catalog declaration order.
///
/// Results are concatenated preserving that order. A rule that fails
/// internally contributes exactly one synthetic `internal-error` issue
/// carrying its id and the failure message; the remaining rules still run.
pub fn run_catalog(
    catalog: &RuleCatalog,
    schema: &SchemaMetadata,
    config: &QualityConfig,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rule in catalog.rules() {
        match rule.detect(schema, config) {
            Ok(detected) => {
                debug!(
                    rule = rule.id(),
                    schema = %schema.name,
                    count = detected.len(),
                    "rule executed"
                );
                issues.extend(detected);
            }
            Err(error) => {
                warn!(rule = rule.id(), schema = %schema.name, %error, "rule failed");
                issues.push(Issue::table(
                    &schema.name,
                    "",
                    rule.id(),
                    IssueSeverity::InternalError,
                    format!("rule {} failed: {error}", rule.id()),
                ));
            }
        }
    }
    issues
}
