//! Metric calculation: normalized quality indicators derived from issue
//! counts and measures.

use dq_model::{Issue, Measure, Metric, MetricDef, count_by_rule, find_measure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// A metric definition references a measure the aggregator does not
    /// produce. This is a catalog/registry mismatch, not a data problem, so
    /// it is surfaced immediately instead of being reported as an issue.
    #[error("metric {metric} references unknown denominator measure {measure}")]
    UnknownDenominator { metric: String, measure: String },
}

/// Compute every registered metric, in registration order.
///
/// Numerator: count of issues recorded under the definition's rule id.
/// Denominator: the named measure. A zero denominator yields a
/// "not applicable" value (`None`), never `0.0` and never an error.
pub fn calculate_metrics(
    schema: &str,
    definitions: &[MetricDef],
    issues: &[Issue],
    measures: &[Measure],
) -> Result<Vec<Metric>, MetricsError> {
    let mut metrics = Vec::with_capacity(definitions.len());
    for definition in definitions {
        let denominator = find_measure(measures, &definition.denominator).ok_or_else(|| {
            MetricsError::UnknownDenominator {
                metric: definition.name.clone(),
                measure: definition.denominator.clone(),
            }
        })?;
        let numerator = count_by_rule(issues, &definition.rule_id);
        let value = if denominator.value == 0 {
            None
        } else {
            Some(numerator as f64 / denominator.value as f64)
        };
        metrics.push(Metric {
            schema: schema.to_string(),
            name: definition.name.clone(),
            value,
        });
    }
    Ok(metrics)
}
