//! Measures (raw totals) and metrics (normalized quality indicators).

use serde::{Deserialize, Serialize};

/// A named structural total, scoped to one schema.
///
/// Recomputed fresh each run from the current metadata model; zero is a
/// valid value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub schema: String,
    #[serde(rename = "measure_name")]
    pub name: String,
    pub value: u64,
}

/// A named ratio derived from one issue count and one measure.
///
/// `value` is `None` when the denominator measure is zero ("not
/// applicable"), never `0.0` and never an error. When the numerator counts
/// a subset of what the denominator counts, the value lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub schema: String,
    #[serde(rename = "metric_name")]
    pub name: String,
    pub value: Option<f64>,
}

/// Registration entry for one metric: which issue count over which measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDef {
    pub name: String,
    /// Rule id whose issue count forms the numerator.
    pub rule_id: String,
    /// Measure name forming the denominator.
    pub denominator: String,
}

impl MetricDef {
    pub fn new(name: &str, rule_id: &str, denominator: &str) -> Self {
        Self {
            name: name.to_string(),
            rule_id: rule_id.to_string(),
            denominator: denominator.to_string(),
        }
    }
}

/// Look up a measure by name.
pub fn find_measure<'a>(measures: &'a [Measure], name: &str) -> Option<&'a Measure> {
    measures.iter().find(|measure| measure.name == name)
}
