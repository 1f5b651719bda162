//! Measure aggregation and metric derivation over a schema metadata model.

mod measures;
mod metrics;

pub use measures::{
    COLUMN_COUNT, FK_COUNT, NULLABLE_COUNT, PK_COUNT, TABLE_COUNT, aggregate_measures,
};
pub use metrics::{MetricsError, calculate_metrics};

#[cfg(test)]
mod tests {
    use dq_model::{Issue, IssueSeverity, Measure, MetricDef};

    use super::{MetricsError, calculate_metrics};

    fn measure(name: &str, value: u64) -> Measure {
        Measure {
            schema: "S1".to_string(),
            name: name.to_string(),
            value,
        }
    }

    fn missing_pk_issue(table: &str) -> Issue {
        Issue::table(
            "S1",
            table,
            "missing_pk",
            IssueSeverity::Error,
            "table has no primary key",
        )
    }

    #[test]
    fn ratio_of_issue_count_over_measure() {
        let defs = vec![MetricDef::new("missing_pk_ratio", "missing_pk", "table_count")];
        let issues = vec![missing_pk_issue("T1"), missing_pk_issue("T2")];
        let measures = vec![measure("table_count", 4)];
        let metrics = calculate_metrics("S1", &defs, &issues, &measures).expect("metrics");
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].value, Some(0.5));
    }

    #[test]
    fn zero_denominator_is_not_applicable() {
        let defs = vec![MetricDef::new("dangling_fk_ratio", "dangling_fk", "fk_count")];
        let measures = vec![measure("fk_count", 0)];
        let metrics = calculate_metrics("S1", &defs, &[], &measures).expect("metrics");
        assert_eq!(metrics[0].value, None);
    }

    #[test]
    fn unknown_denominator_is_fatal() {
        let defs = vec![MetricDef::new("broken", "missing_pk", "no_such_measure")];
        let error = calculate_metrics("S1", &defs, &[], &[]).unwrap_err();
        assert!(matches!(error, MetricsError::UnknownDenominator { .. }));
    }

    #[test]
    fn output_follows_registration_order() {
        let defs = vec![
            MetricDef::new("b_ratio", "empty_table", "table_count"),
            MetricDef::new("a_ratio", "missing_pk", "table_count"),
        ];
        let measures = vec![measure("table_count", 1)];
        let metrics = calculate_metrics("S1", &defs, &[], &measures).expect("metrics");
        let names: Vec<&str> = metrics.iter().map(|metric| metric.name.as_str()).collect();
        assert_eq!(names, vec!["b_ratio", "a_ratio"]);
    }
}
