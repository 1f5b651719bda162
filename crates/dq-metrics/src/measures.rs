//! Measure aggregation: fixed structural totals counted directly from the
//! metadata model. Independent of issues, and computed before metric
//! calculation since metrics reference measures by name as denominators.

use dq_model::{Measure, SchemaMetadata};

pub const TABLE_COUNT: &str = "table_count";
pub const COLUMN_COUNT: &str = "column_count";
pub const PK_COUNT: &str = "pk_count";
pub const FK_COUNT: &str = "fk_count";
pub const NULLABLE_COUNT: &str = "nullable_count";

/// Compute the fixed measure set for one schema.
///
/// Key counts are column-grained: `pk_count` is the number of columns
/// participating in a primary key, `fk_count` the number of columns carrying
/// a foreign-key reference. Zero values are valid.
pub fn aggregate_measures(schema: &SchemaMetadata) -> Vec<Measure> {
    let mut column_count = 0u64;
    let mut pk_count = 0u64;
    let mut fk_count = 0u64;
    let mut nullable_count = 0u64;

    for table in &schema.tables {
        column_count += table.columns.len() as u64;
        pk_count += table.primary_key.len() as u64;
        for column in &table.columns {
            if column.foreign_key.is_some() {
                fk_count += 1;
            }
            if column.nullable {
                nullable_count += 1;
            }
        }
    }

    let measure = |name: &str, value: u64| Measure {
        schema: schema.name.clone(),
        name: name.to_string(),
        value,
    };

    vec![
        measure(TABLE_COUNT, schema.tables.len() as u64),
        measure(COLUMN_COUNT, column_count),
        measure(PK_COUNT, pk_count),
        measure(FK_COUNT, fk_count),
        measure(NULLABLE_COUNT, nullable_count),
    ]
}
