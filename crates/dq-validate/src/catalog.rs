use crate::Rule;
use crate::rules::{columns, keys, naming, references};

/// Ordered, append-only registry of rules.
///
/// Declaration order fixes the issue output order, so reports stay
/// diff-friendly across runs.
#[derive(Default)]
pub struct RuleCatalog {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog, in report order.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(keys::MissingPrimaryKey));
        catalog.register(Box::new(columns::EmptyTable));
        catalog.register(Box::new(columns::UnknownDataType));
        catalog.register(Box::new(columns::DuplicateColumn));
        catalog.register(Box::new(keys::NullablePrimaryKey));
        catalog.register(Box::new(references::DanglingForeignKey));
        catalog.register(Box::new(naming::TableNaming));
        catalog.register(Box::new(naming::ColumnNaming));
        catalog.register(Box::new(naming::PluralTableName));
        catalog.register(Box::new(naming::TableNameTooLong));
        catalog.register(Box::new(naming::ColumnNameTooLong));
        catalog.register(Box::new(naming::ColumnPrefix));
        catalog
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
