use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_cli::types::AuditRunResult;

pub fn print_summary(result: &AuditRunResult) {
    println!("Base folder: {}", result.base_folder.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schema"),
        header_cell("Tables"),
        header_cell("Columns"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Report"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for column_index in 1..=4 {
        if let Some(column) = table.column_mut(column_index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_tables = 0u64;
    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for outcome in &result.schemas {
        if let Some(failure) = &outcome.failure {
            table.add_row(vec![
                Cell::new(&outcome.schema).fg(Color::Red),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(format!("FAILED: {failure}")).fg(Color::Red),
            ]);
            continue;
        }
        total_tables += outcome.tables;
        total_errors += outcome.errors;
        total_warnings += outcome.warnings;
        table.add_row(vec![
            Cell::new(&outcome.schema),
            Cell::new(outcome.tables),
            Cell::new(outcome.columns),
            count_cell(outcome.errors, Color::Red),
            count_cell(outcome.warnings, Color::Yellow),
            match &outcome.report_dir {
                Some(dir) => Cell::new(dir.display()),
                None => Cell::new("(dry run)").add_attribute(Attribute::Dim),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_tables).add_attribute(Attribute::Bold),
        Cell::new(""),
        count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");

    let failures: Vec<&str> = result
        .schemas
        .iter()
        .filter(|outcome| outcome.failure.is_some())
        .map(|outcome| outcome.schema.as_str())
        .collect();
    if !failures.is_empty() {
        eprintln!("Failed schemas: {}", failures.join(", "));
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}
