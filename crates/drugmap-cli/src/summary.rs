use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ReportResult, RunResult};

pub fn print_run_summary(result: &RunResult) {
    println!("Resources: {}", result.resources_dir.display());
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Publications: {}  Mentions: {}",
        result.publications, result.mentions
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Drug"),
        header_cell("Journals"),
        header_cell("Publications"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_publications = 0usize;
    for summary in &result.drugs {
        total_publications += summary.publications;
        table.add_row(vec![
            drug_cell(&summary.drug, summary.publications),
            count_cell(summary.journals),
            count_cell(summary.publications),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_publications).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_warnings(&result.warnings);
}

pub fn print_report(result: &ReportResult) {
    println!("Graph: {}", result.graph_path.display());
    let label = if result.top_journals.len() == 1 {
        "Top journal"
    } else {
        "Top journals"
    };
    println!(
        "{label} ({} distinct drugs): {}",
        result.top_drug_count,
        result.top_journals.join(", ")
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Journal"), header_cell("Drugs")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (journal, count) in &result.journal_counts {
        let journal_cell = if *count == result.top_drug_count {
            Cell::new(journal)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(journal)
        };
        table.add_row(vec![journal_cell, Cell::new(count)]);
    }
    println!("{table}");
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("- {warning}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn drug_cell(drug: &str, publications: usize) -> Cell {
    if publications == 0 {
        Cell::new(drug).fg(Color::DarkGrey)
    } else {
        Cell::new(drug)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
