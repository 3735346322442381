use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tooltip_cli::pipeline::{Outcome, ProcessReport};

pub fn print_summary(report: &ProcessReport) {
    println!("Pages: {}", report.page_count);
    if report.outcomes.is_empty() {
        println!("No tooltips found in the PDF.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("#"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Current content"),
        header_cell("New content"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    limit_column(&mut table, 4, 40);
    limit_column(&mut table, 5, 48);

    for entry in &report.outcomes {
        let annotation = &entry.annotation;
        let (status, current, new) = match &entry.outcome {
            Outcome::Updated { before, after } => (
                Cell::new("updated").fg(Color::Green),
                content_cell(before),
                content_cell(after),
            ),
            Outcome::Unchanged { current } => (
                Cell::new("kept").fg(Color::Yellow),
                content_cell(current),
                dim_cell("no matching row data"),
            ),
        };
        table.add_row(vec![
            Cell::new(annotation.page),
            Cell::new(annotation.index + 1),
            Cell::new(&annotation.kind),
            status,
            current,
            new,
        ]);
    }
    println!("{table}");

    println!(
        "Total tooltips processed: {} ({} updated)",
        report.tooltip_count(),
        report.updated_count()
    );
    match &report.saved_to {
        Some(path) => println!("Modified PDF saved as: {}", path.display()),
        None => println!("Dry run: modified PDF not written."),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn content_cell(text: &str) -> Cell {
    if text.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(text)
    }
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn limit_column(table: &mut Table, index: usize, width: u16) {
    if let Some(column) = table.column_mut(index) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(width)));
    }
}
