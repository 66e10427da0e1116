//! Terminal rendering of catalog reports.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use celldex_model::Record;

use celldex_cli::types::CatalogReport;

/// Print the whole report as one pretty-printed JSON document.
pub fn print_json(report: &CatalogReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the report as terminal tables.
pub fn print_report(report: &CatalogReport) {
    println!("Catalog: {}", report.source.display());
    print_highlights(report);
    print_release_table(report);
    print_oem_table(report);
    print_delayed_table(report);
    print_single_feature_table(report);
}

fn print_highlights(report: &CatalogReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![Cell::new("Records"), Cell::new(report.record_count)]);
    match &report.weight {
        Some(weight) => {
            table.add_row(vec![
                Cell::new("Mean weight"),
                Cell::new(format!("{:.1} g", weight.mean_grams)),
            ]);
            table.add_row(vec![
                Cell::new("Lightest"),
                Cell::new(format!(
                    "{} ({:.1} g)",
                    record_label(&weight.lightest.record),
                    weight.lightest.record.body_weight
                )),
            ]);
            table.add_row(vec![
                Cell::new("Heaviest"),
                Cell::new(format!(
                    "{} ({:.1} g)",
                    record_label(&weight.heaviest.record),
                    weight.heaviest.record.body_weight
                )),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Mean weight"), dim_cell("-")]);
        }
    }
    match report.busiest_year {
        Some(busiest) => table.add_row(vec![
            Cell::new("Busiest year"),
            Cell::new(format!("{} ({} releases)", busiest.year, busiest.count)),
        ]),
        None => table.add_row(vec![Cell::new("Busiest year"), dim_cell("-")]),
    };
    if let Some(asked) = report.releases_in {
        table.add_row(vec![
            Cell::new(format!("Releases in {}", asked.year)),
            Cell::new(asked.count),
        ]);
    }
    match &report.mode {
        Some(result) => table.add_row(vec![
            Cell::new(format!("Most common {}", result.attribute)),
            Cell::new(format!("{} ({} records)", result.value, result.count)),
        ]),
        None => table.add_row(vec![Cell::new("Most common value"), dim_cell("-")]),
    };
    match &report.heaviest_oem {
        Some(average) => table.add_row(vec![
            Cell::new("Heaviest manufacturer"),
            Cell::new(format!(
                "{} ({:.1} g avg)",
                average.oem.as_deref().unwrap_or("-"),
                average.mean_grams
            )),
        ]),
        None => table.add_row(vec![Cell::new("Heaviest manufacturer"), dim_cell("-")]),
    };
    table.add_row(vec![
        Cell::new("Single-feature phones"),
        Cell::new(report.single_feature.len()),
    ]);
    table.add_row(vec![
        Cell::new("Delayed releases"),
        Cell::new(report.delayed.len()),
    ]);

    println!("{table}");
}

fn print_release_table(report: &CatalogReport) {
    if report.releases_by_year.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Releases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total = 0usize;
    for (year, count) in &report.releases_by_year {
        total += count;
        table.add_row(vec![Cell::new(year), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Releases by year:");
    println!("{table}");
}

fn print_oem_table(report: &CatalogReport) {
    if report.oem_averages.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("OEM"),
        header_cell("Phones"),
        header_cell("Avg weight (g)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for average in &report.oem_averages {
        let oem_cell = match average.oem.as_deref() {
            Some(oem) => Cell::new(oem),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            oem_cell,
            Cell::new(average.count),
            Cell::new(format!("{:.1}", average.mean_grams)),
        ]);
    }
    println!();
    println!("Manufacturers:");
    println!("{table}");
}

fn print_delayed_table(report: &CatalogReport) {
    if report.delayed.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("OEM"),
        header_cell("Model"),
        header_cell("Announced"),
        header_cell("Released"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for line in &report.delayed {
        table.add_row(vec![
            Cell::new(line.id),
            text_cell(line.record.oem.as_deref()),
            text_cell(line.record.model.as_deref()),
            Cell::new(line.record.launch_announced),
            Cell::new(&line.record.launch_status),
        ]);
    }
    println!();
    println!("Delayed releases:");
    println!("{table}");
}

fn print_single_feature_table(report: &CatalogReport) {
    if report.single_feature.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("OEM"),
        header_cell("Model"),
        header_cell("Feature"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for line in &report.single_feature {
        let feature = if line.record.feature_sensors.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&line.record.feature_sensors)
        };
        table.add_row(vec![
            Cell::new(line.id),
            text_cell(line.record.oem.as_deref()),
            text_cell(line.record.model.as_deref()),
            feature,
        ]);
    }
    println!();
    println!("Single-feature phones:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn record_label(record: &Record) -> String {
    format!(
        "{} {}",
        record.oem.as_deref().unwrap_or("-"),
        record.model.as_deref().unwrap_or("-")
    )
}
