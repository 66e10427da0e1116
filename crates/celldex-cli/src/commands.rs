use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use celldex_cli::pipeline::{build_catalog_report, load_store};
use celldex_cli::types::RecordLine;
use celldex_model::{Attribute, SCHEMA};

use crate::cli::{InspectArgs, ReportArgs};
use crate::summary::{apply_table_style, header_cell, print_json, print_report};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let attribute = args.attribute.unwrap_or(Attribute::Oem);
    let report = build_catalog_report(&args.catalog, args.year, attribute)?;
    if args.json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", catalog = %args.catalog.display(), id = %args.id);
    let _guard = span.enter();
    let store = load_store(&args.catalog)?;
    let record = store.get(args.id)?;
    if args.json {
        let line = RecordLine::new(args.id, record);
        println!("{}", serde_json::to_string_pretty(&line)?);
    } else {
        println!("{}", record.to_verbose(args.id));
    }
    Ok(())
}

pub fn run_schema() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribute"),
        header_cell("Type"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    for spec in &SCHEMA {
        table.add_row(vec![
            spec.name.to_string(),
            spec.kind.to_string(),
            spec.rule.describe().to_string(),
        ]);
    }
    println!("{table}");
}
