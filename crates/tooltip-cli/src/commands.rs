use anyhow::{Context, Result};
use tracing::info;

use tooltip_cli::listing::{render_rows, render_rows_json};
use tooltip_cli::pipeline::{DocumentJob, ProcessReport, process_document};
use tooltip_ingest::load_row_table;

use crate::cli::{FillArgs, RowsArgs};

pub fn run_fill(args: &FillArgs) -> Result<ProcessReport> {
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        spreadsheet = %args.spreadsheet.display(),
        "filling tooltips"
    );
    let table = load_row_table(&args.spreadsheet, args.sheet.as_deref())
        .with_context(|| format!("load spreadsheet {}", args.spreadsheet.display()))?;
    let job = DocumentJob::new(&args.input)
        .with_output(Some(args.output.clone()))
        .with_dry_run(args.dry_run);
    process_document(&job, &table)
}

pub fn run_rows(args: &RowsArgs) -> Result<()> {
    let table = load_row_table(&args.spreadsheet, args.sheet.as_deref())
        .with_context(|| format!("load spreadsheet {}", args.spreadsheet.display()))?;
    if args.json {
        println!("{}", render_rows_json(&table).context("serialize rows")?);
    } else {
        print!("{}", render_rows(&table));
    }
    Ok(())
}
