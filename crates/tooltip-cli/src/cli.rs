//! CLI argument definitions for the tooltip filler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

pub const DEFAULT_INPUT: &str = "template.pdf";
pub const DEFAULT_OUTPUT: &str = "output_modified.pdf";
pub const DEFAULT_SPREADSHEET: &str = "Perla_11_1_vorlage-steps.xlsx";

#[derive(Parser)]
#[command(
    name = "tooltip-filler",
    version,
    about = "Fill PDF annotation tooltips with spreadsheet row data",
    long_about = "Replace the text of PDF tooltip annotations that reference a spreadsheet \
                  row (\"row 38 taxon\") with that row's data.\n\n\
                  Text, Note, FreeText, Popup and Highlight annotations are processed; \
                  annotations without a matching row keep their content.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub fill: FillArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the rows loaded from a spreadsheet.
    Rows(RowsArgs),
}

#[derive(Args)]
pub struct FillArgs {
    /// PDF whose annotations reference spreadsheet rows.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the modified PDF.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Spreadsheet (xlsx, xlsm, xlsb, xls, ods or csv) holding the row data.
    #[arg(value_name = "SPREADSHEET", default_value = DEFAULT_SPREADSHEET)]
    pub spreadsheet: PathBuf,

    /// Worksheet to read (default: the first worksheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Resolve and report without writing the output PDF.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RowsArgs {
    /// Spreadsheet to read.
    #[arg(value_name = "SPREADSHEET", default_value = DEFAULT_SPREADSHEET)]
    pub spreadsheet: PathBuf,

    /// Worksheet to read (default: the first worksheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Print the rows as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
