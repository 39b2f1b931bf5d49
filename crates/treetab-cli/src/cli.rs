//! CLI argument definitions for the treetab export tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "treetab",
    version,
    about = "Export hierarchical sample records as rectangular tables",
    long_about = "Flatten tree-shaped sample, series, and process records into a\n\
                  rectangular table and serialize it as tab- or comma-delimited text.\n\
                  Input is one record tree in JSON form, as produced by the sample\n\
                  database."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// List the column groups and columns of a record tree.
    Schema(SchemaArgs),

    /// Export selected columns of a record tree as delimited text.
    Export(ExportArgs),

    /// Print a bordered text preview of the selected columns.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the record tree JSON file.
    #[arg(value_name = "TREE")]
    pub tree: PathBuf,

    /// Restrict the listing to these column groups (comma separated).
    #[arg(long = "groups", value_delimiter = ',', value_name = "NAME")]
    pub groups: Vec<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the record tree JSON file.
    #[arg(value_name = "TREE")]
    pub tree: PathBuf,

    /// Column indices to export, in output order (comma separated).
    #[arg(
        long = "columns",
        value_delimiter = ',',
        value_name = "INDEX",
        required = true
    )]
    pub columns: Vec<String>,

    /// Field delimiter.
    #[arg(long = "delimiter", value_enum, default_value = "tab")]
    pub delimiter: DelimiterArg,

    /// Output text encoding.
    #[arg(long = "encoding", value_enum, default_value = "utf-8")]
    pub encoding: EncodingArg,

    /// Output file (default: export-<timestamp>.csv in the working directory).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Heading of the leading row-label column.
    #[arg(long = "label-heading", default_value = "sample")]
    pub label_heading: String,

    /// Drop the leading row-label column (lab notebook layout).
    #[arg(long = "ignore-labels")]
    pub ignore_labels: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the record tree JSON file.
    #[arg(value_name = "TREE")]
    pub tree: PathBuf,

    /// Column indices to preview, in output order (comma separated).
    #[arg(
        long = "columns",
        value_delimiter = ',',
        value_name = "INDEX",
        required = true
    )]
    pub columns: Vec<String>,

    /// Heading of the leading row-label column.
    #[arg(long = "label-heading", default_value = "sample")]
    pub label_heading: String,

    /// Drop the leading row-label column.
    #[arg(long = "ignore-labels")]
    pub ignore_labels: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Tab,
    Comma,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "windows-1252")]
    Windows1252,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
