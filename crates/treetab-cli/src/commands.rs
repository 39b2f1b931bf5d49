//! Command implementations for the treetab CLI.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use indicatif::ProgressBar;
use tracing::info;

use treetab_model::RecordNode;
use treetab_output::{CsvOptions, CsvSerializer, Delimiter, Table, TextEncoding, generate_table,
    render_preview};
use treetab_transform::{ExportPlan, columns_for_groups, parse_column_indices, prepare_export};

use crate::cli::{DelimiterArg, EncodingArg, ExportArgs, PreviewArgs, SchemaArgs};

/// Read a record tree from its JSON file.
pub fn load_tree(path: &Path) -> anyhow::Result<RecordNode> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let tree = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse record tree from {}", path.display()))?;
    Ok(tree)
}

/// List column groups and their columns, optionally narrowed to a group
/// selection (the second round-trip of the export dialog).
pub fn run_schema(args: &SchemaArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let plan = prepare_export(tree);
    if args.groups.is_empty() {
        for group in &plan.schema.column_groups {
            println!("{}", group.name);
            for (key, index) in &group.key_indices {
                println!("  {index:>4}  {key}");
            }
        }
    } else {
        let selected: BTreeSet<String> = args.groups.iter().cloned().collect();
        for (name, indices) in columns_for_groups(&plan.schema, &selected) {
            println!("{name}");
            for index in indices {
                println!("  {index:>4}  {}", plan.schema.columns[index].key);
            }
        }
    }
    Ok(())
}

/// Run the full export pipeline and write the delimited output file.
/// Returns the path written.
pub fn run_export(args: &ExportArgs) -> anyhow::Result<PathBuf> {
    let tree = load_tree(&args.tree)?;
    let plan = prepare_export(tree);
    let table = build_table(
        &plan,
        &args.columns,
        &args.label_heading,
        args.ignore_labels,
    )?;
    let options = CsvOptions {
        delimiter: match args.delimiter {
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Comma => Delimiter::Comma,
        },
        encoding: match args.encoding {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Windows1252 => TextEncoding::Windows1252,
        },
    };
    let path = args
        .output
        .clone()
        .unwrap_or_else(default_output_filename);
    let file = File::create(&path)
        .with_context(|| format!("cannot create output file {}", path.display()))?;
    let mut serializer = CsvSerializer::new(BufWriter::new(file), options);
    let progress = ProgressBar::new(table.rows.len() as u64);
    for row in &table.rows {
        serializer.write_row(row)?;
        progress.inc(1);
    }
    serializer.finish()?;
    progress.finish_and_clear();
    info!(
        rows = table.rows.len() - 1,
        columns = table.width(),
        path = %path.display(),
        "export written"
    );
    Ok(path)
}

/// Print a bordered text preview of the selected columns.
pub fn run_preview(args: &PreviewArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let plan = prepare_export(tree);
    let table = build_table(
        &plan,
        &args.columns,
        &args.label_heading,
        args.ignore_labels,
    )?;
    println!("{}", render_preview(&table));
    Ok(())
}

fn build_table(
    plan: &ExportPlan,
    raw_columns: &[String],
    label_heading: &str,
    ignore_labels: bool,
) -> anyhow::Result<Table> {
    let indices = parse_column_indices(raw_columns)?;
    let empty_labels;
    let labels: &[String] = if ignore_labels {
        empty_labels = vec![String::new(); plan.rows.len()];
        &empty_labels
    } else {
        &plan.row_labels
    };
    let table = generate_table(
        &plan.rows,
        &plan.schema.columns,
        &indices,
        labels,
        label_heading,
    )?;
    Ok(table)
}

fn default_output_filename() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("export-{stamp}.csv"))
}
