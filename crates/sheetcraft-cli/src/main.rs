//! Sheetcraft CLI - build reports from JSON and read records back

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetcraft::build_workbook_with_options;
use sheetcraft::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetcraft")]
#[command(author, version, about = "Declarative XLSX reports and record extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an XLSX report from a JSON array of pages
    Build {
        /// JSON file with the pages (use - for stdin)
        pages: PathBuf,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// Font for titles, headers and data rows
        #[arg(long, default_value = "Calibri")]
        font: String,

        /// Number format for date cells without one
        #[arg(long)]
        date_format: Option<String>,

        /// Leave data rows unstyled
        #[arg(long)]
        plain_rows: bool,
    },

    /// Read a run of cells as a JSON record
    Extract {
        /// Input XLSX file
        input: PathBuf,

        /// Sheet name or 0-based index
        #[arg(short, long, default_value = "0")]
        sheet: String,

        /// Row of the first cell (1-based)
        #[arg(short, long)]
        row: u32,

        /// Column of the first cell (1-based)
        #[arg(short, long)]
        col: u16,

        /// Direction to read in: row or column
        #[arg(short, long, default_value = "row")]
        direction: ReadDirection,

        /// Comma-separated field names, one per cell
        #[arg(short, long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
    },

    /// Print one normalized cell value as JSON
    Value {
        /// Input XLSX file
        input: PathBuf,

        /// Sheet name or 0-based index
        #[arg(short, long, default_value = "0")]
        sheet: String,

        /// Row (1-based)
        #[arg(short, long)]
        row: u32,

        /// Column (1-based)
        #[arg(short, long)]
        col: u16,
    },

    /// List all sheets in a document
    Sheets {
        /// Input XLSX file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            pages,
            output,
            font,
            date_format,
            plain_rows,
        } => {
            let mut options = ReportOptions {
                font_name: font,
                style_data_rows: !plain_rows,
                ..ReportOptions::default()
            };
            if let Some(format) = date_format {
                options.date_format = format;
            }
            build(&pages, &output, &options)
        }
        Commands::Extract {
            input,
            sheet,
            row,
            col,
            direction,
            fields,
        } => extract(&input, &sheet, row, col, direction, &fields),
        Commands::Value {
            input,
            sheet,
            row,
            col,
        } => value(&input, &sheet, row, col),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn build(pages_path: &Path, output: &Path, options: &ReportOptions) -> Result<()> {
    let pages: Vec<Page> = if pages_path == Path::new("-") {
        serde_json::from_reader(io::stdin().lock()).context("Failed to parse pages from stdin")?
    } else {
        let file = File::open(pages_path)
            .with_context(|| format!("Failed to open '{}'", pages_path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse pages from '{}'", pages_path.display()))?
    };

    let workbook =
        build_workbook_with_options(&pages, options).context("Failed to build report")?;
    Document::from(workbook)
        .save(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!("Wrote {} sheets to '{}'", pages.len(), output.display());
    Ok(())
}

fn open(input: &Path) -> Result<Document> {
    Document::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

/// Resolve a sheet argument: a number selects by index, anything else by name
fn select<'a>(document: &'a Document, sheet: &str) -> Result<&'a Worksheet> {
    let found = match sheet.parse::<usize>() {
        Ok(index) => document.sheet(index),
        Err(_) => document.sheet(sheet),
    };
    Ok(found?)
}

fn extract(
    input: &Path,
    sheet: &str,
    row: u32,
    col: u16,
    direction: ReadDirection,
    fields: &[String],
) -> Result<()> {
    let document = open(input)?;
    let record = select(&document, sheet)?
        .values_by_schema(row, col, direction, fields)
        .with_context(|| format!("Failed to read record at ({}, {})", row, col))?;
    print_json(&record)
}

fn value(input: &Path, sheet: &str, row: u32, col: u16) -> Result<()> {
    let document = open(input)?;
    let value = select(&document, sheet)?
        .value(row, col)
        .with_context(|| format!("Failed to read cell ({}, {})", row, col))?;
    print_json(&value)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to encode JSON")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let document = open(input)?;
    for (i, name) in document.sheet_names().into_iter().enumerate() {
        println!("{}\t{}", i, name);
    }
    Ok(())
}
